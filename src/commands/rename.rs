use clap::Args;
use std::fmt::Write;

use asset_tools::git;
use asset_tools::rename::{self, GitMover, RenameConfig, RenameReport, RunMode};

use crate::commands::CmdResult;

const BANNER: &str = "============================================================";

#[derive(Args, Debug, Default)]
pub struct RenameArgs {
    /// Perform the moves and rewrites (default is a dry run that only lists them)
    #[arg(long)]
    pub execute: bool,
}

pub fn run(args: RenameArgs) -> CmdResult<String> {
    let config = RenameConfig::default();
    let mode = RunMode::from_execute_flag(args.execute);

    if !mode.is_dry_run() && !git::is_git_repo(&config.root) {
        asset_tools::log_status!(
            "git",
            "{} is not inside a git work tree; moves will fail",
            config.root.display()
        );
    }

    let report = rename::run_rename(&config, &GitMover, mode)?;

    // Per-item failures are part of the report, not a process failure.
    Ok((render_report(&report, &config), 0))
}

/// Render the operator-facing text report for a finished run.
pub fn render_report(report: &RenameReport, config: &RenameConfig) -> String {
    let mut out = String::new();
    let total = report.set.len();

    let _ = writeln!(out, "Found {} files to rename\n", total);
    for entry in report.set.iter().take(config.preview_limit) {
        let _ = writeln!(out, "{}", entry.from);
        let _ = writeln!(out, "  → {}", entry.to);
    }
    if total > config.preview_limit {
        let _ = writeln!(out, "\n... and {} more files", total - config.preview_limit);
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings:");
        for warning in &report.warnings {
            let _ = writeln!(out, "  [{}] {}", warning.kind, warning.message);
        }
    }

    if report.mode.is_dry_run() {
        let _ = writeln!(out, "\n{}", BANNER);
        let _ = writeln!(out, "DRY RUN MODE - No changes made");
        let _ = writeln!(out, "Run with --execute to perform the actual renaming");
        let _ = writeln!(out, "{}", BANNER);
        return out;
    }

    let _ = writeln!(out, "\n{}", BANNER);
    let _ = writeln!(out, "EXECUTING RENAME OPERATION");
    let _ = writeln!(out, "{}", BANNER);

    render_moves(&mut out, report);

    if report.halted() {
        let _ = writeln!(
            out,
            "\nSome renames failed. Fix errors before updating references."
        );
        return out;
    }

    if let Some(references) = &report.references {
        let _ = writeln!(out, "\nUpdating references in resource and scene files...");
        for item in &references.items {
            match &item.error {
                None => {
                    let _ = writeln!(out, "  Updated: {}", item.id);
                }
                Some(error) => {
                    let _ = writeln!(out, "  ERROR updating {}: {}", item.id, error);
                }
            }
        }
        let _ = writeln!(out, "\nUpdated references in {} files", references.succeeded);
    }

    if let Some(metadata) = &report.metadata {
        let suffix = &config.metadata_suffix;
        let _ = writeln!(out, "\nRemoving {} files...", suffix);
        for item in metadata.failures() {
            let _ = writeln!(
                out,
                "  ERROR removing {}: {}",
                item.id,
                item.error.as_deref().unwrap_or_default()
            );
        }
        let _ = writeln!(
            out,
            "Removed {} {} files (Godot will regenerate)",
            metadata.succeeded, suffix
        );
    }

    let _ = writeln!(out, "\n{}", BANNER);
    let _ = writeln!(out, "RENAME COMPLETE");
    let _ = writeln!(out, "Next steps:");
    let _ = writeln!(
        out,
        "1. Open project in Godot to regenerate {} files",
        config.metadata_suffix
    );
    let _ = writeln!(out, "2. Test that all assets load correctly");
    let _ = writeln!(out, "3. Commit changes");
    let _ = writeln!(out, "{}", BANNER);

    out
}

fn render_moves(out: &mut String, report: &RenameReport) {
    let renames = &report.renames;
    let _ = writeln!(out, "\nRenaming {} files...\n", report.set.len());

    for item in renames.failures() {
        let _ = writeln!(out, "FAILED: {}", item.id);
    }

    let _ = writeln!(out, "\nSuccessfully renamed {} files", renames.succeeded);
    if renames.has_errors() {
        let _ = writeln!(out, "Failed to rename {} files:", renames.errors);
        for item in renames.failures() {
            let _ = writeln!(
                out,
                "  {} → {}",
                item.id,
                item.target.as_deref().unwrap_or_default()
            );
            let _ = writeln!(
                out,
                "    Error: {}",
                item.error.as_deref().unwrap_or_default()
            );
        }
    }
}
