//! Asset filename normalization across a project tree.
//!
//! A run goes through these stages in order:
//! 1. Discover images under the asset directory whose names are not snake_case
//! 2. Order them deepest path first
//! 3. Move each one through a `FileMover` (or just list them in a dry run)
//! 4. Rewrite references in `.tres` / `.tscn` / `.gd` files
//! 5. Delete the stale `.import` files next to the old paths
//!
//! Stages 4 and 5 only run when every move in stage 3 succeeded.

mod cleanup;
mod config;
mod execute;
mod mover;
mod normalize;
mod plan;
mod references;
mod walk;

pub use cleanup::remove_metadata_files;
pub use config::{ImageExtension, ProjectFileKind, RenameConfig, RunMode};
pub use execute::perform_renames;
pub use mover::{FileMover, GitMover};
pub use normalize::to_snake_case;
pub use plan::{detect_collisions, discover, RenameEntry, RenameSet, RenameWarning};
pub use references::{update_references, ReferenceMap, Replacement};

use serde::Serialize;

use crate::error::Result;
use crate::output::BatchResult;

/// Everything a run did, stage by stage.
#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub mode: RunMode,
    pub set: RenameSet,
    pub warnings: Vec<RenameWarning>,
    /// Move outcomes. In a dry run every entry is `skipped`.
    pub renames: BatchResult,
    /// `None` when the stage did not run.
    pub references: Option<BatchResult>,
    /// `None` when the stage did not run.
    pub metadata: Option<BatchResult>,
}

impl RenameReport {
    /// True when moves failed and the follow-up stages were skipped.
    pub fn halted(&self) -> bool {
        !self.mode.is_dry_run() && self.renames.has_errors()
    }

    /// True when a live run finished every stage.
    pub fn completed(&self) -> bool {
        !self.mode.is_dry_run() && !self.renames.has_errors()
    }
}

/// Run the whole rename workflow rooted at `config.root`.
pub fn run_rename(
    config: &RenameConfig,
    mover: &dyn FileMover,
    mode: RunMode,
) -> Result<RenameReport> {
    let set = discover(config)?;
    let warnings = detect_collisions(&set, &config.root);
    for warning in &warnings {
        log_status!("rename", "{}: {}", warning.kind, warning.message);
    }

    let renames = perform_renames(&set, config, mover, mode);

    let mut report = RenameReport {
        mode,
        set,
        warnings,
        renames,
        references: None,
        metadata: None,
    };

    if !report.completed() {
        return Ok(report);
    }

    let map = ReferenceMap::new(&report.set, &config.resource_prefix);
    report.references = Some(update_references(&map, config));

    let renamed: Vec<&RenameEntry> = report
        .set
        .iter()
        .filter(|entry| {
            report
                .renames
                .with_status("renamed")
                .any(|item| item.id == entry.from)
        })
        .collect();
    report.metadata = Some(remove_metadata_files(renamed, config));

    Ok(report)
}
