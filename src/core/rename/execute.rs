use super::config::{RenameConfig, RunMode};
use super::mover::FileMover;
use super::plan::RenameSet;
use crate::output::BatchResult;

/// Move every entry in order. A failed move is recorded and the batch
/// continues; nothing already moved is rolled back.
///
/// In dry-run mode every entry is recorded as skipped and the mover is never
/// called.
pub fn perform_renames(
    set: &RenameSet,
    config: &RenameConfig,
    mover: &dyn FileMover,
    mode: RunMode,
) -> BatchResult {
    let mut result = BatchResult::new();

    for entry in set {
        if mode.is_dry_run() {
            result.record_skipped(entry.from.clone(), Some(entry.to.clone()));
            continue;
        }

        match mover.move_file(&config.root, &entry.from, &entry.to) {
            Ok(()) => {
                result.record_success(entry.from.clone(), Some(entry.to.clone()), "renamed");
            }
            Err(e) => {
                log_status!("rename", "FAILED: {} → {}: {}", entry.from, entry.to, e);
                result.record_error(entry.from.clone(), Some(entry.to.clone()), e.to_string());
            }
        }
    }

    result
}
