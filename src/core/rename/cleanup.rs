use super::config::RenameConfig;
use super::plan::RenameEntry;
use crate::output::BatchResult;
use crate::utils::io;

/// Delete the derived metadata file left behind at each original path.
///
/// Missing files are recorded as skipped. A removal error is recorded and the
/// loop continues; the engine regenerates whatever is left.
pub fn remove_metadata_files<'a>(
    renamed: impl IntoIterator<Item = &'a RenameEntry>,
    config: &RenameConfig,
) -> BatchResult {
    let mut result = BatchResult::new();

    for entry in renamed {
        let relative = config.metadata_path(&entry.from);
        let path = config.root.join(&relative);

        match io::remove_file_if_exists(&path, &format!("remove {}", relative)) {
            Ok(true) => result.record_success(relative, None, "removed"),
            Ok(false) => result.record_skipped(relative, None),
            Err(e) => {
                log_status!("rename", "Could not remove {}: {}", relative, e);
                result.record_error(relative, None, e.to_string());
            }
        }
    }

    result
}
