use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::command;

/// Move a tracked file with `git mv`, preserving its history.
///
/// Paths are interpreted relative to `repo_dir`.
pub fn move_path(repo_dir: &Path, from: &str, to: &str) -> Result<()> {
    command::run_in(repo_dir, "git", &["mv", from, to], "git mv")
        .map_err(|e| Error::git_command_failed(e.message))?;
    Ok(())
}

/// Check whether `path` is inside a git working tree.
pub fn is_git_repo(path: &Path) -> bool {
    command::run_in(path, "git", &["rev-parse", "--git-dir"], "git rev-parse").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_path_outside_repo_is_git_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"png").unwrap();

        let err = move_path(dir.path(), "a.png", "b.png").unwrap_err();
        assert_eq!(err.code.as_str(), "git.command_failed");
        assert!(dir.path().join("a.png").exists());
    }

    #[test]
    fn empty_temp_dir_is_not_a_repo() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_git_repo(dir.path()));
    }
}
