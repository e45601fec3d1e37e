use std::path::Path;

use crate::error::Result;
use crate::git;

/// Moves a file while preserving whatever history the backend keeps.
///
/// Paths are relative to `root`. Implementations must leave the source in
/// place when they return an error.
pub trait FileMover {
    fn move_file(&self, root: &Path, from: &str, to: &str) -> Result<()>;
}

/// Moves files with `git mv`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitMover;

impl FileMover for GitMover {
    fn move_file(&self, root: &Path, from: &str, to: &str) -> Result<()> {
        git::move_path(root, from, to)
    }
}
