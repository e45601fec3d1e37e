use std::path::{Path, PathBuf};

/// Directories never entered at any depth (VCS metadata).
const ALWAYS_SKIP_DIRS: &[&str] = &[".git", ".svn", ".hg"];

/// Recursively collect files under `dir` accepted by `keep`.
///
/// Entries are visited in sorted order so results are stable across
/// platforms. Symlinked directories are not followed.
pub(crate) fn walk_files(dir: &Path, keep: &dyn Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_recursive(dir, keep, &mut files);
    files
}

fn walk_recursive(dir: &Path, keep: &dyn Fn(&Path) -> bool, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            let name = entry.file_name().to_string_lossy().to_string();
            if ALWAYS_SKIP_DIRS.contains(&name.as_str()) {
                continue;
            }
            walk_recursive(&path, keep, files);
        } else if path.is_file() && keep(&path) {
            files.push(path);
        }
    }
}

/// Path of `path` relative to `root`, with `/` separators.
pub(crate) fn relative_slash_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn skips_vcs_dirs_and_filters_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::create_dir_all(root.join("scenes/sub")).unwrap();
        fs::write(root.join(".git/objects/stale.tscn"), "").unwrap();
        fs::write(root.join("scenes/main.tscn"), "").unwrap();
        fs::write(root.join("scenes/sub/b.tscn"), "").unwrap();
        fs::write(root.join("scenes/readme.md"), "").unwrap();

        let keep = |p: &Path| p.extension().map(|e| e == "tscn").unwrap_or(false);
        let found: Vec<String> = walk_files(root, &keep)
            .iter()
            .map(|p| relative_slash_path(p, root))
            .collect();

        assert_eq!(found, vec!["scenes/main.tscn", "scenes/sub/b.tscn"]);
    }

    #[test]
    fn missing_dir_yields_nothing() {
        let keep = |_: &Path| true;
        assert!(walk_files(Path::new("/nonexistent/assets"), &keep).is_empty());
    }
}
