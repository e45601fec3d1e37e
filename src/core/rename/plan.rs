//! Discovery and ordering of the rename set.

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use super::config::{ImageExtension, RenameConfig};
use super::normalize::to_snake_case;
use super::walk::{relative_slash_path, walk_files};
use crate::error::{Error, Result};

/// One planned move. Both paths are `/`-separated and relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub from: String,
    pub to: String,
}

impl RenameEntry {
    /// Build an entry by normalizing the file name of `from`.
    ///
    /// Returns `None` when normalization leaves the name unchanged.
    pub fn normalized(from: &str) -> Option<Self> {
        let (dir, name) = match from.rfind('/') {
            Some(idx) => (&from[..=idx], &from[idx + 1..]),
            None => ("", from),
        };

        let new_name = to_snake_case(name);
        if new_name == name {
            return None;
        }

        Some(Self {
            from: from.to_string(),
            to: format!("{}{}", dir, new_name),
        })
    }

    pub fn depth(&self) -> usize {
        self.from.matches('/').count()
    }
}

/// Ordered, immutable list of planned moves, deepest paths first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameSet {
    entries: Vec<RenameEntry>,
}

impl RenameSet {
    /// Order entries by descending depth. The sort is stable, so entries at
    /// the same depth keep discovery order.
    pub fn new(mut entries: Vec<RenameEntry>) -> Self {
        entries.sort_by(|a, b| b.depth().cmp(&a.depth()));
        Self { entries }
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RenameSet {
    type Item = &'a RenameEntry;
    type IntoIter = std::slice::Iter<'a, RenameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A potential problem noticed while planning. Never blocks a run.
#[derive(Debug, Clone, Serialize)]
pub struct RenameWarning {
    /// Warning category.
    pub kind: String,
    /// Path the warning is about, relative to root.
    pub file: String,
    /// Human-readable description.
    pub message: String,
}

/// Scan the asset directory and return every image whose name would change.
pub fn discover(config: &RenameConfig) -> Result<RenameSet> {
    if !config.root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "root",
            format!("Working root '{}' is not a directory", config.root.display()),
            Some(config.root.display().to_string()),
        ));
    }

    let keep = |path: &Path| ImageExtension::of_path(path).is_some();
    let entries = walk_files(&config.asset_path(), &keep)
        .iter()
        .map(|path| relative_slash_path(path, &config.root))
        .filter_map(|relative| RenameEntry::normalized(&relative))
        .collect();

    Ok(RenameSet::new(entries))
}

/// Check a rename set for targets that already exist, targets claimed twice,
/// and originals that contain one another as substrings.
pub fn detect_collisions(set: &RenameSet, root: &Path) -> Vec<RenameWarning> {
    let mut warnings = Vec::new();

    // Target already exists on disk (case-only renames are the same file)
    for entry in set {
        if !entry.to.eq_ignore_ascii_case(&entry.from) && root.join(&entry.to).exists() {
            warnings.push(RenameWarning {
                kind: "file_collision".to_string(),
                file: entry.to.clone(),
                message: format!(
                    "Rename target '{}' already exists on disk (from '{}')",
                    entry.to, entry.from
                ),
            });
        }
    }

    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for entry in set {
        if let Some(first) = claimed.insert(entry.to.as_str(), entry.from.as_str()) {
            warnings.push(RenameWarning {
                kind: "duplicate_target".to_string(),
                file: entry.to.clone(),
                message: format!(
                    "'{}' and '{}' both normalize to '{}'",
                    first, entry.from, entry.to
                ),
            });
        }
    }

    // Reference rewriting is literal, so a shorter path inside a longer one
    // would also be rewritten there.
    for inner in set {
        for outer in set {
            if inner.from != outer.from && outer.from.contains(&inner.from) {
                warnings.push(RenameWarning {
                    kind: "substring_overlap".to_string(),
                    file: inner.from.clone(),
                    message: format!(
                        "'{}' is a substring of '{}'; references may be rewritten inside it",
                        inner.from, outer.from
                    ),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(from: &str, to: &str) -> RenameEntry {
        RenameEntry {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn normalized_only_touches_file_name() {
        let e = RenameEntry::normalized("assets/Fire Units/Ember Guard (v2).PNG").unwrap();
        assert_eq!(e.to, "assets/Fire Units/ember_guard_v2.png");
    }

    #[test]
    fn normalized_skips_unchanged_names() {
        assert!(RenameEntry::normalized("assets/units/ember_guard.png").is_none());
    }

    #[test]
    fn set_orders_deepest_first_and_is_stable() {
        let set = RenameSet::new(vec![
            entry("assets/A.png", "assets/a.png"),
            entry("assets/x/y/B.png", "assets/x/y/b.png"),
            entry("assets/x/C.png", "assets/x/c.png"),
            entry("assets/D.png", "assets/d.png"),
        ]);
        let order: Vec<&str> = set.iter().map(|e| e.from.as_str()).collect();
        assert_eq!(
            order,
            vec!["assets/x/y/B.png", "assets/x/C.png", "assets/A.png", "assets/D.png"]
        );
    }

    #[test]
    fn discover_finds_only_changing_images() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets/units")).unwrap();
        fs::write(root.join("assets/units/Ash Vanguard.png"), b"").unwrap();
        fs::write(root.join("assets/units/ember_guard.png"), b"").unwrap();
        fs::write(root.join("assets/units/Notes File.txt"), b"").unwrap();
        fs::write(root.join("assets/Title-Card.JPG"), b"").unwrap();
        fs::write(root.join("assets/Odd Case.Jpeg"), b"").unwrap();
        fs::write(root.join("Outside Assets.png"), b"").unwrap();

        let set = discover(&RenameConfig::with_root(root)).unwrap();
        let froms: Vec<&str> = set.iter().map(|e| e.from.as_str()).collect();

        assert_eq!(froms, vec!["assets/units/Ash Vanguard.png", "assets/Title-Card.JPG"]);
        assert_eq!(set.entries()[1].to, "assets/title_card.jpg");
    }

    #[test]
    fn discover_rejects_missing_root() {
        let config = RenameConfig::with_root("/nonexistent/project/root");
        let err = discover(&config).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn collisions_flag_existing_and_duplicate_targets() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("assets/fire_imp.png"), b"").unwrap();

        let set = RenameSet::new(vec![
            entry("assets/Fire Imp.png", "assets/fire_imp.png"),
            entry("assets/Fire-Imp.png", "assets/fire_imp.png"),
        ]);
        let warnings = detect_collisions(&set, root);

        assert!(warnings.iter().any(|w| w.kind == "file_collision"));
        assert!(warnings.iter().any(|w| w.kind == "duplicate_target"));
    }

    #[test]
    fn case_only_rename_is_not_a_collision() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("assets/Hero.png"), b"").unwrap();

        let set = RenameSet::new(vec![entry("assets/Hero.png", "assets/hero.png")]);
        assert!(detect_collisions(&set, root).is_empty());
    }

    #[test]
    fn collisions_flag_substring_paths() {
        let dir = tempfile::tempdir().unwrap();

        let distinct = RenameSet::new(vec![
            entry("assets/A.png", "assets/a.png"),
            entry("assets/AA.png", "assets/aa.png"),
        ]);
        assert!(!detect_collisions(&distinct, dir.path())
            .iter()
            .any(|w| w.kind == "substring_overlap"));

        let nested = RenameSet::new(vec![
            entry("assets/A.png", "assets/a.png"),
            entry("assets/old/assets/A.png", "assets/old/assets/a.png"),
        ]);
        let warnings = detect_collisions(&nested, dir.path());
        assert!(warnings
            .iter()
            .any(|w| w.kind == "substring_overlap" && w.file == "assets/A.png"));
    }
}
