//! Literal rewriting of asset paths inside project text files.

use serde::Serialize;
use std::path::Path;

use super::config::{ProjectFileKind, RenameConfig};
use super::plan::RenameSet;
use super::walk::{relative_slash_path, walk_files};
use crate::output::BatchResult;
use crate::utils::io;

/// One old → new substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

/// Substitutions derived from a rename set: each entry contributes its bare
/// path and its prefixed form (`res://assets/...`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceMap {
    replacements: Vec<Replacement>,
}

impl ReferenceMap {
    pub fn new(set: &RenameSet, prefix: &str) -> Self {
        let mut replacements = Vec::with_capacity(set.len() * 2);
        for entry in set {
            replacements.push(Replacement {
                from: entry.from.clone(),
                to: entry.to.clone(),
            });
            replacements.push(Replacement {
                from: format!("{}{}", prefix, entry.from),
                to: format!("{}{}", prefix, entry.to),
            });
        }

        // Longest first, so a prefixed path claims its range before the bare
        // path inside it does.
        replacements.sort_by(|a, b| b.from.len().cmp(&a.from.len()));
        replacements.dedup_by(|a, b| a.from == b.from);

        Self { replacements }
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Apply every substitution to `content` in a single pass.
    ///
    /// Returns the new content and the number of replacements, or `None` when
    /// nothing matched. Output of one replacement is never re-matched by
    /// another.
    pub fn rewrite(&self, content: &str) -> Option<(String, usize)> {
        let mut all_matches: Vec<(usize, usize, &str)> = Vec::new(); // (start, end, replacement)

        for replacement in &self.replacements {
            for pos in find_literal_matches(content, &replacement.from) {
                let end = pos + replacement.from.len();
                // Skip if overlapping with an already-claimed longer match
                if all_matches.iter().any(|&(s, e, _)| pos < e && end > s) {
                    continue;
                }
                all_matches.push((pos, end, replacement.to.as_str()));
            }
        }

        if all_matches.is_empty() {
            return None;
        }

        let count = all_matches.len();

        // Replace from end to start so earlier offsets stay valid
        all_matches.sort_by(|a, b| b.0.cmp(&a.0));

        let mut new_content = content.to_string();
        for (start, end, replacement) in all_matches {
            new_content.replace_range(start..end, replacement);
        }

        Some((new_content, count))
    }
}

/// Find all occurrences of `term` in `text` using exact substring matching.
/// No boundary detection: every occurrence is returned.
fn find_literal_matches(text: &str, term: &str) -> Vec<usize> {
    let mut matches = Vec::new();
    let term_len = term.len();

    if term_len == 0 || term_len > text.len() {
        return matches;
    }

    let mut start = 0;
    while let Some(pos) = text[start..].find(term) {
        matches.push(start + pos);
        start += pos + term.chars().next().map_or(1, char::len_utf8);
    }

    matches
}

/// Rewrite references in every project file under the root.
///
/// Files without a match are never written. Read and write errors are
/// recorded per file and the scan continues.
pub fn update_references(map: &ReferenceMap, config: &RenameConfig) -> BatchResult {
    let mut result = BatchResult::new();
    if map.is_empty() {
        return result;
    }

    let keep = |path: &Path| ProjectFileKind::of_path(path).is_some();
    for path in walk_files(&config.root, &keep) {
        let relative = relative_slash_path(&path, &config.root);

        let content = match io::read_file(&path, &format!("read {}", relative)) {
            Ok(content) => content,
            Err(e) => {
                log_status!("rename", "ERROR updating {}: {}", relative, e);
                result.record_error(relative, None, e.to_string());
                continue;
            }
        };

        let Some((new_content, count)) = map.rewrite(&content) else {
            continue;
        };

        match io::write_file(&path, &new_content, &format!("write {}", relative)) {
            Ok(()) => {
                log_status!("rename", "Updated {} ({} replacements)", relative, count);
                result.record_success(relative, None, "updated");
            }
            Err(e) => {
                log_status!("rename", "ERROR updating {}: {}", relative, e);
                result.record_error(relative, None, e.to_string());
            }
        }
    }

    result
}
