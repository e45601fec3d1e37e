//! Filename normalization to lowercase snake_case.

use regex::Regex;
use std::sync::LazyLock;

static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("Invalid regex pattern"));

static UNDERSCORE_BEFORE_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+\.").expect("Invalid regex pattern"));

/// Normalize a file name to snake_case.
///
/// `(` becomes `_`, `)` is dropped, spaces and hyphens become `_`, the whole
/// name (extension included) is lowercased, underscore runs collapse to one,
/// and underscores directly before a `.` are removed.
///
/// Operates on a bare file name; directory components are not touched.
pub fn to_snake_case(name: &str) -> String {
    let replaced: String = name
        .chars()
        .filter(|&c| c != ')')
        .map(|c| match c {
            '(' | ' ' | '-' => '_',
            other => other,
        })
        .collect();

    let lowered = replaced.to_lowercase();
    let collapsed = UNDERSCORE_RUN.replace_all(&lowered, "_");
    UNDERSCORE_BEFORE_DOT.replace_all(&collapsed, ".").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parenthesized_version_with_upper_extension() {
        assert_eq!(to_snake_case("Ember Guard (v2).PNG"), "ember_guard_v2.png");
    }

    #[test]
    fn hyphens_and_spaces_become_underscores() {
        assert_eq!(to_snake_case("Fire Imp - Idle.png"), "fire_imp_idle.png");
    }

    #[test]
    fn trailing_underscores_before_extension_removed() {
        assert_eq!(to_snake_case("hero (1).jpg"), "hero_1.jpg");
        assert_eq!(to_snake_case("hero__.jpg"), "hero.jpg");
    }

    #[test]
    fn already_normalized_is_unchanged() {
        assert_eq!(to_snake_case("ash_vanguard.png"), "ash_vanguard.png");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "Ember Guard (v2).PNG",
            "  leading space.png",
            "a--b__c  (d) (e).JPG",
            "Tile-Set_(Night) .jpeg",
            "(()).png",
            "MiXeD_Case-Name.Png",
        ];
        for sample in samples {
            let once = to_snake_case(sample);
            assert_eq!(to_snake_case(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn never_produces_double_or_dangling_underscores() {
        let samples = ["a  b.png", "a - b.png", "a (b) .png", "x___y___.jpg", "_-_ _.png"];
        for sample in samples {
            let out = to_snake_case(sample);
            assert!(!out.contains("__"), "{:?} -> {:?}", sample, out);
            assert!(!out.contains("_."), "{:?} -> {:?}", sample, out);
        }
    }
}
