//! Fixed settings for a rename run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image extensions picked up by discovery. Matching is exact and
/// case-sensitive: `Jpeg` or `Png` are not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
    PngUpper,
    JpgUpper,
}

impl ImageExtension {
    pub const ALL: [ImageExtension; 5] = [
        ImageExtension::Png,
        ImageExtension::Jpg,
        ImageExtension::Jpeg,
        ImageExtension::PngUpper,
        ImageExtension::JpgUpper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExtension::Png => "png",
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::PngUpper => "PNG",
            ImageExtension::JpgUpper => "JPG",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == ext)
    }

    pub fn of_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Text files that may reference asset paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectFileKind {
    /// `.tres` resource files.
    Resource,
    /// `.tscn` scene files.
    Scene,
    /// `.gd` scripts.
    Script,
}

impl ProjectFileKind {
    pub const ALL: [ProjectFileKind; 3] = [
        ProjectFileKind::Resource,
        ProjectFileKind::Scene,
        ProjectFileKind::Script,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFileKind::Resource => "tres",
            ProjectFileKind::Scene => "tscn",
            ProjectFileKind::Script => "gd",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == ext)
    }

    pub fn of_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Whether a run mutates the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    DryRun,
    Execute,
}

impl RunMode {
    pub fn from_execute_flag(execute: bool) -> Self {
        if execute {
            RunMode::Execute
        } else {
            RunMode::DryRun
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, RunMode::DryRun)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenameConfig {
    /// Working tree root. Rename paths and reference strings are relative to it.
    pub root: PathBuf,
    /// Directory (relative to `root`) scanned for images.
    pub asset_dir: String,
    /// Protocol prefix under which project files reference assets.
    pub resource_prefix: String,
    /// Suffix of the engine's derived metadata file next to each asset.
    pub metadata_suffix: String,
    /// How many planned renames the CLI lists before summarizing the rest.
    pub preview_limit: usize,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            asset_dir: "assets".to_string(),
            resource_prefix: "res://".to_string(),
            metadata_suffix: ".import".to_string(),
            preview_limit: 20,
        }
    }
}

impl RenameConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn asset_path(&self) -> PathBuf {
        self.root.join(&self.asset_dir)
    }

    /// Metadata file path for an asset, relative to `root`.
    pub fn metadata_path(&self, asset: &str) -> String {
        format!("{}{}", asset, self.metadata_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_match_exactly() {
        assert_eq!(ImageExtension::from_extension("png"), Some(ImageExtension::Png));
        assert_eq!(ImageExtension::from_extension("PNG"), Some(ImageExtension::PngUpper));
        assert_eq!(ImageExtension::from_extension("JPG"), Some(ImageExtension::JpgUpper));
        assert_eq!(ImageExtension::from_extension("Png"), None);
        assert_eq!(ImageExtension::from_extension("JPEG"), None);
        assert_eq!(ImageExtension::from_extension("gif"), None);
    }

    #[test]
    fn project_file_kinds_from_paths() {
        assert_eq!(
            ProjectFileKind::of_path(Path::new("scenes/battle.tscn")),
            Some(ProjectFileKind::Scene)
        );
        assert_eq!(
            ProjectFileKind::of_path(Path::new("units/ember_guard.tres")),
            Some(ProjectFileKind::Resource)
        );
        assert_eq!(
            ProjectFileKind::of_path(Path::new("scripts/unit.gd")),
            Some(ProjectFileKind::Script)
        );
        assert_eq!(ProjectFileKind::of_path(Path::new("project.godot")), None);
    }

    #[test]
    fn run_mode_defaults_to_dry_run() {
        assert!(RunMode::from_execute_flag(false).is_dry_run());
        assert!(!RunMode::from_execute_flag(true).is_dry_run());
    }

    #[test]
    fn metadata_path_appends_suffix_to_original() {
        let config = RenameConfig::default();
        assert_eq!(
            config.metadata_path("assets/Ember Guard.png"),
            "assets/Ember Guard.png.import"
        );
    }
}
