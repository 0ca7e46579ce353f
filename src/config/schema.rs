use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/musette/config.toml` or `~/.config/musette/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MUSETTE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ musette: your music, catalogued ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions offered for import (case-insensitive, without dot).
    ///
    /// This only gates which files are picked up; tag reading itself is
    /// limited to formats the tag reader understands.
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when importing a directory.
    pub follow_links: bool,
    /// Whether directory imports recurse into subdirectories.
    pub recursive: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "wav".into(), "flac".into()],
            follow_links: true,
            recursive: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Destination used when the export prompt is submitted empty.
    /// When unset, an empty submission cancels the export.
    pub default_destination: Option<PathBuf>,
}
