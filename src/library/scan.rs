use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;

/// True when `path` carries one of the configured audio extensions.
pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Resolve an import path the way the add prompts expect: a directory is
/// walked for audio files, a single audio file passes through, anything
/// else yields nothing.
///
/// Paths come back sorted so an import is deterministic regardless of
/// directory iteration order.
pub fn import_paths(path: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    if path.is_dir() {
        let mut walker = WalkDir::new(path).follow_links(settings.follow_links);
        if !settings.recursive {
            walker = walker.max_depth(1);
        }

        let mut paths: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file() && is_audio_file(e.path(), settings))
            .map(|e| e.into_path())
            .collect();
        paths.sort();
        paths
    } else if path.is_file() && is_audio_file(path, settings) {
        vec![path.to_path_buf()]
    } else {
        Vec::new()
    }
}
