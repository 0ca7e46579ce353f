use std::path::Path;

use lofty::prelude::*;
use tracing::warn;

/// Extensions the tag reader will actually open. `.wav` files can be added
/// to the library but always come back with empty title/artist.
fn has_tagged_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "mp3" | "flac"))
        .unwrap_or(false)
}

/// Read `(title, artist)` from the file's tags, best effort.
///
/// Unsupported extensions are never opened. Any failure while opening or
/// parsing (missing file, corrupt tag block, unsupported codec variant) is
/// logged and absorbed into `("", "")`: a file with malformed tags must
/// never block an import.
pub fn extract(path: &Path) -> (String, String) {
    if !has_tagged_extension(path) {
        return (String::new(), String::new());
    }

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
                return (String::new(), String::new());
            };
            let title = tag.title().map(|s| s.to_string()).unwrap_or_default();
            let artist = tag.artist().map(|s| s.to_string()).unwrap_or_default();
            (title, artist)
        }
        Err(e) => {
            warn!("failed to read tags from {}: {}", path.display(), e);
            (String::new(), String::new())
        }
    }
}
