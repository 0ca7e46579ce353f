use std::path::PathBuf;

/// One audio file reference plus its cached title/artist metadata.
///
/// Title and artist are read once when the track is created and never
/// refreshed afterwards; re-adding the file is the only way to pick up
/// externally edited tags. Both fields may be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
}

impl Track {
    /// Catalog display string: `"{artist} - {title}"`, even when either
    /// field is empty. Removal indices are counted against these lines, so
    /// the format is load-bearing.
    pub fn display(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

/// A named, ordered collection of tracks, independent of the master list.
///
/// The same file may appear in the master list and in any number of
/// playlists; entries are plain tracks, not references into the master list.
#[derive(Clone, Debug, Default)]
pub struct Playlist {
    pub name: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new empty playlist.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
