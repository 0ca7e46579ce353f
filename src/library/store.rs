use std::collections::BTreeSet;
use std::path::PathBuf;

use super::error::{LibraryError, Result};
use super::model::{Playlist, Track};
use super::tags;

/// The owning aggregate of the master track list and all playlists.
///
/// Playlists are kept in creation order; name lookup is linear. The combined
/// display ordering (master tracks first, then each playlist's tracks) is
/// the index space used by [`Library::remove_tracks`].
///
/// All state is in-memory for the lifetime of the process. Export is a
/// one-way snapshot; there is no load path.
#[derive(Default)]
pub struct Library {
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a track for `path`, reading its tags eagerly.
    fn read_track(path: PathBuf) -> Track {
        let (title, artist) = tags::extract(&path);
        Track {
            path,
            title,
            artist,
        }
    }

    /// Append one track per path to the master list.
    ///
    /// Paths are not deduplicated; adding the same file twice keeps both
    /// entries. Empty input is a no-op.
    pub fn add_tracks<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in paths {
            self.tracks.push(Self::read_track(path));
        }
    }

    /// Remove master tracks by position in the combined display ordering.
    ///
    /// Indices at or beyond the master range address playlist rows, which
    /// this operation never touches; those and out-of-bounds indices are
    /// ignored. Removal runs highest-first so earlier removals cannot shift
    /// later indices.
    pub fn remove_tracks(&mut self, indices: &BTreeSet<usize>) {
        for &idx in indices.iter().rev() {
            if idx < self.tracks.len() {
                self.tracks.remove(idx);
            }
        }
    }

    /// Empty the master list. Playlists are untouched.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Create an empty playlist under `name`.
    ///
    /// A name collision silently resets the existing playlist in place, so
    /// its position in the combined display ordering is preserved.
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(LibraryError::InvalidName);
        }
        match self.playlists.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.tracks.clear(),
            None => self.playlists.push(Playlist::new(name)),
        }
        Ok(())
    }

    /// Append one track per path to the named playlist, reading tags the
    /// same way [`Library::add_tracks`] does.
    pub fn add_to_playlist<I>(&mut self, name: &str, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?;
        for path in paths {
            playlist.tracks.push(Self::read_track(path));
        }
        Ok(())
    }

    /// Delete the named playlist. Master tracks are unaffected.
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        let pos = self
            .playlists
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?;
        self.playlists.remove(pos);
        Ok(())
    }

    /// Look up a playlist by name.
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }
}
