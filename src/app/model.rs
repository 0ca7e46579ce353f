//! Application model types: `App`, `Prompt` and `PromptKind`.
//!
//! The `App` struct owns the library store and the state the shell needs
//! around it: the catalog cursor, the prompt line standing in for the
//! file-picker and text-entry dialogs, and the status message.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::library::{self, Library};

/// What the prompt line is currently collecting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Path of a file or directory to add to the master list.
    AddTracks,
    /// Name for a new playlist.
    CreatePlaylist,
    /// Name of the playlist to add tracks to (first stage).
    PlaylistName,
    /// Path of a file or directory to append to `playlist` (second stage).
    PlaylistTracks { playlist: String },
    /// Name of the playlist to delete.
    DeletePlaylist,
    /// Destination path for the CSV export.
    ExportCsv,
}

/// An in-progress prompt: what is being asked plus the typed input.
#[derive(Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    /// Label rendered in front of the input.
    pub fn label(&self) -> &'static str {
        match self.kind {
            PromptKind::AddTracks => "Add file or directory",
            PromptKind::CreatePlaylist => "New playlist name",
            PromptKind::PlaylistName => "Add to which playlist",
            PromptKind::PlaylistTracks { .. } => "File or directory to add",
            PromptKind::DeletePlaylist => "Delete which playlist",
            PromptKind::ExportCsv => "Export CSV to",
        }
    }
}

/// The main application model.
pub struct App {
    pub library: Library,
    pub selected: usize,
    pub prompt: Option<Prompt>,
    pub status: Option<String>,
}

impl App {
    /// Create a new `App` owning the provided library store.
    pub fn new(library: Library) -> Self {
        Self {
            library,
            selected: 0,
            prompt: None,
            status: None,
        }
    }

    /// Display lines for the catalog pane, in combined display ordering.
    pub fn rows(&self) -> Vec<String> {
        self.library.render_catalog()
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Open a prompt; any previous status message is cleared.
    pub fn begin_prompt(&mut self, kind: PromptKind) {
        self.status = None;
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    /// Dismiss the prompt without acting (Esc). Silent no-op.
    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Append a character to the prompt input.
    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.push(c);
        }
    }

    /// Remove the last character from the prompt input.
    pub fn pop_prompt_char(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.pop();
        }
    }

    /// Act on the submitted prompt (Enter).
    ///
    /// An empty submission for a path prompt mirrors a cancelled picker and
    /// does nothing. Store failures land in the status line, never panic.
    pub fn submit_prompt(&mut self, settings: &Settings) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let input = prompt.input.trim().to_string();

        match prompt.kind {
            PromptKind::AddTracks => {
                if input.is_empty() {
                    return;
                }
                let paths = library::import_paths(Path::new(&input), &settings.library);
                if paths.is_empty() {
                    self.set_status(format!("No audio files found at '{input}'"));
                    return;
                }
                let count = paths.len();
                self.library.add_tracks(paths);
                self.set_status(format!("Added {count} track(s)"));
                self.clamp_selection();
            }
            // Trimmed like the other name prompts, so a name entered with
            // stray whitespace stays addressable for add and delete.
            PromptKind::CreatePlaylist => match self.library.create_playlist(&input) {
                Ok(()) => self.set_status(format!("Playlist '{input}' created")),
                Err(e) => self.set_status(e.to_string()),
            },
            PromptKind::PlaylistName => {
                if input.is_empty() {
                    return;
                }
                // Check the name before asking for paths: no point picking
                // files for a playlist that does not exist.
                if self.library.playlist(&input).is_none() {
                    self.set_status(format!("playlist not found: {input}"));
                    return;
                }
                // Second stage: ask for the paths to append.
                self.prompt = Some(Prompt {
                    kind: PromptKind::PlaylistTracks { playlist: input },
                    input: String::new(),
                });
            }
            PromptKind::PlaylistTracks { playlist } => {
                if input.is_empty() {
                    return;
                }
                let paths = library::import_paths(Path::new(&input), &settings.library);
                if paths.is_empty() {
                    self.set_status(format!("No audio files found at '{input}'"));
                    return;
                }
                let count = paths.len();
                match self.library.add_to_playlist(&playlist, paths) {
                    Ok(()) => self.set_status(format!("Added {count} track(s) to '{playlist}'")),
                    Err(e) => self.set_status(e.to_string()),
                }
            }
            PromptKind::DeletePlaylist => {
                if input.is_empty() {
                    return;
                }
                match self.library.delete_playlist(&input) {
                    Ok(()) => self.set_status(format!("Playlist '{input}' deleted")),
                    Err(e) => self.set_status(e.to_string()),
                }
                self.clamp_selection();
            }
            PromptKind::ExportCsv => {
                let dest: Option<PathBuf> = if input.is_empty() {
                    settings.export.default_destination.clone()
                } else {
                    Some(PathBuf::from(input))
                };
                // No destination supplied: cancelled picker, silent no-op.
                let Some(dest) = dest else {
                    return;
                };
                match self.library.export_csv(&dest) {
                    Ok(()) => self.set_status(format!("Catalog exported to {}", dest.display())),
                    Err(e) => self.set_status(format!("Export failed: {e}")),
                }
            }
        }
    }

    /// Remove the track under the cursor from the master list.
    ///
    /// Rows past the master range belong to playlists and are not
    /// individually removable; the cursor landing there only yields a hint.
    pub fn remove_selected(&mut self) {
        let master_len = self.library.tracks.len();
        if self.selected < master_len {
            self.library.remove_tracks(&BTreeSet::from([self.selected]));
            self.set_status("Track removed");
        } else if self.selected < self.rows().len() {
            self.set_status("Playlist entries are removed by deleting the playlist");
        }
        self.clamp_selection();
    }

    /// Empty the master list, leaving playlists alone.
    pub fn clear_library(&mut self) {
        self.library.clear();
        self.set_status("Library cleared");
        self.clamp_selection();
    }

    /// Move the cursor to the next catalog row, wrapping around.
    pub fn next(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor to the previous catalog row, wrapping around.
    pub fn prev(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Keep the cursor inside the catalog after rows were added or removed.
    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
