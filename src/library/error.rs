use thiserror::Error;

/// Result type alias using `LibraryError`.
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Failures surfaced by library operations.
///
/// Tag extraction failures are not represented here: they are absorbed
/// inside the tag reader and downgraded to empty metadata.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Playlist names must contain at least one non-whitespace character.
    #[error("playlist name cannot be empty")]
    InvalidName,

    #[error("playlist not found: {0}")]
    PlaylistNotFound(String),

    /// I/O error while writing an export.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV writer error (includes an unwritable destination).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
