//! Library data model and operations.
//!
//! Everything the shell can do to the music library lives here: the `Track`
//! and `Playlist` entities, best-effort tag extraction, the owning `Library`
//! store with its catalog/playlist operations, and the CSV export.

mod error;
mod export;
mod model;
mod scan;
mod store;
mod tags;

pub use error::*;
pub use export::*;
pub use model::*;
pub use scan::*;
pub use store::*;
pub use tags::*;

#[cfg(test)]
mod tests;
