//! Application module: exposes the app model used by the TUI shell.
//!
//! The `App` model lives in `app::model` and holds the library store, the
//! catalog cursor and the state of the prompt line.

mod model;

pub use model::*;
