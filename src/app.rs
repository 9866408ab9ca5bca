//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the loaded catalog, the
//! filter selections and the dashboard computed from them.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
