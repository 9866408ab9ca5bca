//! Configuration schema and loader.
//!
//! Settings drive where the catalog is read from, the filters the dashboard
//! opens with, aggregate sizes, the export target and logging.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
