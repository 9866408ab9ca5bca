//! Catalog loading: the record model, field derivation and the source cache.
//!
//! A catalog is read once into an immutable [`Table`]. Derived fields
//! (`year_added`, `month_added`, `month_number`, `duration_value`) are
//! computed while loading and never change afterwards.

mod cache;
mod derive;
mod load;
mod model;
mod options;

pub use cache::{SourceKey, TableCache};
pub use derive::{duration_value, month_name, parse_date_added};
pub use load::{LoadOptions, load_path, load_reader};
pub use model::*;
pub use options::FilterOptions;

#[cfg(test)]
mod tests;
