//! Filter and summarize a streaming media catalog.
//!
//! The pipeline is `catalog` (load + derive) -> `filter` -> `aggregate`,
//! with `export` writing the filtered table back out. `app`, `ui` and
//! `runtime` are the terminal dashboard built on top of it.

pub mod aggregate;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod runtime;
pub mod ui;

pub use runtime::run;
