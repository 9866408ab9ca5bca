//! Aggregate views over a (filtered) table.
//!
//! Every function here is pure: it reads a table and returns fresh counts.
//! Absent values never contribute to a view.

mod counts;
mod dashboard;
mod duration;
mod series;
mod view;

pub use counts::*;
pub use dashboard::{Dashboard, DurationSummary};
pub use duration::*;
pub use series::{monthly_by_type, yearly_by_type};
pub use view::*;
