mod alignment;
pub use alignment::AlignmentSummary;

mod cache;
pub use cache::Cache;

mod cell;
pub use cell::{Cell, Direction};
