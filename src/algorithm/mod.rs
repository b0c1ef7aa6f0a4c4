//! Aggregation layer: dashboard views and the memoizing session

pub mod dashboard;
pub mod views;

pub use dashboard::{Dashboard, PageResult};
pub use views::{ViewOutput, ViewRequest, compute_view};
