//! Cleaning pipeline and dashboard aggregates for patient financial-assistance
//! applications.
//!
//! A raw spreadsheet is normalized into a cleaned artifact by the
//! [`CleaningPipeline`]; the five dashboard views are computed over the
//! resulting [`CleanedTable`] by a [`Dashboard`] session.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{DashboardConfig, DelayConfig, PipelineConfig};
pub use error::{AssistError, Result, ViewError};
pub use models::{ApplicationRecord, CleanedTable, Gender, InsuranceType, RawTable};
pub use pipeline::{CleaningPipeline, CleaningReport, DelaySampler};
pub use reader::read_raw_table;

// Aggregation layer
pub use algorithm::views::{Dimension, SignedFilter};
pub use algorithm::{Dashboard, PageResult, ViewOutput, ViewRequest, compute_view};

// Artifact IO
pub use utils::io::{read_cleaned, write_cleaned};
