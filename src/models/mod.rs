//! Domain models for financial-assistance applications
//!
//! Raw rows come in as a `RawTable`; the cleaning pipeline turns them into
//! `ApplicationRecord`s held by an immutable `CleanedTable`.

pub mod application;
pub mod lenient;
pub mod raw;
pub mod types;

// Re-export commonly used types
pub use application::{APPROVED, ApplicationRecord, CleanedTable, ready_for_review};
pub use raw::RawTable;
pub use types::{Canonical, Gender, InsuranceType};
