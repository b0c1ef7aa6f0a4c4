//! Utility modules for artifact IO and logging

pub mod io;
pub mod logging;

// Re-export commonly used functions for convenience
pub use io::{ArtifactFormat, fingerprint, read_cleaned, write_cleaned};
pub use logging::{log_operation_complete, log_operation_start, log_warning};
