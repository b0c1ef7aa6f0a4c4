//! Configuration for the cleaning pipeline and the dashboard.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::util::safe_open_file;
use crate::error::{AssistError, Result};
use crate::schema::adapt::DateFormatConfig;

/// Seed used for the simulated support delays unless configured otherwise
pub const DEFAULT_DELAY_SEED: u64 = 42;

/// Number of rows shown in the Time to Support sample table
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Parameters of the simulated `Days_To_Support` distribution
///
/// Delays are drawn from Normal(`mean`, `std_dev`), rounded half to even and
/// clamped to at least `min_days`. The generator is seeded with `seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Seed for the delay generator
    pub seed: u64,
    /// Mean delay in days
    pub mean: f64,
    /// Standard deviation in days
    pub std_dev: f64,
    /// Lower clamp for the rounded delay
    pub min_days: u32,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_DELAY_SEED,
            mean: 7.0,
            std_dev: 2.0,
            min_days: 1,
        }
    }
}

/// Configuration for the `CleaningPipeline`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Simulated delay parameters
    pub delay: DelayConfig,
    /// Date formats tried when parsing `Grant_Req_Date`
    pub date_formats: DateFormatConfig,
    /// Cell text that stands for a missing value
    pub missing_sentinel: String,
    /// Upper-cased state value whose rows are dropped
    pub dropped_state: String,
    /// Show a progress spinner while cleaning
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delay: DelayConfig::default(),
            date_formats: DateFormatConfig::default(),
            missing_sentinel: "Missing".to_string(),
            dropped_state: "NAN".to_string(),
            show_progress: false,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file; absent keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "pipeline configuration")?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Override the delay seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.delay.seed = seed;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !self.delay.mean.is_finite() {
            return Err(AssistError::config("delay.mean must be a finite number"));
        }
        if !self.delay.std_dev.is_finite() || self.delay.std_dev < 0.0 {
            return Err(AssistError::config(
                "delay.std_dev must be a finite, non-negative number",
            ));
        }
        if self.delay.min_days == 0 {
            return Err(AssistError::config("delay.min_days must be at least 1"));
        }
        if self.date_formats.date_formats.is_empty() && !self.date_formats.enable_format_detection {
            return Err(AssistError::config(
                "at least one date format or format detection is required",
            ));
        }
        Ok(())
    }
}

/// Configuration for dashboard rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Rows in the Time to Support sample table
    pub sample_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}
