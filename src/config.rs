use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::profile::SourceProfile;

/// Matching threshold carried over from the original tool.
///
/// The ratio is on a 0-100 scale, so this accepts almost any candidate. It was
/// most likely meant to be `60.5`; pass `--threshold` or set `threshold` in the
/// config file to tighten it.
pub const DEFAULT_THRESHOLD: f64 = 0.605;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Baseline retailer; its names become the report keys.
    pub source_a: SourceProfile,
    /// Competing retailer.
    pub source_b: SourceProfile,
    pub threshold: f64,
    pub timeout_secs: u64,
    /// Fail on a product card missing its name or price instead of skipping it.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_a: SourceProfile::speedcubes(),
            source_b: SourceProfile::cubeco(),
            threshold: DEFAULT_THRESHOLD,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(Error::Config(format!(
                "threshold must be within 0..=100, got {}",
                self.threshold
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
