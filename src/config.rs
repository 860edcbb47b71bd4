//! Mining configuration and validation
//!
//! # Example
//!
//! ```
//! use basket_miner::MiningConfigBuilder;
//!
//! let config = MiningConfigBuilder::new()
//!     .min_support(0.05)
//!     .min_lift(1.2)
//!     .max_len(3)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.max_len, Some(3));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MiningError;
use crate::item_sets::RuleMetric;

/// Default minimum support used by the dashboard deployment
pub const DEFAULT_MIN_SUPPORT: f64 = 0.01;

/// Default lift threshold; keeps only positively associated rules
pub const DEFAULT_MIN_LIFT: f64 = 1.0;

/// Thresholds for one mining run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum fraction of transactions an itemset must appear in, in (0, 1]
    pub min_support: f64,
    /// Minimum lift a rule must reach to be reported
    pub min_lift: f64,
    /// Largest itemset size to search for; `None` searches until exhaustion
    pub max_len: Option<usize>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_lift: DEFAULT_MIN_LIFT,
            max_len: None,
        }
    }
}

impl MiningConfig {
    /// Create a new configuration with validation
    pub fn new(
        min_support: f64,
        min_lift: f64,
        max_len: Option<usize>,
    ) -> Result<Self, MiningError> {
        let config = Self {
            min_support,
            min_lift,
            max_len,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate all thresholds
    pub fn validate(&self) -> Result<(), MiningError> {
        validate_min_support(self.min_support)?;
        RuleMetric::Lift.validate_threshold(self.min_lift)?;
        validate_max_len(self.max_len)
    }

    /// Builder-style method to set minimum support
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    /// Builder-style method to set minimum lift
    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = min_lift;
        self
    }

    /// Builder-style method to cap itemset size
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// Reject a minimum support outside (0, 1], NaN included
pub(crate) fn validate_min_support(value: f64) -> Result<(), MiningError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidSupport { value })
    }
}

pub(crate) fn validate_max_len(max_len: Option<usize>) -> Result<(), MiningError> {
    match max_len {
        Some(0) => Err(MiningError::InvalidMaxLen),
        _ => Ok(()),
    }
}

/// Builder for MiningConfig with validation
#[derive(Default)]
pub struct MiningConfigBuilder {
    min_support: Option<f64>,
    min_lift: Option<f64>,
    max_len: Option<usize>,
}

impl MiningConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum support (must be in (0, 1])
    pub fn min_support(mut self, min_support: f64) -> Self {
        self.min_support = Some(min_support);
        self
    }

    /// Set minimum lift (must be non-negative)
    pub fn min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = Some(min_lift);
        self
    }

    /// Set the largest itemset size to search for
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Build the MiningConfig, validating all thresholds
    pub fn build(self) -> Result<MiningConfig, MiningError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> MiningConfig {
        let defaults = MiningConfig::default();

        MiningConfig {
            min_support: self.min_support.unwrap_or(defaults.min_support),
            min_lift: self.min_lift.unwrap_or(defaults.min_lift),
            max_len: self.max_len.or(defaults.max_len),
        }
    }
}
