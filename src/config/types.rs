//! Configuration types for session billing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::{RateSchedule, RoundingPolicy};

/// The complete biller configuration loaded from YAML.
///
/// ```yaml
/// rates:
///   pre_bed: 12.00
///   bed_to_midnight: 8.00
///   post_midnight: 16.00
/// rounding: down
/// ```
///
/// `rounding` is optional and defaults to `down`. The `exact` policy parses
/// but is rejected when a biller is built from the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillerConfig {
    /// The hourly rates.
    pub rates: RateSchedule,
    /// The rounding policy for partial hours.
    #[serde(default)]
    pub rounding: RoundingPolicy,
}
