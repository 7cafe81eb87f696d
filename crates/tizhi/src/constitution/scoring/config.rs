use serde::{Deserialize, Serialize};

pub const SCORE_CONVERT_FACTOR: f64 = 2.5;
pub const THRESHOLD_PRIMARY: f64 = 40.0;
pub const THRESHOLD_SECONDARY: f64 = 30.0;
pub const THRESHOLD_PEACE: f64 = 60.0;

/// Every non-peace score must stay strictly below this for the peace override to apply.
pub const PEACE_OTHERS_CEILING: f64 = 40.0;

/// Percentage scores never exceed this value.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Conversion factor and thresholds applied by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub score_convert_factor: f64,
    /// Carried for compatibility with existing deployments; classification does not read it.
    pub threshold_primary: f64,
    /// Minimum percentage for a constitution to be eligible as primary or secondary.
    pub threshold_secondary: f64,
    /// Minimum peace percentage for the balanced-constitution override.
    pub threshold_peace: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_convert_factor: SCORE_CONVERT_FACTOR,
            threshold_primary: THRESHOLD_PRIMARY,
            threshold_secondary: THRESHOLD_SECONDARY,
            threshold_peace: THRESHOLD_PEACE,
        }
    }
}
