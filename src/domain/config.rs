// ============================================================================
// Simplification Configuration
// Thresholds controlling how eagerly periods are folded into smaller units
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thresholds for [`Period::simplify_with`](crate::domain::Period::simplify_with).
///
/// Each rule folds exactly one of the larger unit into the smaller one when
/// the smaller unit is non-zero and at most the threshold:
/// - `P1Y3M` becomes `P15M` (years threshold)
/// - `P1DT5H` becomes `PT29H` (days threshold, approximate mode only)
/// - `PT1H5M` becomes `PT65M` (hours threshold)
/// - `PT1M5S` becomes `PT65S` (minutes threshold)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplifyConfig {
    /// Largest month count folded into a single year
    pub years_threshold: i64,

    /// Largest hour count folded into a single day
    pub days_threshold: i64,

    /// Largest minute count folded into a single hour
    pub hours_threshold: i64,

    /// Largest second count folded into a single minute
    pub minutes_threshold: i64,
}

impl SimplifyConfig {
    /// Create a configuration with the default thresholds
    pub const fn new() -> Self {
        Self {
            years_threshold: 6,
            days_threshold: 10,
            hours_threshold: 10,
            minutes_threshold: 10,
        }
    }

    /// Builder method: Set the years threshold
    pub fn with_years_threshold(mut self, months: i64) -> Self {
        self.years_threshold = months;
        self
    }

    /// Builder method: Set the days threshold
    pub fn with_days_threshold(mut self, hours: i64) -> Self {
        self.days_threshold = hours;
        self
    }

    /// Builder method: Set the hours threshold
    pub fn with_hours_threshold(mut self, minutes: i64) -> Self {
        self.hours_threshold = minutes;
        self
    }

    /// Builder method: Set the minutes threshold
    pub fn with_minutes_threshold(mut self, seconds: i64) -> Self {
        self.minutes_threshold = seconds;
        self
    }

    /// Disable every rule
    pub const fn disabled() -> Self {
        Self {
            years_threshold: 0,
            days_threshold: 0,
            hours_threshold: 0,
            minutes_threshold: 0,
        }
    }
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self::new()
    }
}
