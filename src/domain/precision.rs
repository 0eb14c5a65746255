// ============================================================================
// Precision Mode
// Exact calendar arithmetic versus approximate duration-based arithmetic
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic regime for normalisation and reduction.
///
/// - `Exact`: no calendar assumptions. Days are not assumed to be 24 hours
///   and months are never converted to days.
/// - `Approximate`: every day is 24 hours and every month is 30.436875 days
///   (a 365.2425-day Gregorian year split evenly into twelve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    #[default]
    Exact,
    Approximate,
}

impl Precision {
    #[inline]
    pub const fn is_exact(self) -> bool {
        matches!(self, Precision::Exact)
    }

    #[inline]
    pub const fn is_approximate(self) -> bool {
        matches!(self, Precision::Approximate)
    }

    /// Combine two precisions: the result is exact only if both are.
    #[inline]
    pub const fn and(self, other: Precision) -> Precision {
        if self.is_exact() && other.is_exact() {
            Precision::Exact
        } else {
            Precision::Approximate
        }
    }
}

impl From<bool> for Precision {
    #[inline]
    fn from(precise: bool) -> Self {
        if precise {
            Precision::Exact
        } else {
            Precision::Approximate
        }
    }
}

impl From<Precision> for bool {
    #[inline]
    fn from(precision: Precision) -> Self {
        precision.is_exact()
    }
}
