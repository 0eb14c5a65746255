// ============================================================================
// Designators and Fractions
// Which field a period's single fractional part belongs to
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six whole-number fields of a period.
///
/// Ordered from the largest unit to the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Designator {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Designator {
    /// All designators, largest unit first.
    pub const ALL: [Designator; 6] = [
        Designator::Year,
        Designator::Month,
        Designator::Day,
        Designator::Hour,
        Designator::Minute,
        Designator::Second,
    ];

    /// Field name used in diagnostics (e.g. `"years"`).
    pub const fn field_name(self) -> &'static str {
        match self {
            Designator::Year => "years",
            Designator::Month => "months",
            Designator::Day => "days",
            Designator::Hour => "hours",
            Designator::Minute => "minutes",
            Designator::Second => "seconds",
        }
    }

    /// ISO-8601 designator letter.
    pub const fn symbol(self) -> char {
        match self {
            Designator::Year => 'Y',
            Designator::Month | Designator::Minute => 'M',
            Designator::Day => 'D',
            Designator::Hour => 'H',
            Designator::Second => 'S',
        }
    }

    /// True for the calendar-scale fields (years, months, days).
    #[inline]
    pub const fn is_date(self) -> bool {
        matches!(self, Designator::Year | Designator::Month | Designator::Day)
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// The fractional hundredths attached to exactly one field of a period.
///
/// A period holds `Option<Fraction>`: `None` means every field is whole.
/// `hundredths` is never zero and always lies in `-99..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FractionFields"))]
pub struct Fraction {
    designator: Designator,
    hundredths: i8,
}

impl Fraction {
    /// Largest magnitude a fraction may carry.
    pub const MAX_HUNDREDTHS: i8 = 99;

    /// Bundle a non-zero hundredths value with its field.
    ///
    /// Returns `None` when `hundredths` is zero or out of range.
    #[inline]
    pub fn new(designator: Designator, hundredths: i8) -> Option<Self> {
        if hundredths == 0 || hundredths.unsigned_abs() > Self::MAX_HUNDREDTHS as u8 {
            None
        } else {
            Some(Self {
                designator,
                hundredths,
            })
        }
    }

    #[inline]
    pub const fn designator(self) -> Designator {
        self.designator
    }

    #[inline]
    pub const fn hundredths(self) -> i8 {
        self.hundredths
    }

    #[inline]
    pub(crate) const fn negated(self) -> Self {
        Self {
            designator: self.designator,
            hundredths: -self.hundredths,
        }
    }
}

/// Unchecked wire form of a [`Fraction`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FractionFields {
    designator: Designator,
    hundredths: i8,
}

#[cfg(feature = "serde")]
impl TryFrom<FractionFields> for Fraction {
    type Error = crate::numeric::PeriodError;

    fn try_from(fields: FractionFields) -> Result<Self, Self::Error> {
        Fraction::new(fields.designator, fields.hundredths).ok_or(
            crate::numeric::PeriodError::FractionOutOfRange(i16::from(fields.hundredths)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_rejects_zero_and_out_of_range() {
        assert!(Fraction::new(Designator::Day, 0).is_none());
        assert!(Fraction::new(Designator::Day, 100).is_none());
        assert!(Fraction::new(Designator::Day, -100).is_none());
        assert!(Fraction::new(Designator::Day, i8::MIN).is_none());

        let f = Fraction::new(Designator::Hour, -99).unwrap();
        assert_eq!(f.designator(), Designator::Hour);
        assert_eq!(f.hundredths(), -99);
        assert_eq!(f.negated().hundredths(), 99);
    }

    #[test]
    fn test_designator_names() {
        assert_eq!(Designator::Year.field_name(), "years");
        assert_eq!(Designator::Minute.symbol(), 'M');
        assert!(Designator::Day.is_date());
        assert!(!Designator::Hour.is_date());
        assert!(Designator::Year < Designator::Second);
    }
}
