// ============================================================================
// Period
// Immutable fixed-point calendar/clock period
// ============================================================================

use super::designator::{Designator, Fraction};
use crate::numeric::units::{CENTI, CENTISECONDS_PER_HOUR, CENTISECONDS_PER_MINUTE, MONTHS_PER_YEAR};
use crate::numeric::{PeriodError, PeriodResult};
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A period of time such as "1 year, 2 months, 3.5 days".
///
/// Six signed whole-number fields, each limited to `-32767..=32767`, plus at
/// most one fractional part with two decimal places attached to one of
/// those fields.
///
/// # Invariants
/// - All non-zero fields and the fraction share the same sign.
/// - A fraction, if present, is non-zero and lies in `-99..=99`.
/// - No field is `i16::MIN`, so negation never overflows.
///
/// Periods are values: every operation returns a new period.
///
/// # Example
/// ```
/// use fixed_period::prelude::*;
///
/// // 1.5 years
/// let p = Period::new(1, 0, 0, 0, 0, 0)?.with_fraction(Designator::Year, 50)?;
/// assert_eq!(p.to_string(), "P1.5Y");
/// assert_eq!(p.centi_year_months(), 1800);
/// # Ok::<(), PeriodError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PeriodFields"))]
pub struct Period {
    years: i16,
    months: i16,
    days: i16,
    hours: i16,
    minutes: i16,
    seconds: i16,
    fraction: Option<Fraction>,
}

/// Unchecked wire form of a [`Period`]; deserialised values go through
/// the validating constructors.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PeriodFields {
    years: i16,
    months: i16,
    days: i16,
    hours: i16,
    minutes: i16,
    seconds: i16,
    fraction: Option<Fraction>,
}

#[cfg(feature = "serde")]
impl TryFrom<PeriodFields> for Period {
    type Error = PeriodError;

    fn try_from(f: PeriodFields) -> PeriodResult<Self> {
        let whole = Period::new(f.years, f.months, f.days, f.hours, f.minutes, f.seconds)?;
        match f.fraction {
            Some(fraction) => whole.with_fraction(fraction.designator(), fraction.hundredths()),
            None => Ok(whole),
        }
    }
}

impl Period {
    /// The zero-length period.
    pub const ZERO: Self = Self::from_raw([0; 6], None);

    /// Create a period from its six whole-number fields.
    ///
    /// # Errors
    /// - `FieldOutOfRange` if any field is `i16::MIN`
    /// - `MixedSigns` if positive and negative fields are combined
    pub fn new(
        years: i16,
        months: i16,
        days: i16,
        hours: i16,
        minutes: i16,
        seconds: i16,
    ) -> PeriodResult<Self> {
        let fields = [years, months, days, hours, minutes, seconds];

        for (designator, value) in Designator::ALL.iter().zip(fields) {
            if value == i16::MIN {
                return Err(PeriodError::FieldOutOfRange {
                    field: designator.field_name(),
                    value: i64::from(value),
                });
            }
        }

        let has_positive = fields.iter().any(|&v| v > 0);
        let has_negative = fields.iter().any(|&v| v < 0);
        if has_positive && has_negative {
            return Err(PeriodError::MixedSigns);
        }

        Ok(Self::from_raw(fields, None))
    }

    /// Attach a fraction (in hundredths) to one field, replacing any
    /// existing fraction. A zero value removes the fraction.
    ///
    /// # Errors
    /// - `FractionOutOfRange` if `hundredths` is outside `-99..=99`
    /// - `MixedSigns` if the fraction's sign disagrees with the fields
    pub fn with_fraction(self, designator: Designator, hundredths: i8) -> PeriodResult<Self> {
        if hundredths == 0 {
            return Ok(Self {
                fraction: None,
                ..self
            });
        }

        let fraction = Fraction::new(designator, hundredths)
            .ok_or(PeriodError::FractionOutOfRange(i16::from(hundredths)))?;

        let whole = Self {
            fraction: None,
            ..self
        };
        let conflicting = if hundredths > 0 {
            whole.is_negative()
        } else {
            whole.is_positive()
        };
        if conflicting {
            return Err(PeriodError::MixedSigns);
        }

        Ok(Self {
            fraction: Some(fraction),
            ..self
        })
    }

    /// Build without validation. Callers guarantee the invariants.
    #[inline]
    pub(crate) const fn from_raw(fields: [i16; 6], fraction: Option<Fraction>) -> Self {
        Self {
            years: fields[0],
            months: fields[1],
            days: fields[2],
            hours: fields[3],
            minutes: fields[4],
            seconds: fields[5],
            fraction,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn years(&self) -> i16 {
        self.years
    }

    #[inline]
    pub const fn months(&self) -> i16 {
        self.months
    }

    #[inline]
    pub const fn days(&self) -> i16 {
        self.days
    }

    #[inline]
    pub const fn hours(&self) -> i16 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> i16 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> i16 {
        self.seconds
    }

    /// The attached fraction, if any.
    #[inline]
    pub const fn fraction(&self) -> Option<Fraction> {
        self.fraction
    }

    /// The field carrying the fraction, or `None` when every field is whole.
    #[inline]
    pub fn designator(&self) -> Option<Designator> {
        self.fraction.map(Fraction::designator)
    }

    /// The fraction in hundredths, zero when there is none.
    #[inline]
    pub fn hundredths(&self) -> i8 {
        self.fraction.map_or(0, Fraction::hundredths)
    }

    /// Whole-number value of one field.
    pub const fn field(&self, designator: Designator) -> i16 {
        match designator {
            Designator::Year => self.years,
            Designator::Month => self.months,
            Designator::Day => self.days,
            Designator::Hour => self.hours,
            Designator::Minute => self.minutes,
            Designator::Second => self.seconds,
        }
    }

    /// The six whole-number fields, largest unit first.
    #[inline]
    pub const fn fields(&self) -> [i16; 6] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    // ========================================================================
    // Sign
    // ========================================================================

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.fields() == [0; 6] && self.fraction.is_none()
    }

    /// True if any field (or the fraction) is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.fields().iter().any(|&v| v < 0) || self.hundredths() < 0
    }

    /// True if any field (or the fraction) is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.fields().iter().any(|&v| v > 0) || self.hundredths() > 0
    }

    /// -1, 0 or +1.
    #[inline]
    pub fn sign(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_positive() {
            1
        } else {
            0
        }
    }

    /// Flip the sign of every field and the fraction.
    #[inline]
    pub fn negate(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            fraction: self.fraction.map(Fraction::negated),
        }
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self
        }
    }

    // ========================================================================
    // Centi-unit views
    // ========================================================================

    /// Years and months combined in hundredths of a month, sign included.
    pub fn centi_year_months(&self) -> i64 {
        let whole = i64::from(self.years) * MONTHS_PER_YEAR * CENTI + i64::from(self.months) * CENTI;
        match self.fraction {
            Some(f) if f.designator() == Designator::Year => {
                whole + i64::from(f.hundredths()) * MONTHS_PER_YEAR
            },
            Some(f) if f.designator() == Designator::Month => whole + i64::from(f.hundredths()),
            _ => whole,
        }
    }

    /// Days in hundredths of a day, sign included.
    pub fn centi_days(&self) -> i64 {
        let whole = i64::from(self.days) * CENTI;
        match self.fraction {
            Some(f) if f.designator() == Designator::Day => whole + i64::from(f.hundredths()),
            _ => whole,
        }
    }

    /// Hours, minutes and seconds combined in centiseconds, sign included.
    pub fn centi_hms(&self) -> i64 {
        let whole = i64::from(self.hours) * CENTISECONDS_PER_HOUR
            + i64::from(self.minutes) * CENTISECONDS_PER_MINUTE
            + i64::from(self.seconds) * CENTI;
        match self.fraction {
            Some(f) => {
                let hundredths = i64::from(f.hundredths());
                match f.designator() {
                    Designator::Hour => whole + hundredths * CENTISECONDS_PER_HOUR / CENTI,
                    Designator::Minute => whole + hundredths * CENTISECONDS_PER_MINUTE / CENTI,
                    Designator::Second => whole + hundredths,
                    _ => whole,
                }
            },
            None => whole,
        }
    }
}

impl Neg for Period {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// ============================================================================
// Display
// ============================================================================

/// Write an ISO-8601 period from non-negative field magnitudes.
///
/// Shared by `Period` and the 64-bit working value so diagnostics render
/// both the same way.
pub(crate) fn write_iso(
    f: &mut fmt::Formatter<'_>,
    negative: bool,
    fields: [i64; 6],
    fraction: Option<(Designator, i64)>,
) -> fmt::Result {
    let has_fraction = |d: Designator| fraction.filter(|&(fd, h)| fd == d && h != 0);
    let shown = |i: usize, d: Designator| fields[i] != 0 || has_fraction(d).is_some();

    if Designator::ALL.iter().enumerate().all(|(i, &d)| !shown(i, d)) {
        return f.write_str("P0D");
    }

    if negative {
        f.write_str("-")?;
    }
    f.write_str("P")?;

    let mut time_written = false;
    for (i, &designator) in Designator::ALL.iter().enumerate() {
        if !shown(i, designator) {
            continue;
        }
        if !designator.is_date() && !time_written {
            f.write_str("T")?;
            time_written = true;
        }
        write!(f, "{}", fields[i])?;
        if let Some((_, hundredths)) = has_fraction(designator) {
            let digits = format!("{:02}", hundredths);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        write!(f, "{}", designator.symbol())?;
    }

    Ok(())
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitudes = self.abs().fields().map(i64::from);
        let fraction = self
            .fraction
            .map(|fr| (fr.designator(), i64::from(fr.hundredths()).abs()));
        write_iso(f, self.is_negative(), magnitudes, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_sign() {
        assert!(Period::new(1, 2, 3, 4, 5, 6).is_ok());
        assert!(Period::new(-1, 0, -3, 0, 0, 0).is_ok());
        assert_eq!(Period::new(1, -2, 0, 0, 0, 0), Err(PeriodError::MixedSigns));
    }

    #[test]
    fn test_new_rejects_i16_min() {
        let result = Period::new(0, 0, i16::MIN, 0, 0, 0);
        assert_eq!(
            result,
            Err(PeriodError::FieldOutOfRange {
                field: "days",
                value: -32768
            })
        );
    }

    #[test]
    fn test_with_fraction() {
        let p = Period::new(0, 0, 3, 0, 0, 0)
            .unwrap()
            .with_fraction(Designator::Day, 50)
            .unwrap();
        assert_eq!(p.designator(), Some(Designator::Day));
        assert_eq!(p.hundredths(), 50);

        // Zero clears
        let cleared = p.with_fraction(Designator::Hour, 0).unwrap();
        assert_eq!(cleared.fraction(), None);

        // Sign mismatch
        assert_eq!(
            p.with_fraction(Designator::Hour, -5),
            Err(PeriodError::MixedSigns)
        );

        // Range
        assert_eq!(
            Period::ZERO.with_fraction(Designator::Hour, 100),
            Err(PeriodError::FractionOutOfRange(100))
        );
    }

    #[test]
    fn test_sign() {
        assert_eq!(Period::ZERO.sign(), 0);
        assert!(Period::ZERO.is_zero());

        let p = Period::new(0, 0, 0, 0, -5, 0).unwrap();
        assert_eq!(p.sign(), -1);
        assert_eq!(p.negate().sign(), 1);
        assert_eq!((-p).minutes(), 5);
        assert_eq!(p.abs().minutes(), 5);

        let frac_only = Period::ZERO.with_fraction(Designator::Second, -1).unwrap();
        assert!(frac_only.is_negative());
        assert!(!frac_only.is_zero());
    }

    #[test]
    fn test_centi_units() {
        let p = Period::new(1, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(p.centi_year_months(), 1400);
        assert_eq!(p.centi_days(), 300);
        assert_eq!(p.centi_hms(), (4 * 3600 + 5 * 60 + 6) * 100);

        let half_year = Period::new(0, 0, 0, 0, 0, 0)
            .unwrap()
            .with_fraction(Designator::Year, 50)
            .unwrap();
        assert_eq!(half_year.centi_year_months(), 600);

        let neg_quarter_hour = Period::ZERO.with_fraction(Designator::Hour, -25).unwrap();
        assert_eq!(neg_quarter_hour.centi_hms(), -90_000);

        let tenth_minute = Period::ZERO.with_fraction(Designator::Minute, 10).unwrap();
        assert_eq!(tenth_minute.centi_hms(), 600);
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(1, 2, 3, 4, 5, 6).unwrap().to_string(), "P1Y2M3DT4H5M6S");
        assert_eq!(Period::new(0, 0, 0, -1, -30, 0).unwrap().to_string(), "-PT1H30M");

        let p = Period::new(0, 0, 0, 0, 0, 2)
            .unwrap()
            .with_fraction(Designator::Second, 5)
            .unwrap();
        assert_eq!(p.to_string(), "PT2.05S");

        let q = Period::ZERO.with_fraction(Designator::Month, -50).unwrap();
        assert_eq!(q.to_string(), "-P0.5M");
    }
}
