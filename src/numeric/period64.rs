// ============================================================================
// Period64
// 64-bit working representation used while computing period arithmetic
// ============================================================================

use super::centi::CentiUnits;
use super::errors::{OverflowFields, PeriodError, PeriodResult};
use super::units::{
    CENTI, MAX_FIELD, MAX_FRACTION, MILLIS_PER_CENTISECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::domain::period::write_iso;
use crate::domain::{Designator, Fraction, Period, Precision};
use std::fmt;

/// Label describing where a working value came from, rendered into
/// overflow errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A single period being normalised or simplified
    Period(Period),
    /// The two operands of an addition
    Sum(Period, Period),
    /// A period scaled by `multiplier / divisor`
    Scale(Period, i64, i64),
    /// An elapsed duration in milliseconds
    Millis(i64),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Period(p) => write!(f, "{}", p),
            Origin::Sum(a, b) => write!(f, "{} + {}", a, b),
            Origin::Scale(p, m, d) => write!(f, "{} * {}/{}", p, m, d),
            Origin::Millis(ms) => write!(f, "{}ms", ms),
        }
    }
}

/// Working form of a period: non-negative 64-bit magnitudes plus a
/// separate sign flag.
///
/// Built fresh for each operation and narrowed back with
/// [`to_period`](Period64::to_period), which rejects any field that does not
/// fit the public representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period64 {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Magnitude of the fraction in hundredths; zero when `designator` is `None`
    pub fraction: i64,
    pub designator: Option<Designator>,
    pub negative: bool,
    pub origin: Option<Origin>,
}

impl Period64 {
    /// Widen a period, moving its sign into the `negative` flag.
    pub fn from_period(period: Period) -> Self {
        let negative = period.is_negative();
        let magnitude = period.abs();
        let [years, months, days, hours, minutes, seconds] = magnitude.fields().map(i64::from);

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            fraction: i64::from(magnitude.hundredths()),
            designator: magnitude.designator(),
            negative,
            origin: None,
        }
    }

    /// Split non-negative centi-unit group totals into a normalised value.
    ///
    /// Each group's whole part goes to months, days and seconds respectively;
    /// its remainder modulo 100 becomes the fraction. When more than one
    /// group has a remainder, all but the smallest-unit one are folded into
    /// the clock group first (see [`CentiUnits::fold_fractions`]).
    ///
    /// Returns the precision actually used, which is `Approximate` if that
    /// fold happened.
    pub fn from_centi_units(
        units: CentiUnits,
        negative: bool,
        precision: Precision,
    ) -> (Self, Precision) {
        let (units, folded) = units.fold_fractions();
        let precision = precision.and(folded);

        let mut p64 = Self {
            months: units.year_months / CENTI,
            days: units.days / CENTI,
            seconds: units.hms / CENTI,
            negative,
            ..Self::default()
        };

        let remainders = [
            (Designator::Month, units.year_months % CENTI),
            (Designator::Day, units.days % CENTI),
            (Designator::Second, units.hms % CENTI),
        ];
        for (designator, remainder) in remainders {
            if remainder != 0 {
                p64.fraction = remainder;
                p64.designator = Some(designator);
            }
        }

        (p64.normalise(precision), precision)
    }

    /// Rebuild a value from an elapsed magnitude in milliseconds.
    ///
    /// Precise while the whole hours fit in a public field; beyond that,
    /// hours are folded into 24-hour days (and average months if needed).
    pub fn from_millis(millis: u64) -> (Self, Precision) {
        let centiseconds = (millis / MILLIS_PER_CENTISECOND as u64) as i64;
        let total_seconds = centiseconds / CENTI;
        let fraction = centiseconds % CENTI;

        let p64 = Self {
            hours: total_seconds / SECONDS_PER_HOUR,
            minutes: total_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
            fraction,
            designator: (fraction != 0).then_some(Designator::Second),
            ..Self::default()
        };

        if p64.hours <= MAX_FIELD {
            (p64, Precision::Exact)
        } else {
            (p64.ripple_up(Precision::Approximate), Precision::Approximate)
        }
    }

    /// Attach a diagnostic label.
    #[inline]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    #[inline]
    pub fn fields(&self) -> [i64; 6] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    pub fn field_mut(&mut self, designator: Designator) -> &mut i64 {
        match designator {
            Designator::Year => &mut self.years,
            Designator::Month => &mut self.months,
            Designator::Day => &mut self.days,
            Designator::Hour => &mut self.hours,
            Designator::Minute => &mut self.minutes,
            Designator::Second => &mut self.seconds,
        }
    }

    #[inline]
    pub(crate) fn clear_fraction(&mut self) {
        self.fraction = 0;
        self.designator = None;
    }

    /// Narrow back to the public representation.
    ///
    /// # Errors
    /// Returns `Overflow` naming every field (and `"fraction"`) whose
    /// magnitude does not fit.
    pub fn to_period(&self) -> PeriodResult<Period> {
        let mut overflowed = OverflowFields::new();
        for (designator, value) in Designator::ALL.iter().zip(self.fields()) {
            if !(0..=MAX_FIELD).contains(&value) {
                overflowed.push(designator.field_name());
            }
        }
        if !(0..=MAX_FRACTION).contains(&self.fraction) {
            overflowed.push("fraction");
        }

        if !overflowed.is_empty() {
            let input = match self.origin {
                Some(origin) => origin.to_string(),
                None => self.to_string(),
            };
            tracing::debug!(%input, fields = ?overflowed, "period overflow");
            return Err(PeriodError::Overflow {
                input,
                fields: overflowed,
            });
        }

        // Range checked above
        let fields = self.fields().map(|v| v as i16);
        let fraction = self
            .designator
            .and_then(|d| Fraction::new(d, self.fraction as i8));
        let period = Period::from_raw(fields, fraction);

        Ok(if self.negative {
            period.negate()
        } else {
            period
        })
    }
}

impl fmt::Display for Period64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = self.designator.map(|d| (d, self.fraction));
        write_iso(f, self.negative, self.fields(), fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(y: i16, mo: i16, d: i16, h: i16, mi: i16, s: i16) -> Period {
        Period::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_widen_negative() {
        let p = period(0, 0, -2, -3, 0, 0)
            .with_fraction(Designator::Hour, -50)
            .unwrap();
        let p64 = Period64::from_period(p);
        assert!(p64.negative);
        assert_eq!(p64.days, 2);
        assert_eq!(p64.hours, 3);
        assert_eq!(p64.fraction, 50);
        assert_eq!(p64.designator, Some(Designator::Hour));
        assert_eq!(p64.to_period().unwrap(), p);
    }

    #[test]
    fn test_narrow_years_overflow() {
        let p64 = Period64 {
            years: MAX_FIELD + 1,
            ..Period64::default()
        };
        let err = p64.to_period().unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(err.overflow_fields(), &["years"]);
        assert_eq!(
            err.to_string(),
            "P32768Y: integer overflow occurred in years"
        );
    }

    #[test]
    fn test_narrow_lists_every_field_and_origin() {
        let origin = Origin::Period(period(1, 0, 0, 0, 0, 0));
        let p64 = Period64 {
            days: 40_000,
            seconds: 99_999,
            fraction: 100,
            designator: Some(Designator::Second),
            ..Period64::default()
        }
        .with_origin(origin);

        let err = p64.to_period().unwrap_err();
        assert_eq!(err.overflow_fields(), &["days", "seconds", "fraction"]);
        assert_eq!(
            err.to_string(),
            "P1Y: integer overflow occurred in days,seconds,fraction"
        );
    }

    #[test]
    fn test_narrow_at_limit() {
        let p64 = Period64 {
            years: MAX_FIELD,
            negative: true,
            ..Period64::default()
        };
        assert_eq!(p64.to_period().unwrap().years(), -32767);
    }

    #[test]
    fn test_from_centi_units_splits_groups() {
        let units = CentiUnits {
            year_months: 1450,
            days: 300,
            hms: 366_100,
        };
        let (p64, precision) = Period64::from_centi_units(units, false, Precision::Exact);
        assert_eq!(precision, Precision::Exact);
        let p = p64.to_period().unwrap();
        assert_eq!(p.fields(), [1, 2, 3, 1, 1, 1]);
        assert_eq!(p.designator(), Some(Designator::Month));
        assert_eq!(p.hundredths(), 50);
    }

    #[test]
    fn test_from_centi_units_negative() {
        let units = CentiUnits {
            year_months: 0,
            days: 150,
            hms: 0,
        };
        let (p64, _) = Period64::from_centi_units(units, true, Precision::Exact);
        let p = p64.to_period().unwrap();
        assert_eq!(p.days(), -1);
        assert_eq!(p.hundredths(), -50);
        assert_eq!(p.designator(), Some(Designator::Day));
    }

    #[test]
    fn test_from_millis_precise() {
        // 1h 2m 3.45s
        let (p64, precision) = Period64::from_millis(3_723_450);
        assert_eq!(precision, Precision::Exact);
        let p = p64.to_period().unwrap();
        assert_eq!(p.fields(), [0, 0, 0, 1, 2, 3]);
        assert_eq!(p.hundredths(), 45);
        assert_eq!(p.designator(), Some(Designator::Second));
    }

    #[test]
    fn test_from_millis_folds_large_hours() {
        // 40_000 hours
        let (p64, precision) = Period64::from_millis(40_000 * 3_600_000);
        assert_eq!(precision, Precision::Approximate);
        let p = p64.to_period().unwrap();
        assert_eq!(p.hours(), 16);
        assert_eq!(p.days(), 1666);
    }

    #[test]
    fn test_origin_display() {
        let a = period(0, 0, 1, 0, 0, 0);
        let b = period(0, 0, 0, 2, 0, 0);
        assert_eq!(Origin::Sum(a, b).to_string(), "P1D + PT2H");
        assert_eq!(Origin::Scale(a, 1, 3).to_string(), "P1D * 1/3");
        assert_eq!(Origin::Millis(-5).to_string(), "-5ms");
    }
}
