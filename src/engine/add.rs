// ============================================================================
// Addition
// Period + period, with a field-wise fast path and a centi-unit general path
// ============================================================================

use crate::domain::{Period, Precision, SimplifyConfig};
use crate::numeric::units::{CENTI, MAX_FRACTION};
use crate::numeric::{CentiUnits, Origin, Period64, PeriodResult};
use std::ops::{Add, Sub};

impl Period {
    /// Add two periods. Use with [`negate`](Period::negate) (or
    /// [`checked_sub`](Period::checked_sub)) to subtract.
    ///
    /// Carries between clock fields and reduces exact fractions, but does
    /// not assume 24-hour days; call [`normalise`](Period::normalise) with
    /// `Precision::Approximate` for a fully folded form.
    ///
    /// # Errors
    /// Returns `Overflow` if any field of the sum does not fit.
    pub fn checked_add(self, rhs: Period) -> PeriodResult<Period> {
        let same_part =
            self.fraction().is_none() || rhs.fraction().is_none() || self.designator() == rhs.designator();

        if same_part && self.sign() == rhs.sign() {
            tracing::trace!(lhs = %self, rhs = %rhs, "simple add");
            self.simple_add(rhs)
        } else {
            tracing::trace!(lhs = %self, rhs = %rhs, "centi-unit add");
            self.centi_unit_add(rhs)
        }
    }

    /// `self - rhs`, i.e. `self + (-rhs)`.
    #[inline]
    pub fn checked_sub(self, rhs: Period) -> PeriodResult<Period> {
        self.checked_add(rhs.negate())
    }

    /// Both operands share a sign and at most one fraction designator, so
    /// fields can be summed directly.
    fn simple_add(self, rhs: Period) -> PeriodResult<Period> {
        let mut sum = Period64::from_period(self).with_origin(Origin::Sum(self, rhs));
        let other = Period64::from_period(rhs);

        sum.years += other.years;
        sum.months += other.months;
        sum.days += other.days;
        sum.hours += other.hours;
        sum.minutes += other.minutes;
        sum.seconds += other.seconds;

        match (sum.designator, other.designator) {
            (None, _) => {
                sum.fraction = other.fraction;
                sum.designator = other.designator;
            },
            (Some(_), None) => {},
            (Some(designator), Some(_)) => {
                sum.fraction += other.fraction;
                if sum.fraction > MAX_FRACTION {
                    *sum.field_mut(designator) += 1;
                    sum.fraction -= CENTI;
                }
            },
        }
        if sum.fraction == 0 {
            sum.clear_fraction();
        }

        sum.normalise(Precision::Exact).to_period()
    }

    /// Fractions on different fields, or differing signs: sum the centi-unit
    /// groups and let the combined total decide the result's sign.
    fn centi_unit_add(self, rhs: Period) -> PeriodResult<Period> {
        let total = CentiUnits::of(&self) + CentiUnits::of(&rhs);

        let (magnitude, negative) = if total.approximate_total() >= 0 {
            (total, false)
        } else {
            (-total, true)
        };
        let (balanced, precision) = magnitude.balance();

        let (sum, _) = Period64::from_centi_units(balanced, negative, precision);
        sum.with_origin(Origin::Sum(self, rhs)).to_period()
    }

    // ========================================================================
    // Normalisation entry points
    // ========================================================================

    /// Carry overflowing fields into larger units and reduce the fraction
    /// where that is exact.
    ///
    /// In approximate mode hours are also folded into 24-hour days.
    pub fn normalise(self, precision: Precision) -> PeriodResult<Period> {
        Period64::from_period(self)
            .with_origin(Origin::Period(self))
            .normalise(precision)
            .to_period()
    }

    /// Normalise, then apply the default simplification rules.
    pub fn simplify(self, precision: Precision) -> PeriodResult<Period> {
        self.simplify_with(precision, &SimplifyConfig::default())
    }

    /// Normalise, then apply simplification rules with custom thresholds.
    pub fn simplify_with(self, precision: Precision, config: &SimplifyConfig) -> PeriodResult<Period> {
        Period64::from_period(self)
            .with_origin(Origin::Period(self))
            .normalise(precision)
            .simplify(precision, config)
            .to_period()
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl Add for Period {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Period addition overflow")
    }
}

impl Sub for Period {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Period subtraction overflow")
    }
}
