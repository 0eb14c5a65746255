// ============================================================================
// Normaliser
// Carry propagation from seconds up to years, plus fraction reduction
// ============================================================================
//
// All routines operate on non-negative magnitudes; the sign stays in
// `Period64::negative`. Every routine whose behaviour depends on calendar
// assumptions takes the precision mode explicitly.

use super::period64::Period64;
use super::units::{
    CENTI, DAYS_PER_MONTH_E6, HOURS_PER_DAY, MAX_FIELD, MINUTES_PER_HOUR, MONTHS_PER_YEAR, ONE_E6,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH,
};
use crate::domain::{Designator, Precision, SimplifyConfig};

impl Period64 {
    /// Carry overflow up through the fields, then reduce the fraction into
    /// the next smaller unit where that is exact.
    pub fn normalise(self, precision: Precision) -> Self {
        let rippled = self.ripple_up(precision);
        let reduced = rippled
            .reduce_years_fraction()
            .reduce_months_fraction(precision)
            .reduce_days_fraction(precision)
            .reduce_hours_fraction()
            .reduce_minutes_fraction();

        if reduced.designator != rippled.designator {
            // the absorbed fraction may have pushed its target past a unit boundary
            reduced.ripple_up(precision)
        } else {
            reduced
        }
    }

    /// Redistribute seconds → minutes → hours → days → months → years.
    ///
    /// Hours fold into 24-hour days only in approximate mode or when they
    /// would not fit a public field. Days fold into average months only when
    /// they would not fit or have gone negative, since that loses precision.
    pub fn ripple_up(mut self, precision: Precision) -> Self {
        self.carry_clock();

        if precision.is_approximate() || self.hours > MAX_FIELD {
            self.days += self.hours / HOURS_PER_DAY;
            self.hours %= HOURS_PER_DAY;
        }

        if self.days > MAX_FIELD || self.days < 0 {
            self.collapse_days_into_months();
        }

        if self.months != 0 {
            self.years += self.months.div_euclid(MONTHS_PER_YEAR);
            self.months = self.months.rem_euclid(MONTHS_PER_YEAR);
        }

        self
    }

    /// Re-derive hours, minutes and seconds from their combined total,
    /// borrowing whole days if the total is negative.
    fn carry_clock(&mut self) {
        let mut total = i128::from(self.hours) * i128::from(SECONDS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(SECONDS_PER_MINUTE)
            + i128::from(self.seconds);

        if total < 0 {
            let borrowed = total.div_euclid(i128::from(SECONDS_PER_DAY));
            self.days += borrowed as i64;
            total -= borrowed * i128::from(SECONDS_PER_DAY);
        }

        self.hours = (total / i128::from(SECONDS_PER_HOUR)) as i64;
        self.minutes = (total % i128::from(SECONDS_PER_HOUR) / i128::from(SECONDS_PER_MINUTE)) as i64;
        self.seconds = (total % i128::from(SECONDS_PER_MINUTE)) as i64;
    }

    /// Convert days and the clock fields into average months, leaving the
    /// remainder as canonical days, hours, minutes and seconds.
    ///
    /// Approximate: a month is taken as 30.436875 days.
    fn collapse_days_into_months(&mut self) {
        tracing::debug!(
            days = self.days,
            hours = self.hours,
            "collapsing days into average months"
        );

        let total = i128::from(self.days) * i128::from(SECONDS_PER_DAY)
            + i128::from(self.hours) * i128::from(SECONDS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(SECONDS_PER_MINUTE)
            + i128::from(self.seconds);
        let month = i128::from(SECONDS_PER_MONTH);

        self.months += total.div_euclid(month) as i64;
        let rem = total.rem_euclid(month) as i64;

        self.days = rem / SECONDS_PER_DAY;
        self.hours = rem % SECONDS_PER_DAY / SECONDS_PER_HOUR;
        self.minutes = rem % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        self.seconds = rem % SECONDS_PER_MINUTE;
    }

    // ========================================================================
    // Fraction reduction
    // ========================================================================

    /// Push a year fraction into whole months when it is a multiple of 1/12.
    fn reduce_years_fraction(mut self) -> Self {
        if self.designator == Some(Designator::Year) {
            self.absorb_fraction(Designator::Month, MONTHS_PER_YEAR * self.fraction);
        }
        self
    }

    /// Push a month fraction into whole average-length days (approximate only).
    fn reduce_months_fraction(mut self, precision: Precision) -> Self {
        if precision.is_approximate() && self.designator == Some(Designator::Month) {
            let centi_days = DAYS_PER_MONTH_E6 * self.fraction / ONE_E6;
            self.absorb_fraction(Designator::Day, centi_days);
        }
        self
    }

    /// Push a day fraction into whole 24-hour hours (approximate only).
    fn reduce_days_fraction(mut self, precision: Precision) -> Self {
        if precision.is_approximate() && self.designator == Some(Designator::Day) {
            self.absorb_fraction(Designator::Hour, HOURS_PER_DAY * self.fraction);
        }
        self
    }

    fn reduce_hours_fraction(mut self) -> Self {
        if self.designator == Some(Designator::Hour) {
            self.absorb_fraction(Designator::Minute, MINUTES_PER_HOUR * self.fraction);
        }
        self
    }

    fn reduce_minutes_fraction(mut self) -> Self {
        if self.designator == Some(Designator::Minute) {
            self.absorb_fraction(Designator::Second, SECONDS_PER_MINUTE * self.fraction);
        }
        self
    }

    /// Add `centi_units` of the smaller unit and drop the fraction, but only
    /// if it is a whole number of that unit.
    fn absorb_fraction(&mut self, target: Designator, centi_units: i64) {
        if centi_units % CENTI == 0 {
            *self.field_mut(target) += centi_units / CENTI;
            self.clear_fraction();
        }
    }

    // ========================================================================
    // Simplification
    // ========================================================================

    /// Fold a single larger unit into the next smaller one where that
    /// reduces the number of non-zero fields, e.g. `P1Y3M` to `P15M`.
    ///
    /// Expects a normalised value. A step is skipped when the fraction sits
    /// on the larger unit, so no value changes.
    pub fn simplify(mut self, precision: Precision, config: &SimplifyConfig) -> Self {
        if self.years == 1
            && self.months > 0
            && self.months <= config.years_threshold
            && self.designator != Some(Designator::Year)
        {
            self.months += MONTHS_PER_YEAR;
            self.years = 0;
        }

        if precision.is_approximate()
            && self.days == 1
            && self.hours > 0
            && self.hours <= config.days_threshold
            && self.designator != Some(Designator::Day)
        {
            self.hours += HOURS_PER_DAY;
            self.days = 0;
        }

        if self.hours == 1
            && self.minutes > 0
            && self.minutes <= config.hours_threshold
            && self.designator != Some(Designator::Hour)
        {
            self.minutes += MINUTES_PER_HOUR;
            self.hours = 0;
        }

        if self.minutes == 1
            && self.seconds > 0
            && self.seconds <= config.minutes_threshold
            && self.designator != Some(Designator::Minute)
        {
            self.seconds += SECONDS_PER_MINUTE;
            self.minutes = 0;
        }

        self
    }
}
