// ============================================================================
// Centi-Units
// Field and fraction folded into one scaled integer per unit group
// ============================================================================
//
// A period splits into three groups whose internal conversions are exact:
//   year-months  hundredths of a month   (1 year = 12 months)
//   days         hundredths of a day
//   hms          centiseconds            (1 hour = 60 minutes = 3600 s)
// Between groups only average conversions exist (30.436875-day months,
// 24-hour days), so those are used only to settle signs and fractions.

use super::units::{
    CENTI, CENTISECONDS_PER_CENTI_DAY, CENTISECONDS_PER_CENTI_MONTH, CENTISECONDS_PER_DAY,
    CENTISECONDS_PER_MONTH,
};
use crate::domain::{Period, Precision};
use std::ops::{Add, Neg};

/// Centi-unit totals for the three unit groups of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CentiUnits {
    /// Years and months, in hundredths of a month
    pub year_months: i64,
    /// Days, in hundredths of a day
    pub days: i64,
    /// Hours, minutes and seconds, in centiseconds
    pub hms: i64,
}

impl CentiUnits {
    /// Signed group totals of a period.
    pub fn of(period: &Period) -> Self {
        Self {
            year_months: period.centi_year_months(),
            days: period.centi_days(),
            hms: period.centi_hms(),
        }
    }

    #[inline]
    pub fn is_non_negative(&self) -> bool {
        self.year_months >= 0 && self.days >= 0 && self.hms >= 0
    }

    /// Combined length in centiseconds using average months and 24-hour
    /// days. Only its sign is relied on.
    pub fn approximate_total(&self) -> i128 {
        i128::from(self.year_months) * i128::from(CENTISECONDS_PER_CENTI_MONTH)
            + i128::from(self.days) * i128::from(CENTISECONDS_PER_CENTI_DAY)
            + i128::from(self.hms)
    }

    /// Remove negative groups from a total that is non-negative overall.
    ///
    /// Negative calendar groups are moved into the clock group; a negative
    /// clock group then borrows from days, then from months, preferring
    /// whole units. Returns `Approximate` if any borrowing happened.
    pub fn balance(mut self) -> (Self, Precision) {
        debug_assert!(self.approximate_total() >= 0);

        if self.is_non_negative() {
            return (self, Precision::Exact);
        }

        if self.year_months < 0 {
            self.hms += self.year_months * CENTISECONDS_PER_CENTI_MONTH;
            self.year_months = 0;
        }
        if self.days < 0 {
            self.hms += self.days * CENTISECONDS_PER_CENTI_DAY;
            self.days = 0;
        }

        if self.hms < 0 {
            let taken = borrow(
                -self.hms,
                self.days,
                CENTISECONDS_PER_DAY,
                CENTISECONDS_PER_CENTI_DAY,
            );
            self.days -= taken;
            self.hms += taken * CENTISECONDS_PER_CENTI_DAY;
        }
        if self.hms < 0 {
            let taken = borrow(
                -self.hms,
                self.year_months,
                CENTISECONDS_PER_MONTH,
                CENTISECONDS_PER_CENTI_MONTH,
            );
            self.year_months -= taken;
            self.hms += taken * CENTISECONDS_PER_CENTI_MONTH;
        }

        tracing::trace!(units = ?self, "balanced mixed-sign centi-units");
        (self, Precision::Approximate)
    }

    /// Leave at most one group with a fractional remainder.
    ///
    /// The smallest-unit remainder survives; larger-unit remainders are
    /// converted into centiseconds so no value is discarded. A converted
    /// month remainder can itself leave a centisecond remainder, in which
    /// case a day remainder is converted too and only centiseconds keep a
    /// fraction. Requires non-negative groups.
    pub fn fold_fractions(mut self) -> (Self, Precision) {
        let mut precision = Precision::Exact;

        let ym_remainder = self.year_months % CENTI;
        let days_remainder = self.days % CENTI;

        if ym_remainder != 0 && (days_remainder != 0 || self.hms % CENTI != 0) {
            self.year_months -= ym_remainder;
            self.hms += ym_remainder * CENTISECONDS_PER_CENTI_MONTH;
            precision = Precision::Approximate;
        }
        if days_remainder != 0 && self.hms % CENTI != 0 {
            self.days -= days_remainder;
            self.hms += days_remainder * CENTISECONDS_PER_CENTI_DAY;
            precision = Precision::Approximate;
        }

        (self, precision)
    }
}

/// How many centi-units of a group to take to cover `needed` centiseconds:
/// whole units when the group has them, otherwise just enough hundredths,
/// capped at what the group holds.
fn borrow(needed: i64, available: i64, per_unit: i64, per_centi_unit: i64) -> i64 {
    let whole = ceil_div(needed, per_unit) * CENTI;
    if available >= whole {
        whole
    } else {
        ceil_div(needed, per_centi_unit).min(available)
    }
}

#[inline]
fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

impl Add for CentiUnits {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            year_months: self.year_months + rhs.year_months,
            days: self.days + rhs.days,
            hms: self.hms + rhs.hms,
        }
    }
}

impl Neg for CentiUnits {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            year_months: -self.year_months,
            days: -self.days,
            hms: -self.hms,
        }
    }
}
