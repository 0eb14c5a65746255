// ============================================================================
// Timestamp Interface
// Calendar capability a period needs in order to be applied to a time
// ============================================================================

use chrono::{DateTime, Days, Months, NaiveDateTime, TimeDelta, TimeZone};

/// A point in time that periods can be added to.
///
/// Implementations must be calendar-exact: month lengths and leap years are
/// respected by `checked_add_calendar`, and `checked_add_elapsed` adds an
/// exact amount of elapsed time. Both return `None` when the result is out
/// of range.
pub trait Timestamp: Sized {
    /// Add whole years, months and days (any sign).
    fn checked_add_calendar(self, years: i32, months: i32, days: i32) -> Option<Self>;

    /// Add an exact elapsed offset (any sign).
    fn checked_add_elapsed(self, delta: TimeDelta) -> Option<Self>;
}

/// Split a signed month count for chrono's unsigned `Months`.
fn months_of(years: i32, months: i32) -> Option<(bool, Months)> {
    let total = years.checked_mul(12)?.checked_add(months)?;
    Some((total >= 0, Months::new(total.unsigned_abs())))
}

fn days_of(days: i32) -> (bool, Days) {
    (days >= 0, Days::new(u64::from(days.unsigned_abs())))
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn checked_add_calendar(self, years: i32, months: i32, days: i32) -> Option<Self> {
        let (forward, months) = months_of(years, months)?;
        let shifted = if forward {
            self.checked_add_months(months)?
        } else {
            self.checked_sub_months(months)?
        };

        match days_of(days) {
            (true, days) => shifted.checked_add_days(days),
            (false, days) => shifted.checked_sub_days(days),
        }
    }

    fn checked_add_elapsed(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }
}

impl Timestamp for NaiveDateTime {
    fn checked_add_calendar(self, years: i32, months: i32, days: i32) -> Option<Self> {
        let (forward, months) = months_of(years, months)?;
        let shifted = if forward {
            self.checked_add_months(months)?
        } else {
            self.checked_sub_months(months)?
        };

        match days_of(days) {
            (true, days) => shifted.checked_add_days(days),
            (false, days) => shifted.checked_sub_days(days),
        }
    }

    fn checked_add_elapsed(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }
}
