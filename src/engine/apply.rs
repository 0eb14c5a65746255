// ============================================================================
// Timestamp Application
// Adding periods to timestamps and converting to/from elapsed time
// ============================================================================

use crate::domain::{Designator, Period, Precision};
use crate::interfaces::Timestamp;
use crate::numeric::units::{MILLIS_PER_CENTISECOND, MILLIS_PER_CENTI_DAY, MILLIS_PER_CENTI_MONTH};
use crate::numeric::{Origin, Period64, PeriodError, PeriodResult};
use chrono::TimeDelta;

impl Period {
    /// Add the period to a timestamp.
    ///
    /// Returns the shifted timestamp and `true` when the result is exact.
    /// Whole years, months and days are applied with calendar arithmetic,
    /// then hours, minutes and seconds as elapsed time; this is exact.
    /// A fraction on years, months or days forces the approximate route via
    /// [`to_duration`](Period::to_duration) and reports `false`.
    ///
    /// # Errors
    /// Returns `TimestampOutOfRange` if the timestamp cannot hold the result.
    pub fn add_to<T: Timestamp>(&self, timestamp: T) -> PeriodResult<(T, bool)> {
        let whole_dates = !self.designator().is_some_and(Designator::is_date);

        if whole_dates {
            let shifted = timestamp
                .checked_add_calendar(
                    i32::from(self.years()),
                    i32::from(self.months()),
                    i32::from(self.days()),
                )
                .and_then(|t| t.checked_add_elapsed(self.clock_duration()))
                .ok_or(PeriodError::TimestampOutOfRange)?;
            return Ok((shifted, true));
        }

        let (delta, precise) = self.to_duration();
        let shifted = timestamp
            .checked_add_elapsed(delta)
            .ok_or(PeriodError::TimestampOutOfRange)?;
        Ok((shifted, precise))
    }

    /// Approximate elapsed time: 365.2425-day years, average months and
    /// 24-hour days.
    ///
    /// The flag is `true` only when there are no years, months or days.
    pub fn to_duration(&self) -> (TimeDelta, bool) {
        let calendar = self.centi_year_months() * MILLIS_PER_CENTI_MONTH
            + self.centi_days() * MILLIS_PER_CENTI_DAY;
        let clock = self.centi_hms() * MILLIS_PER_CENTISECOND;
        (TimeDelta::milliseconds(calendar + clock), calendar == 0)
    }

    /// Hours, minutes and seconds (with their fraction) as elapsed time.
    fn clock_duration(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.centi_hms() * MILLIS_PER_CENTISECOND)
    }

    /// Build a period from elapsed time, truncated to centiseconds.
    ///
    /// Durations whose whole hours fit a field become hours, minutes and
    /// seconds exactly (`true`). Longer ones are expressed with 24-hour days
    /// and, if needed, average months (`false`).
    ///
    /// # Errors
    /// Returns `Overflow` if even years cannot hold the duration.
    pub fn from_duration(delta: TimeDelta) -> PeriodResult<(Period, bool)> {
        let millis = delta.num_milliseconds();
        let (rebuilt, precision) = Period64::from_millis(millis.unsigned_abs());

        let period = Period64 {
            negative: millis < 0,
            ..rebuilt
        }
        .with_origin(Origin::Millis(millis))
        .to_period()?;

        Ok((period, precision == Precision::Exact))
    }
}
