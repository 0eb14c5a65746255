// ============================================================================
// Calendar Units
// Exact and average unit lengths used by the arithmetic engine
// ============================================================================
//
// The average month is 1/12 of a 365.2425-day Gregorian year, i.e.
// 30.436875 days = 2_629_746 seconds. Every approximate conversion below is
// an integer multiple of a second, so no floating point is involved.

/// Largest magnitude of any whole-number field in a public period.
pub const MAX_FIELD: i64 = i16::MAX as i64;

/// Largest magnitude of a fraction (two decimal places).
pub const MAX_FRACTION: i64 = 99;

/// Hundredths per unit.
pub const CENTI: i64 = 100;

pub const MONTHS_PER_YEAR: i64 = 12;
pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Average Gregorian month in seconds (30.436875 days).
pub const SECONDS_PER_MONTH: i64 = 2_629_746;

/// Average Gregorian month in millionths of a day.
pub const DAYS_PER_MONTH_E6: i64 = 30_436_875;
pub const ONE_E6: i64 = 1_000_000;

/// One hundredth of a month, in centiseconds.
pub const CENTISECONDS_PER_CENTI_MONTH: i64 = SECONDS_PER_MONTH;

/// One hundredth of a day, in centiseconds.
pub const CENTISECONDS_PER_CENTI_DAY: i64 = SECONDS_PER_DAY;

/// Whole units in centiseconds.
pub const CENTISECONDS_PER_HOUR: i64 = SECONDS_PER_HOUR * CENTI;
pub const CENTISECONDS_PER_MINUTE: i64 = SECONDS_PER_MINUTE * CENTI;
pub const CENTISECONDS_PER_DAY: i64 = SECONDS_PER_DAY * CENTI;
pub const CENTISECONDS_PER_MONTH: i64 = SECONDS_PER_MONTH * CENTI;

/// Milliseconds per centi-unit, for duration conversion.
pub const MILLIS_PER_CENTISECOND: i64 = 10;
pub const MILLIS_PER_CENTI_DAY: i64 = SECONDS_PER_DAY * 10;
pub const MILLIS_PER_CENTI_MONTH: i64 = SECONDS_PER_MONTH * 10;
