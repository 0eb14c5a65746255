// ============================================================================
// Fixed Period Library
// Fixed-point ISO-8601 periods with exact and approximate calendar arithmetic
// ============================================================================

//! # Fixed Period
//!
//! Compact fixed-point periods ("1 year, 2 months, 3.5 days") and the
//! arithmetic engine behind them.
//!
//! ## Features
//!
//! - **Compact values**: six 16-bit fields plus one two-digit fraction
//! - **Overflow-safe arithmetic**: computed in 64-bit space, range-checked
//!   before narrowing, never silently wrapped
//! - **Two precision regimes**: exact calendar arithmetic, or approximate
//!   arithmetic with 24-hour days and 30.436875-day months
//! - **Timestamp application** for any calendar-exact [`Timestamp`](interfaces::Timestamp),
//!   implemented for chrono's date-time types
//!
//! ## Example
//!
//! ```rust
//! use fixed_period::prelude::*;
//! use chrono::NaiveDate;
//!
//! // 1.5 years + 3 months
//! let a = Period::new(1, 0, 0, 0, 0, 0)?.with_fraction(Designator::Year, 50)?;
//! let b = Period::new(0, 3, 0, 0, 0, 0)?;
//! let sum = a.checked_add(b)?;
//! assert_eq!(sum.to_string(), "P1Y9M");
//!
//! // Scale by a third
//! let third = Period::new(0, 0, 1, 0, 0, 0)?.rational_scale(1, 3)?;
//! assert_eq!(third.hours(), 8);
//!
//! // Apply to a timestamp
//! let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let (end, precise) = Period::new(0, 1, 0, 6, 0, 0)?.add_to(start)?;
//! assert!(precise);
//! assert_eq!(end.to_string(), "2024-02-29 06:00:00");
//! # Ok::<(), PeriodError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Designator, Fraction, Period, Precision, SimplifyConfig};
    pub use crate::interfaces::Timestamp;
    pub use crate::numeric::{PeriodError, PeriodResult};
}

#[cfg(test)]
mod integration_tests {
    use super::numeric::{Period64, PeriodError};
    use super::prelude::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn period(y: i16, mo: i16, d: i16, h: i16, mi: i16, s: i16) -> Period {
        Period::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_add_then_subtract_round_trip() {
        let a = period(0, 0, 0, 3, 10, 20);
        let b = period(0, 0, 0, 1, 55, 45)
            .with_fraction(Designator::Second, 50)
            .unwrap();

        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.fields(), [0, 0, 0, 5, 6, 5]);
        assert_eq!(sum.hundredths(), 50);

        let back = sum.checked_sub(b).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_scale_then_apply() {
        let start = Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap();
        let half_day = period(0, 0, 1, 0, 0, 0).rational_scale(1, 2).unwrap();
        assert_eq!(half_day.designator(), Some(Designator::Day));

        // A day fraction is applied approximately as 12 hours
        let (end, precise) = half_day.add_to(start).unwrap();
        assert!(!precise);
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 28, 12, 0, 0).unwrap());

        // Normalised approximately it becomes whole hours, applied exactly
        let hours = half_day.normalise(Precision::Approximate).unwrap();
        assert_eq!(hours, period(0, 0, 0, 12, 0, 0));
        let (end, precise) = hours.add_to(start).unwrap();
        assert!(precise);
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 28, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_sign_flip_across_units() {
        // 2 hours - 1 day 3 hours = -1 day 1 hour
        let p = period(0, 0, 0, 2, 0, 0)
            .checked_sub(period(0, 0, 1, 3, 0, 0))
            .unwrap();
        assert!(p.is_negative());
        assert_eq!(p.fields(), [0, 0, -1, -1, 0, 0]);
    }

    #[test]
    fn test_years_overflow_is_reported() {
        let p64 = Period64 {
            years: 32_768,
            ..Period64::default()
        };
        match p64.to_period() {
            Err(PeriodError::Overflow { fields, .. }) => assert_eq!(fields.as_slice(), ["years"]),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_month_end_clamping() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 31)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let (end, precise) = period(0, 1, 0, 0, 0, 0).add_to(start).unwrap();
        assert!(precise);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let p = period(0, 0, 2, 0, 0, 0)
            .with_fraction(Designator::Day, 25)
            .unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_periods() {
        let parse = |json: &str| serde_json::from_str::<Period>(json).map_err(|e| e.to_string());
        let fields = |years: i32, months: i32, fraction: &str| {
            format!(
                r#"{{"years":{},"months":{},"days":0,"hours":0,"minutes":0,"seconds":0,"fraction":{}}}"#,
                years, months, fraction
            )
        };

        // i16::MIN would overflow on negation
        let err = parse(&fields(-32768, 0, "null")).unwrap_err();
        assert!(err.contains("years out of range"), "{}", err);

        let err = parse(&fields(-1, 5, "null")).unwrap_err();
        assert!(err.contains("mixed signs"), "{}", err);

        // Zero and out-of-range hundredths
        let err = parse(&fields(0, 5, r#"{"designator":"Day","hundredths":0}"#)).unwrap_err();
        assert!(err.contains("fraction out of range"), "{}", err);
        let err = parse(&fields(0, 5, r#"{"designator":"Day","hundredths":120}"#)).unwrap_err();
        assert!(err.contains("fraction out of range"), "{}", err);

        // Fraction sign disagreeing with the fields
        let err = parse(&fields(0, 5, r#"{"designator":"Day","hundredths":-25}"#)).unwrap_err();
        assert!(err.contains("mixed signs"), "{}", err);

        let ok = parse(&fields(0, -5, r#"{"designator":"Day","hundredths":-25}"#)).unwrap();
        assert_eq!(ok.months(), -5);
        assert_eq!(ok.hundredths(), -25);
    }
}
