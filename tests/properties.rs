// ============================================================================
// Property Tests
// Invariants that must hold for arbitrary periods
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use fixed_period::prelude::*;
use proptest::prelude::*;

fn designator() -> impl Strategy<Value = Designator> {
    prop::sample::select(Designator::ALL.to_vec())
}

/// Sign-consistent period with small fields and an optional fraction.
fn any_period() -> impl Strategy<Value = Period> {
    (
        prop::array::uniform6(0i16..500),
        prop::option::of((designator(), 1i8..100)),
        any::<bool>(),
    )
        .prop_map(|([y, mo, d, h, mi, s], fraction, negative)| {
            let mut p = Period::new(y, mo, d, h, mi, s).unwrap();
            if let Some((designator, hundredths)) = fraction {
                p = p.with_fraction(designator, hundredths).unwrap();
            }
            if negative {
                p.negate()
            } else {
                p
            }
        })
}

/// Hours, minutes and seconds only, optionally with hundredths of a second.
fn clock_period() -> impl Strategy<Value = Period> {
    (0i16..1000, 0i16..200, 0i16..200, 0i8..100, any::<bool>()).prop_map(
        |(h, mi, s, hundredths, negative)| {
            let p = Period::new(0, 0, 0, h, mi, s)
                .unwrap()
                .with_fraction(Designator::Second, hundredths)
                .unwrap();
            if negative {
                p.negate()
            } else {
                p
            }
        },
    )
}

fn whole_period() -> impl Strategy<Value = Period> {
    prop::array::uniform6(0i16..1000)
        .prop_map(|[y, mo, d, h, mi, s]| Period::new(y, mo, d, h, mi, s).unwrap())
}

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap()
}

fn sign_consistent(p: &Period) -> bool {
    let values = p.fields().map(i32::from);
    let hundredths = i32::from(p.hundredths());
    let all_non_negative = values.iter().all(|&v| v >= 0) && hundredths >= 0;
    let all_non_positive = values.iter().all(|&v| v <= 0) && hundredths <= 0;
    all_non_negative || all_non_positive
}

proptest! {
    #[test]
    fn sum_is_sign_consistent(a in any_period(), b in any_period()) {
        match a.checked_add(b) {
            Ok(sum) => {
                prop_assert!(sign_consistent(&sum), "{} + {} = {:?}", a, b, sum);
                prop_assert!(sum.hundredths().abs() <= 99);
            }
            Err(err) => prop_assert!(err.is_overflow()),
        }
    }

    #[test]
    fn sum_commutes(a in any_period(), b in any_period()) {
        prop_assert_eq!(a.checked_add(b), b.checked_add(a));
    }

    #[test]
    fn scaled_is_sign_consistent(p in any_period(), multiplier in -20i64..20, divisor in 1i64..20) {
        match p.rational_scale(multiplier, divisor) {
            Ok(scaled) => prop_assert!(sign_consistent(&scaled), "{} * {}/{} = {:?}", p, multiplier, divisor, scaled),
            Err(err) => prop_assert!(err.is_overflow()),
        }
    }

    #[test]
    fn scale_by_zero_is_zero(p in any_period()) {
        prop_assert_eq!(p.rational_scale(0, 7).unwrap(), Period::ZERO);
    }

    #[test]
    fn scale_by_one_normalises(p in whole_period()) {
        prop_assert_eq!(p.rational_scale(1, 1).unwrap(), p.normalise(Precision::Exact).unwrap());
    }

    #[test]
    fn clock_sum_matches_elapsed_sum(a in clock_period(), b in clock_period()) {
        let sum = a.checked_add(b).unwrap();
        let (total, precise) = sum.to_duration();
        prop_assert!(precise);
        prop_assert_eq!(total, a.to_duration().0 + b.to_duration().0);
    }

    #[test]
    fn clock_period_applies_reversibly(p in clock_period()) {
        let (forward, precise_forward) = p.add_to(start()).unwrap();
        let (back, precise_back) = p.negate().add_to(forward).unwrap();
        prop_assert!(precise_forward && precise_back);
        prop_assert_eq!(back, start());
    }

    #[test]
    fn elapsed_time_round_trips(p in clock_period()) {
        let (delta, _) = p.to_duration();
        let (rebuilt, precise) = Period::from_duration(delta).unwrap();
        prop_assert!(precise);
        prop_assert_eq!(rebuilt, p.normalise(Precision::Exact).unwrap());
    }

    #[test]
    fn whole_periods_apply_exactly(p in whole_period()) {
        let (_, precise) = p.add_to(start()).unwrap();
        prop_assert!(precise);
    }

    #[test]
    fn negate_is_involution(p in any_period()) {
        prop_assert_eq!(p.negate().negate(), p);
        prop_assert_eq!(p.negate().is_negative(), p.is_positive());
    }
}

#[test]
fn month_end_arithmetic_is_not_reversible() {
    let jan_31 = NaiveDate::from_ymd_opt(2023, 1, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let month = Period::new(0, 1, 0, 0, 0, 0).unwrap();

    let (feb_28, _) = month.add_to(jan_31).unwrap();
    let (back, _) = month.negate().add_to(feb_28).unwrap();
    assert_eq!(back, jan_31 - TimeDelta::days(3));
}
