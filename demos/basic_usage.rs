// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::{NaiveDate, TimeDelta};
use fixed_period::prelude::*;
use tracing::Level;

fn main() -> Result<(), PeriodError> {
    // Debug level shows the engine's approximate-path and overflow events
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .compact()
        .init();

    println!("=== Fixed Period Example ===\n");

    // Build periods
    let eighteen_months = Period::new(1, 0, 0, 0, 0, 0)?.with_fraction(Designator::Year, 50)?;
    let quarter = Period::new(0, 3, 0, 0, 0, 0)?;
    let shift = Period::new(0, 0, 0, 1, 45, 0)?;

    println!("a = {}", eighteen_months);
    println!("b = {}", quarter);
    println!("c = {}\n", shift);

    // Addition and subtraction
    println!("=== Arithmetic ===");
    println!("a + b = {}", eighteen_months.checked_add(quarter)?);
    println!("c + PT30M = {}", shift.checked_add(Period::new(0, 0, 0, 0, 30, 0)?)?);
    println!("P1D - PT1H = {}", Period::new(0, 0, 1, 0, 0, 0)?.checked_sub(Period::new(0, 0, 0, 1, 0, 0)?)?);
    println!("-c = {}\n", -shift);

    // Scaling
    println!("=== Scaling ===");
    let day = Period::new(0, 0, 1, 0, 0, 0)?;
    for (multiplier, divisor) in [(1, 2), (1, 3), (3, 1)] {
        let (scaled, precision) = day.rational_scale_with_precision(multiplier, divisor)?;
        println!("{} * {}/{} = {} ({:?})", day, multiplier, divisor, scaled, precision);
    }
    println!("{} * 0.1 = {}", quarter, quarter.scale(0.1)?);
    println!("{} / 7 = {}\n", Period::new(0, 1, 0, 0, 0, 0)?, Period::new(0, 1, 0, 0, 0, 0)?.rational_scale(1, 7)?);

    // Normalisation and simplification
    println!("=== Normalisation ===");
    let untidy = Period::new(0, 14, 0, 30, 90, 0)?;
    println!("{} exact       -> {}", untidy, untidy.normalise(Precision::Exact)?);
    println!("{} approximate -> {}", untidy, untidy.normalise(Precision::Approximate)?);
    println!("{} simplified  -> {}\n", untidy, untidy.simplify(Precision::Exact)?);

    // Applying to a timestamp
    println!("=== Timestamps ===");
    let start = NaiveDate::from_ymd_opt(2024, 1, 31)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid date");
    for p in [
        Period::new(0, 1, 0, 0, 0, 0)?,
        Period::new(0, 0, 1, 6, 0, 0)?,
        Period::new(0, 0, 1, 0, 0, 0)?.with_fraction(Designator::Day, 50)?,
    ] {
        let (end, precise) = p.add_to(start)?;
        println!("{} + {} = {} (precise: {})", start, p, end, precise);
    }

    let (p, precise) = Period::from_duration(TimeDelta::minutes(1_000))?;
    println!("\n1000 minutes = {} (precise: {})", p, precise);

    // Overflow is reported, not wrapped
    println!("\n=== Overflow ===");
    let big = Period::new(32_000, 0, 0, 0, 0, 0)?;
    match big.checked_add(big) {
        Ok(sum) => println!("unexpected: {}", sum),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
