// ============================================================================
// Scaling
// Multiply a period by a rational or floating-point factor
// ============================================================================

use crate::domain::{Period, Precision, SimplifyConfig};
use crate::numeric::units::{
    CENTISECONDS_PER_CENTI_DAY, MILLIS_PER_CENTISECOND, MILLIS_PER_CENTI_DAY,
    MILLIS_PER_CENTI_MONTH,
};
use crate::numeric::{CentiUnits, Origin, Period64, PeriodError, PeriodResult};
use rust_decimal::Decimal;
use smallvec::smallvec;
use std::str::FromStr;

/// Rounding bias added before the approximate result is truncated to
/// centiseconds: half a centisecond.
const HALF_CENTISECOND_MILLIS: i128 = 5;

impl Period {
    /// Scale by a floating-point factor.
    ///
    /// The factor is first rendered with six decimal places and read back
    /// as an exact decimal, so `0.1` scales by exactly 1/10.
    ///
    /// # Errors
    /// - `InvalidFactor` if the factor is NaN, infinite, or too large
    /// - `Overflow` if the result does not fit
    pub fn scale(self, factor: f32) -> PeriodResult<Period> {
        let (multiplier, divisor) = rational_from_f32(factor)?;
        self.rational_scale(multiplier, divisor)
    }

    /// Scale by `multiplier / divisor`. Negative factors flip the sign.
    ///
    /// The result is exact when every unit group divides evenly and at most
    /// one group is left with a fractional remainder. Otherwise it falls
    /// back to average month and day lengths.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit.
    pub fn rational_scale(self, multiplier: i64, divisor: i64) -> PeriodResult<Period> {
        self.rational_scale_with_precision(multiplier, divisor)
            .map(|(period, _)| period)
    }

    /// As [`rational_scale`](Period::rational_scale), also reporting whether
    /// the result is calendar-exact.
    pub fn rational_scale_with_precision(
        self,
        multiplier: i64,
        divisor: i64,
    ) -> PeriodResult<(Period, Precision)> {
        assert_ne!(divisor, 0, "period scaled by a zero divisor");

        let origin = Origin::Scale(self, multiplier, divisor);
        let negative = self.is_negative() ^ ((multiplier < 0) != (divisor < 0));
        let m = i128::from(multiplier).abs();
        let d = i128::from(divisor).abs();

        let units = CentiUnits::of(&self.abs());
        let ym = i128::from(units.year_months) * m;
        let days = i128::from(units.days) * m;
        let hms = i128::from(units.hms) * m;

        if ym % d == 0 && days % d == 0 && hms % d == 0 {
            let scaled = narrow_units(ym / d, days / d, hms / d, origin)?;
            let (p64, precision) = Period64::from_centi_units(scaled, negative, Precision::Exact);
            let period = p64.with_origin(origin).to_period()?;
            return Ok((period, precision));
        }

        // Shrinking a whole number of days into fractional days: try the
        // same amount as 24-hour clock time instead
        if d > m && ym % d == 0 && hms % d == 0 {
            let as_clock = hms + days * i128::from(CENTISECONDS_PER_CENTI_DAY);
            if as_clock % d == 0 {
                let scaled = narrow_units(ym / d, 0, as_clock / d, origin)?;
                let (p64, precision) =
                    Period64::from_centi_units(scaled, negative, Precision::Approximate);
                let period = p64.with_origin(origin).to_period()?;
                return Ok((period, precision));
            }
        }

        self.approximate_scale(units, m, d, negative, origin)
    }

    /// Convert to milliseconds with average months and 24-hour days, scale,
    /// round to the nearest centisecond and rebuild a period.
    fn approximate_scale(
        self,
        units: CentiUnits,
        m: i128,
        d: i128,
        negative: bool,
        origin: Origin,
    ) -> PeriodResult<(Period, Precision)> {
        let calendar_millis = i128::from(units.year_months) * i128::from(MILLIS_PER_CENTI_MONTH)
            + i128::from(units.days) * i128::from(MILLIS_PER_CENTI_DAY);
        let clock_millis = i128::from(units.hms) * i128::from(MILLIS_PER_CENTISECOND);

        let scaled = (calendar_millis + clock_millis) * m / d + HALF_CENTISECOND_MILLIS;
        let millis = u64::try_from(scaled).map_err(|_| overflow(origin, "years"))?;

        let (rebuilt, rebuilt_precision) = Period64::from_millis(millis);
        let precision = Precision::from(calendar_millis == 0).and(rebuilt_precision);

        tracing::debug!(
            period = %self,
            multiplier = %m,
            divisor = %d,
            ?precision,
            "approximate period scaling"
        );

        let period = Period64 {
            negative,
            ..rebuilt
        }
        .with_origin(origin)
        .normalise(precision)
        .simplify(precision, &SimplifyConfig::default())
        .to_period()?;

        Ok((period, precision))
    }
}

/// Narrow scaled group totals back to 64 bits.
fn narrow_units(ym: i128, days: i128, hms: i128, origin: Origin) -> PeriodResult<CentiUnits> {
    Ok(CentiUnits {
        year_months: i64::try_from(ym).map_err(|_| overflow(origin, "years"))?,
        days: i64::try_from(days).map_err(|_| overflow(origin, "days"))?,
        hms: i64::try_from(hms).map_err(|_| overflow(origin, "hours"))?,
    })
}

fn overflow(origin: Origin, field: &'static str) -> PeriodError {
    PeriodError::Overflow {
        input: origin.to_string(),
        fields: smallvec![field],
    }
}

/// Exact reduced rational for the six-decimal rendering of `factor`.
pub(crate) fn rational_from_f32(factor: f32) -> PeriodResult<(i64, i64)> {
    let text = format!("{:.6}", factor);
    let decimal = Decimal::from_str(&text)
        .map_err(|_| PeriodError::InvalidFactor(text.clone()))?
        .normalize();

    let numerator = decimal.mantissa();
    let denominator = 10i128.pow(decimal.scale());
    let divisor = gcd(numerator.abs(), denominator);

    let multiplier =
        i64::try_from(numerator / divisor).map_err(|_| PeriodError::InvalidFactor(text.clone()))?;
    let divisor = i64::try_from(denominator / divisor).map_err(|_| PeriodError::InvalidFactor(text))?;
    Ok((multiplier, divisor))
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
