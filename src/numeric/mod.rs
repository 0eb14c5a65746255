// ============================================================================
// Numeric Module
// Working representation and arithmetic engine for periods
// ============================================================================
//
// This module provides:
// - Period64: widened, sign-separated working value
// - CentiUnits: field and fraction combined per unit group
// - The normaliser: ripple-up carries and fraction reduction
// - PeriodError: error types for period operations
//
// Design principles:
// - No floating-point operations; average calendar units are whole seconds
// - All fallible operations return Result
// - The public representation is range-checked before every narrowing

mod centi;
mod errors;
mod normalise;
mod period64;
pub mod units;

pub use centi::CentiUnits;
pub use errors::{OverflowFields, PeriodError, PeriodResult};
pub use period64::{Origin, Period64};
