// ============================================================================
// Domain Models Module
// Public value types: periods, fractions, precision and configuration
// ============================================================================

pub mod config;
pub mod designator;
pub mod period;
pub mod precision;

pub use config::SimplifyConfig;
pub use designator::{Designator, Fraction};
pub use period::Period;
pub use precision::Precision;
