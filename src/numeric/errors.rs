// ============================================================================
// Period Errors
// Error types for period construction and arithmetic
// ============================================================================

use smallvec::SmallVec;
use std::fmt;

/// Names of the fields that overflowed, in field order.
pub type OverflowFields = SmallVec<[&'static str; 7]>;

/// Errors that can occur while building or operating on periods.
///
/// Dividing by zero in [`Period::rational_scale`](crate::domain::Period::rational_scale)
/// is a contract violation and panics instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// One or more fields exceeded the representable range after an operation
    Overflow {
        /// The operation's input, or the unrepresentable result when unknown
        input: String,
        /// Offending fields (`"years"` .. `"seconds"`, `"fraction"`)
        fields: OverflowFields,
    },
    /// A field passed to a constructor is outside `-32767..=32767`
    FieldOutOfRange { field: &'static str, value: i64 },
    /// A fraction is zero where one is required, or outside `-99..=99`
    FractionOutOfRange(i16),
    /// Positive and negative values combined in one period
    MixedSigns,
    /// A scale factor has no finite decimal representation
    InvalidFactor(String),
    /// The timestamp could not represent the result
    TimestampOutOfRange,
}

impl PeriodError {
    /// True for the arithmetic overflow kind.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, PeriodError::Overflow { .. })
    }

    /// Offending field names for an overflow, empty otherwise.
    pub fn overflow_fields(&self) -> &[&'static str] {
        match self {
            PeriodError::Overflow { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::Overflow { input, fields } => {
                write!(
                    f,
                    "{}: integer overflow occurred in {}",
                    input,
                    fields.join(",")
                )
            },
            PeriodError::FieldOutOfRange { field, value } => {
                write!(f, "{} out of range: {} exceeds ±32767", field, value)
            },
            PeriodError::FractionOutOfRange(value) => {
                write!(f, "fraction out of range: {} hundredths is not within ±1..=99", value)
            },
            PeriodError::MixedSigns => {
                write!(f, "mixed signs: all fields of a period must share one sign")
            },
            PeriodError::InvalidFactor(factor) => {
                write!(f, "invalid scale factor: {}", factor)
            },
            PeriodError::TimestampOutOfRange => {
                write!(f, "timestamp out of range: result is not representable")
            },
        }
    }
}

impl std::error::Error for PeriodError {}

/// Result type alias for period operations
pub type PeriodResult<T> = Result<T, PeriodError>;
