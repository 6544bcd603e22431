use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrigError {
    #[error("working precision must be between 1 and {max} fractional digits (got {digits})")]
    PrecisionOutOfRange { digits: u32, max: u32 },

    #[error("series evaluation overflowed for an angle of {degrees} degrees")]
    Overflow { degrees: Decimal },
}
