use plategen_core::TrigError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout root must be an array of rows")]
    RootNotArray,

    #[error("row {row}: expected an array of keys or a metadata object, found {found}")]
    InvalidRow { row: usize, found: &'static str },

    #[error("row {row}, item {index}: rows cannot be nested")]
    NestedRow { row: usize, index: usize },

    #[error("row {row}, item {index}: expected a legend or a property object, found {found}")]
    UnexpectedToken {
        row: usize,
        index: usize,
        found: &'static str,
    },

    #[error("token received outside of a row")]
    TokenOutsideRow,

    #[error("row {row} started before the previous row was closed")]
    RowNotClosed { row: usize },

    #[error("row end without a matching row start")]
    RowNotOpen,

    #[error("input ended inside row {row}")]
    UnterminatedRow { row: usize },

    #[error("row {row}: property \"{key}\" must be a number (got {value})")]
    NonNumeric {
        row: usize,
        key: &'static str,
        value: String,
    },

    #[error("row {row}: property \"{key}\" is {value}, beyond the allowed magnitude of {max}")]
    OutOfRange {
        row: usize,
        key: &'static str,
        value: Decimal,
        max: Decimal,
    },

    #[error("row {row}: property \"{key}\" must be a boolean (got {value})")]
    NonBoolean {
        row: usize,
        key: &'static str,
        value: String,
    },

    #[error("failed to build a rotated frame: {0}")]
    Frame(#[from] TrigError),
}
