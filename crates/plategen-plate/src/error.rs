use plategen_core::TrigError;
use plategen_layout::LayoutError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Settings that cannot produce a plate. Raised before any layout is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown switch cutout type {0:?} (expected mx, alps or omron)")]
    UnknownFootprint(String),

    #[error(
        "unknown stabilizer type {0:?} (expected mx-simple, large-cuts, mx-notched, alps-aek or alps-at101)"
    )]
    UnknownStabilizer(String),

    #[error("unknown acoustic cutout mode {0:?} (expected none, typical or extreme)")]
    UnknownAcoustics(String),

    #[error("{which} radius {radius} is out of range (0 to {max} mm)")]
    RadiusOutOfRange {
        which: &'static str,
        radius: Decimal,
        max: Decimal,
    },

    #[error("unit {axis} {value} mm is out of range (must be above 0 and at most {max} mm)")]
    UnitOutOfRange {
        axis: &'static str,
        value: Decimal,
        max: Decimal,
    },

    #[error("precision: {0}")]
    Precision(#[from] TrigError),
}

#[derive(Debug, Error)]
pub enum PlateError {
    #[error("invalid plate settings: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("rendering failed: {0}")]
    Render(#[source] TrigError),
}
