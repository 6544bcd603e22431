//! Exact-decimal math shared by the layout reader and the plate renderer.

pub mod error;
pub mod frame;
pub mod trig;

pub use error::TrigError;
pub use frame::{CoordinateFrame, Point2, UnitSize};
pub use rust_decimal::Decimal;
pub use trig::{DecimalContext, PrecisionGuard};
