use plategen_core::Point2;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

/// Circular arc, counter-clockwise from `start_angle` to `end_angle` (degrees, y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub center: Point2,
    pub radius: Decimal,
    pub start_angle: Decimal,
    pub end_angle: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Line(Line),
    Arc(Arc),
}
