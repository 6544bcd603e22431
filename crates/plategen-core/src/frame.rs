use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{DecimalContext, TrigError};

/// A point in global millimetres (x right, y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point2 {
    pub x: Decimal,
    pub y: Decimal,
}

impl Point2 {
    #[must_use]
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }

    /// Rotate counter-clockwise around `center` by the angle whose cosine/sine are given.
    #[must_use]
    pub fn rotate_about(self, center: Point2, cos: Decimal, sin: Decimal) -> Point2 {
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point2 {
            x: center.x + dx * cos - dy * sin,
            y: center.y + dx * sin + dy * cos,
        }
    }

    #[must_use]
    pub fn offset(self, dx: Decimal, dy: Decimal) -> Point2 {
        Point2 {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Millimetres per layout unit, independently per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSize {
    pub width: Decimal,
    pub height: Decimal,
}

impl Default for UnitSize {
    fn default() -> Self {
        Self {
            width: dec!(19.05),
            height: dec!(19.05),
        }
    }
}

impl UnitSize {
    #[must_use]
    pub fn square(size: Decimal) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// One (possibly rotated) reference frame of the layout.
///
/// `angle` is in degrees, counter-clockwise in the y-up output space (the layout's `r` property
/// with its sign inverted). The anchor is in layout units; local coordinates handed to
/// [`CoordinateFrame::to_global`] are measured from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateFrame {
    angle: Decimal,
    anchor_x: Decimal,
    anchor_y: Decimal,
    unit: UnitSize,
    cos: Decimal,
    sin: Decimal,
}

impl CoordinateFrame {
    pub fn new(
        ctx: &mut DecimalContext,
        angle: Decimal,
        anchor_x: Decimal,
        anchor_y: Decimal,
        unit: UnitSize,
    ) -> Result<Self, TrigError> {
        let (cos, sin) = ctx.cos_sin(angle)?;
        Ok(Self {
            angle,
            anchor_x,
            anchor_y,
            unit,
            cos,
            sin,
        })
    }

    /// Unrotated frame anchored at the layout origin.
    #[must_use]
    pub fn origin(unit: UnitSize) -> Self {
        Self {
            angle: Decimal::ZERO,
            anchor_x: Decimal::ZERO,
            anchor_y: Decimal::ZERO,
            unit,
            cos: Decimal::ONE,
            sin: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn angle(&self) -> Decimal {
        self.angle
    }

    #[must_use]
    pub fn anchor(&self) -> (Decimal, Decimal) {
        (self.anchor_x, self.anchor_y)
    }

    #[must_use]
    pub fn unit(&self) -> UnitSize {
        self.unit
    }

    #[must_use]
    pub fn cos_sin(&self) -> (Decimal, Decimal) {
        (self.cos, self.sin)
    }

    /// Map a local layout position to global millimetres.
    ///
    /// Both axes are scaled first (unit cells need not be square), the scaled offset is rotated
    /// around the scaled anchor in the layout's y-down space, and only then is y negated.
    #[must_use]
    pub fn to_global(&self, x: Decimal, y: Decimal) -> Point2 {
        let ax = self.anchor_x * self.unit.width;
        let ay = self.anchor_y * self.unit.height;
        let x = x * self.unit.width;
        let y = y * self.unit.height;

        let gx = ax + self.cos * x + self.sin * y;
        let gy = ay - self.sin * x + self.cos * y;
        Point2 { x: gx, y: -gy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_frame_is_identity_with_y_negated() {
        let frame = CoordinateFrame::origin(UnitSize::square(Decimal::ONE));
        assert_eq!(
            frame.to_global(dec!(3.5), dec!(2)),
            Point2::new(dec!(3.5), dec!(-2))
        );
    }

    #[test]
    fn axes_scale_independently() {
        let frame = CoordinateFrame::origin(UnitSize {
            width: dec!(19.05),
            height: dec!(20),
        });
        assert_eq!(
            frame.to_global(dec!(1), dec!(1)),
            Point2::new(dec!(19.05), dec!(-20))
        );
    }

    #[test]
    fn anchor_is_scaled_before_rotation() {
        let mut ctx = DecimalContext::default();
        let frame =
            CoordinateFrame::new(&mut ctx, dec!(90), dec!(1), dec!(1), UnitSize::default())
                .unwrap();
        // Anchor lands at (19.05, -19.05); a local step along +x points up in the output.
        assert_eq!(
            frame.to_global(dec!(0), dec!(0)),
            Point2::new(dec!(19.05), dec!(-19.05))
        );
        assert_eq!(
            frame.to_global(dec!(1), dec!(0)),
            Point2::new(dec!(19.05), dec!(0))
        );
    }

    #[test]
    fn clockwise_layout_angle_turns_x_downwards() {
        let mut ctx = DecimalContext::default();
        // Layout r = 90 arrives as -90.
        let frame = CoordinateFrame::new(
            &mut ctx,
            dec!(-90),
            dec!(0),
            dec!(0),
            UnitSize::square(Decimal::ONE),
        )
        .unwrap();
        assert_eq!(
            frame.to_global(dec!(1), dec!(0)),
            Point2::new(dec!(0), dec!(-1))
        );
    }

    #[test]
    fn rotate_about_quarter_turn() {
        let p = Point2::new(dec!(2), dec!(1)).rotate_about(
            Point2::new(dec!(1), dec!(1)),
            dec!(0),
            dec!(1),
        );
        assert_eq!(p, Point2::new(dec!(1), dec!(2)));
    }
}
