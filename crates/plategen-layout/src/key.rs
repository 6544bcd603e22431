use plategen_core::{CoordinateFrame, Point2};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySize {
    pub width: Decimal,
    pub height: Decimal,
    /// Secondary rectangle of stepped and ISO keys.
    pub width2: Decimal,
    pub height2: Decimal,
}

impl Default for KeySize {
    fn default() -> Self {
        Self {
            width: Decimal::ONE,
            height: Decimal::ONE,
            width2: Decimal::ONE,
            height2: Decimal::ONE,
        }
    }
}

/// A positioned key. Global geometry is computed once in [`Key::new`] and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    local_x: Decimal,
    local_y: Decimal,
    size: KeySize,
    frame: CoordinateFrame,
    cutout_angle_offset: Decimal,
    stab_angle_offset: Decimal,
    label: String,
    center: Point2,
    corners: [Point2; 4],
}

impl Key {
    pub fn new(
        frame: CoordinateFrame,
        local_x: Decimal,
        local_y: Decimal,
        size: KeySize,
        cutout_angle_offset: Decimal,
        stab_angle_offset: Decimal,
        label: impl Into<String>,
    ) -> Self {
        let right = local_x + size.width;
        let bottom = local_y + size.height;
        let corners = [
            frame.to_global(local_x, local_y),
            frame.to_global(right, local_y),
            frame.to_global(right, bottom),
            frame.to_global(local_x, bottom),
        ];
        let half = Decimal::new(5, 1);
        let center = frame.to_global(local_x + size.width * half, local_y + size.height * half);

        Self {
            local_x,
            local_y,
            size,
            frame,
            cutout_angle_offset,
            stab_angle_offset,
            label: label.into(),
            center,
            corners,
        }
    }

    #[must_use]
    pub fn local_position(&self) -> (Decimal, Decimal) {
        (self.local_x, self.local_y)
    }

    #[must_use]
    pub fn size(&self) -> KeySize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> Decimal {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> Decimal {
        self.size.height
    }

    /// The larger of width and height; tall keys pick stabilizer spacing like wide ones.
    #[must_use]
    pub fn apparent_width(&self) -> Decimal {
        self.size.width.max(self.size.height)
    }

    #[must_use]
    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    #[must_use]
    pub fn cutout_angle_offset(&self) -> Decimal {
        self.cutout_angle_offset
    }

    #[must_use]
    pub fn stab_angle_offset(&self) -> Decimal {
        self.stab_angle_offset
    }

    /// Absolute switch-cutout rotation in degrees (frame angle plus offset).
    #[must_use]
    pub fn cutout_angle(&self) -> Decimal {
        self.frame.angle() + self.cutout_angle_offset
    }

    /// Absolute stabilizer rotation in degrees (frame angle plus offset).
    #[must_use]
    pub fn stab_angle(&self) -> Decimal {
        self.frame.angle() + self.stab_angle_offset
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label reduced to ASCII alphanumerics and underscores.
    #[must_use]
    pub fn name(&self) -> String {
        self.label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect()
    }

    #[must_use]
    pub fn top_left(&self) -> Point2 {
        self.corners[0]
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Top-left, top-right, bottom-right, bottom-left in the key's own frame.
    #[must_use]
    pub fn corners(&self) -> &[Point2; 4] {
        &self.corners
    }
}

/// Axis-aligned extent in global millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: Decimal,
    pub max_x: Decimal,
    pub min_y: Decimal,
    pub max_y: Decimal,
}

impl BoundingBox {
    #[must_use]
    pub fn from_point(p: Point2) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    #[must_use]
    pub fn include(self, p: Point2) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            max_x: self.max_x.max(p.x),
            min_y: self.min_y.min(p.y),
            max_y: self.max_y.max(p.y),
        }
    }

    #[must_use]
    pub fn width(&self) -> Decimal {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> Decimal {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plategen_core::UnitSize;
    use rust_decimal_macros::dec;

    #[test]
    fn geometry_is_derived_from_the_frame() {
        let frame = CoordinateFrame::origin(UnitSize::default());
        let key = Key::new(
            frame,
            dec!(1),
            dec!(0),
            KeySize {
                width: dec!(2),
                ..KeySize::default()
            },
            Decimal::ZERO,
            Decimal::ZERO,
            "Shift",
        );
        assert_eq!(key.top_left(), Point2::new(dec!(19.05), dec!(0)));
        assert_eq!(key.center(), Point2::new(dec!(38.1), dec!(-9.525)));
        assert_eq!(key.corners()[2], Point2::new(dec!(57.15), dec!(-19.05)));
        assert_eq!(key.apparent_width(), dec!(2));
    }

    #[test]
    fn name_strips_non_identifier_characters() {
        let frame = CoordinateFrame::origin(UnitSize::default());
        let key = Key::new(
            frame,
            dec!(0),
            dec!(0),
            KeySize::default(),
            Decimal::ZERO,
            Decimal::ZERO,
            "7\nHome",
        );
        assert_eq!(key.name(), "7Home");
        assert_eq!(key.label(), "7\nHome");
    }

    #[test]
    fn bounding_box_folds_points() {
        let b = BoundingBox::from_point(Point2::new(dec!(1), dec!(1)))
            .include(Point2::new(dec!(-2), dec!(4)))
            .include(Point2::new(dec!(3), dec!(0)));
        assert_eq!(b.min_x, dec!(-2));
        assert_eq!(b.max_x, dec!(3));
        assert_eq!(b.width(), dec!(5));
        assert_eq!(b.height(), dec!(4));
    }
}
