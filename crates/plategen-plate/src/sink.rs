use plategen_layout::BoundingBox;

use crate::primitive::{Arc, Line, Primitive};

/// Receiver of rendered geometry, in emission order.
pub trait Sink {
    fn line(&mut self, line: Line);

    fn arc(&mut self, arc: Arc);

    /// Overall extent of the layout, delivered once after every cutout.
    fn bounds(&mut self, bounds: BoundingBox);

    fn primitive(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::Line(line) => self.line(line),
            Primitive::Arc(arc) => self.arc(arc),
        }
    }
}

/// Rendered plate held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plate {
    pub primitives: Vec<Primitive>,
    pub bounds: Option<BoundingBox>,
}

impl Plate {
    /// Hand everything to `sink` in the order it was rendered.
    pub fn replay<S: Sink + ?Sized>(&self, sink: &mut S) {
        for primitive in &self.primitives {
            sink.primitive(*primitive);
        }
        if let Some(bounds) = self.bounds {
            sink.bounds(bounds);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            Primitive::Arc(_) => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Arc(arc) => Some(arc),
            Primitive::Line(_) => None,
        })
    }
}

impl Sink for Plate {
    fn line(&mut self, line: Line) {
        self.primitives.push(Primitive::Line(line));
    }

    fn arc(&mut self, arc: Arc) {
        self.primitives.push(Primitive::Arc(arc));
    }

    fn bounds(&mut self, bounds: BoundingBox) {
        self.bounds = Some(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plategen_core::Point2;
    use rust_decimal_macros::dec;

    #[test]
    fn replay_preserves_order_and_bounds() {
        let mut plate = Plate::default();
        plate.line(Line {
            start: Point2::new(dec!(0), dec!(0)),
            end: Point2::new(dec!(1), dec!(0)),
        });
        plate.arc(Arc {
            center: Point2::new(dec!(1), dec!(1)),
            radius: dec!(1),
            start_angle: dec!(270),
            end_angle: dec!(360),
        });
        plate.bounds(BoundingBox::from_point(Point2::new(dec!(2), dec!(2))));

        let mut copy = Plate::default();
        plate.replay(&mut copy);
        assert_eq!(copy, plate);
        assert_eq!(copy.lines().count(), 1);
        assert_eq!(copy.arcs().count(), 1);
    }
}
