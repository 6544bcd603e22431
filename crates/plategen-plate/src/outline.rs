//! Axis-aligned cutout outlines with filleted convex corners.

use plategen_core::{DecimalContext, Point2};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::primitive::{Arc, Line, Primitive};

/// A closed, counter-clockwise, axis-aligned polygon in local mm (y up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    vertices: Vec<Point2>,
}

impl Outline {
    #[must_use]
    pub fn rectangle(left: Decimal, right: Decimal, bottom: Decimal, top: Decimal) -> Self {
        Self {
            vertices: vec![
                Point2::new(right, top),
                Point2::new(left, top),
                Point2::new(left, bottom),
                Point2::new(right, bottom),
            ],
        }
    }

    /// Centered rectangle of the given size.
    #[must_use]
    pub fn centered(width: Decimal, height: Decimal) -> Self {
        let hw = width / dec!(2);
        let hh = height / dec!(2);
        Self::rectangle(-hw, hw, -hh, hh)
    }

    /// Body from `shoulder` up to `top`, plus a narrower tab hanging below the body down to
    /// `notch_bottom`. The two corners where the tab meets the body are concave.
    #[must_use]
    pub fn notched(
        half_width: Decimal,
        shoulder: Decimal,
        top: Decimal,
        notch_half_width: Decimal,
        notch_bottom: Decimal,
    ) -> Self {
        Self {
            vertices: vec![
                Point2::new(half_width, top),
                Point2::new(-half_width, top),
                Point2::new(-half_width, shoulder),
                Point2::new(-notch_half_width, shoulder),
                Point2::new(-notch_half_width, notch_bottom),
                Point2::new(notch_half_width, notch_bottom),
                Point2::new(notch_half_width, shoulder),
                Point2::new(half_width, shoulder),
            ],
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    fn neighbours(&self, i: usize) -> (Point2, Point2, Point2) {
        let n = self.vertices.len();
        (
            self.vertices[(i + n - 1) % n],
            self.vertices[i],
            self.vertices[(i + 1) % n],
        )
    }

    /// Left turn while walking counter-clockwise.
    #[must_use]
    pub fn is_convex(&self, i: usize) -> bool {
        let (prev, v, next) = self.neighbours(i);
        let (ix, iy) = direction(prev, v);
        let (ox, oy) = direction(v, next);
        ix * oy - iy * ox > Decimal::ZERO
    }

    /// Largest fillet radius that still leaves every edge with a non-negative straight part.
    #[must_use]
    pub fn max_fillet(&self) -> Decimal {
        let n = self.vertices.len();
        (0..n)
            .filter_map(|i| {
                let j = (i + 1) % n;
                let a = self.vertices[i];
                let b = self.vertices[j];
                let length = (b.x - a.x).abs() + (b.y - a.y).abs();
                let corners = u32::from(self.is_convex(i)) + u32::from(self.is_convex(j));
                (corners > 0).then(|| length / Decimal::from(corners))
            })
            .min()
            .unwrap_or(Decimal::ZERO)
    }

    /// Straight edges first, then one quarter arc per convex corner (none when `radius` is zero).
    #[must_use]
    pub fn fillet(&self, radius: Decimal) -> Vec<Primitive> {
        let n = self.vertices.len();
        let convex: Vec<bool> = (0..n).map(|i| self.is_convex(i)).collect();
        let trim = |i: usize| if convex[i] { radius } else { Decimal::ZERO };

        let mut out = Vec::with_capacity(2 * n);
        for i in 0..n {
            let j = (i + 1) % n;
            let a = self.vertices[i];
            let b = self.vertices[j];
            let (dx, dy) = direction(a, b);
            let start = a.offset(dx * trim(i), dy * trim(i));
            let end = b.offset(-dx * trim(j), -dy * trim(j));
            if start != end {
                out.push(Primitive::Line(Line { start, end }));
            }
        }

        if radius.is_zero() {
            return out;
        }

        for (i, _) in convex.iter().enumerate().filter(|(_, c)| **c) {
            let (prev, v, next) = self.neighbours(i);
            let (ix, iy) = direction(prev, v);
            let (ox, oy) = direction(v, next);
            let center = v.offset((ox - ix) * radius, (oy - iy) * radius);
            let start_angle = heading(-ox, -oy);
            out.push(Primitive::Arc(Arc {
                center,
                radius,
                start_angle,
                end_angle: start_angle + dec!(90),
            }));
        }
        out
    }
}

/// Where an outline lands: shifted along the key's local x, then rotated about the key center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Point2,
    pub shift: Decimal,
    pub angle: Decimal,
    pub cos: Decimal,
    pub sin: Decimal,
}

impl Placement {
    #[must_use]
    pub fn point(&self, p: Point2, ctx: &DecimalContext) -> Point2 {
        let moved = Point2::new(self.origin.x + self.shift + p.x, self.origin.y + p.y);
        let rotated = moved.rotate_about(self.origin, self.cos, self.sin);
        Point2::new(ctx.round(rotated.x), ctx.round(rotated.y))
    }

    #[must_use]
    pub fn apply(&self, primitive: &Primitive, ctx: &DecimalContext) -> Primitive {
        match primitive {
            Primitive::Line(line) => Primitive::Line(Line {
                start: self.point(line.start, ctx),
                end: self.point(line.end, ctx),
            }),
            Primitive::Arc(arc) => {
                let start_angle = normalize_degrees(arc.start_angle + self.angle);
                Primitive::Arc(Arc {
                    center: self.point(arc.center, ctx),
                    radius: arc.radius,
                    start_angle,
                    end_angle: start_angle + (arc.end_angle - arc.start_angle),
                })
            }
        }
    }
}

/// Map into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: Decimal) -> Decimal {
    let r = angle % dec!(360);
    if r < Decimal::ZERO {
        r + dec!(360)
    } else {
        r
    }
}

fn sign(v: Decimal) -> Decimal {
    if v.is_zero() {
        Decimal::ZERO
    } else if v.is_sign_negative() {
        Decimal::NEGATIVE_ONE
    } else {
        Decimal::ONE
    }
}

fn direction(from: Point2, to: Point2) -> (Decimal, Decimal) {
    (sign(to.x - from.x), sign(to.y - from.y))
}

fn heading(dx: Decimal, dy: Decimal) -> Decimal {
    if dx > Decimal::ZERO {
        dec!(0)
    } else if dy > Decimal::ZERO {
        dec!(90)
    } else if dx < Decimal::ZERO {
        dec!(180)
    } else {
        dec!(270)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(prims: &[Primitive]) -> Vec<Line> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Line(l) => Some(*l),
                Primitive::Arc(_) => None,
            })
            .collect()
    }

    fn arcs(prims: &[Primitive]) -> Vec<Arc> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Arc(a) => Some(*a),
                Primitive::Line(_) => None,
            })
            .collect()
    }

    #[test]
    fn rounded_rectangle_corners() {
        let prims = Outline::centered(dec!(14), dec!(14)).fillet(dec!(0.5));
        let lines = lines(&prims);
        let arcs = arcs(&prims);
        assert_eq!(lines.len(), 4);
        assert_eq!(arcs.len(), 4);

        // Top edge stops short of both corners.
        assert_eq!(lines[0].start, Point2::new(dec!(6.5), dec!(7)));
        assert_eq!(lines[0].end, Point2::new(dec!(-6.5), dec!(7)));

        let tr = arcs[0];
        assert_eq!(tr.center, Point2::new(dec!(6.5), dec!(6.5)));
        assert_eq!((tr.start_angle, tr.end_angle), (dec!(0), dec!(90)));
        let tl = arcs[1];
        assert_eq!(tl.center, Point2::new(dec!(-6.5), dec!(6.5)));
        assert_eq!((tl.start_angle, tl.end_angle), (dec!(90), dec!(180)));
        let bl = arcs[2];
        assert_eq!((bl.start_angle, bl.end_angle), (dec!(180), dec!(270)));
        let br = arcs[3];
        assert_eq!(br.center, Point2::new(dec!(6.5), dec!(-6.5)));
        assert_eq!((br.start_angle, br.end_angle), (dec!(270), dec!(360)));
    }

    #[test]
    fn zero_radius_is_plain_polygon() {
        let prims = Outline::centered(dec!(2), dec!(4)).fillet(Decimal::ZERO);
        assert_eq!(prims.len(), 4);
        assert!(arcs(&prims).is_empty());
    }

    #[test]
    fn full_fillet_drops_degenerate_edges() {
        let prims = Outline::centered(dec!(2), dec!(14)).fillet(dec!(1));
        assert_eq!(lines(&prims).len(), 2);
        assert_eq!(arcs(&prims).len(), 4);
    }

    #[test]
    fn notch_keeps_inner_corners_sharp() {
        let outline = Outline::notched(dec!(3.325), dec!(-5.97), dec!(6.77), dec!(1.5), dec!(-7.97));
        let convex: Vec<bool> = (0..8).map(|i| outline.is_convex(i)).collect();
        assert_eq!(
            convex,
            [true, true, true, false, true, true, false, true]
        );
        let prims = outline.fillet(dec!(0.5));
        assert_eq!(lines(&prims).len(), 8);
        assert_eq!(arcs(&prims).len(), 6);
        assert_eq!(outline.max_fillet(), dec!(1.5));
    }

    #[test]
    fn max_fillet_of_rectangle_is_half_short_side() {
        assert_eq!(Outline::centered(dec!(15.5), dec!(12.8)).max_fillet(), dec!(6.4));
    }

    #[test]
    fn placement_rotates_about_origin() {
        let ctx = DecimalContext::default();
        let placement = Placement {
            origin: Point2::new(dec!(10), dec!(10)),
            shift: dec!(5),
            angle: dec!(90),
            cos: Decimal::ZERO,
            sin: Decimal::ONE,
        };
        assert_eq!(
            placement.point(Point2::new(Decimal::ZERO, Decimal::ZERO), &ctx),
            Point2::new(dec!(10), dec!(15))
        );
        let arc = Primitive::Arc(Arc {
            center: Point2::default(),
            radius: dec!(1),
            start_angle: dec!(270),
            end_angle: dec!(360),
        });
        let Primitive::Arc(moved) = placement.apply(&arc, &ctx) else {
            panic!("arc expected");
        };
        assert_eq!((moved.start_angle, moved.end_angle), (dec!(0), dec!(90)));
    }

    #[test]
    fn normalize_wraps_negative_angles() {
        assert_eq!(normalize_degrees(dec!(-90)), dec!(270));
        assert_eq!(normalize_degrees(dec!(450)), dec!(90));
        assert_eq!(normalize_degrees(dec!(15)), dec!(15));
    }
}
