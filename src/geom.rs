//! Geometry predicates: signed area, vertex order, proper intersection,
//! line-line intersection, directed angle, and point-in-triangle.
//!
//! All predicates operate directly on the input coordinate bits (no
//! epsilon fudging) so that the pipeline is bit-for-bit deterministic.
//! The coordinate convention is y-down: positive signed area means
//! clockwise.

use crate::error::{InvalidGeometryKind, TriangulationError};
use core::f64::consts::PI;

/// Alias for `euclid::default::Point2D<f64>`. Equality is bit-exact on both
/// components; ordering (where needed) is the lexicographic order on
/// `(x, y)`, computed by [`lex_less`] rather than a derived `Ord` impl,
/// since `f64` has no total order in general.
pub type Point = euclid::default::Point2D<f64>;

/// Shorthand for `Point::new(x, y)`, matching this crate's sibling crates.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Lexicographic order on `(x, y)`: smallest `x` first, ties broken by `y`.
#[inline]
pub fn lex_less(a: Point, b: Point) -> bool {
    (a.x, a.y) < (b.x, b.y)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexOrder {
    Clockwise,
    CounterClockwise,
    NoArea,
}

impl VertexOrder {
    #[inline]
    pub fn negate(self) -> VertexOrder {
        match self {
            VertexOrder::Clockwise => VertexOrder::CounterClockwise,
            VertexOrder::CounterClockwise => VertexOrder::Clockwise,
            VertexOrder::NoArea => VertexOrder::NoArea,
        }
    }
}

/// An ordered triple of points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Triangle { a, b, c }
    }
}

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive in a y-down coordinate system means `a, b, c` wind clockwise;
/// negative means counter-clockwise; zero means collinear.
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (c.y - b.y) * (a.x - c.x) - (c.x - b.x) * (a.y - c.y)
}

/// Classifies the winding of a triangle under the y-down convention.
pub fn vertex_order(t: Triangle) -> VertexOrder {
    let area = signed_area(t.a, t.b, t.c);
    if area > 0.0 {
        VertexOrder::Clockwise
    } else if area < 0.0 {
        VertexOrder::CounterClockwise
    } else {
        VertexOrder::NoArea
    }
}

/// Classifies the winding of an entire ring by inspecting its topmost
/// (maximum-`y`) vertex, which is always convex for a simple polygon.
///
/// Requires at least three points.
pub fn ring_vertex_order(ring: &[Point]) -> core::result::Result<VertexOrder, TriangulationError> {
    if ring.len() < 3 {
        return Err(InvalidGeometryKind::DegenerateRing.into());
    }

    let n = ring.len();
    let mut top = 0;
    for i in 1..n {
        if ring[i].y > ring[top].y {
            top = i;
        }
    }

    let prev = ring[(top + n - 1) % n];
    let next = ring[(top + 1) % n];
    Ok(vertex_order(Triangle::new(prev, ring[top], next)))
}

/// True iff segment `ab` properly crosses segment `cd`: a strict interior
/// intersection, excluding endpoint touches and collinear overlaps.
pub fn proper_intersects(a: Point, b: Point, c: Point, d: Point) -> bool {
    signed_area(a, b, c) * signed_area(a, b, d) < 0.0
        && signed_area(c, d, a) * signed_area(c, d, b) < 0.0
}

/// The line-line crossing point of lines `ab` and `cd`, computed via the
/// two-line normal-form determinant. Only meaningful (and only ever called
/// in this pipeline) when `proper_intersects(a, b, c, d)` already held.
pub fn intersection(a: Point, b: Point, c: Point, d: Point) -> Result<Point, TriangulationError> {
    let a1 = b.y - a.y;
    let b1 = a.x - b.x;
    let c1 = a1 * a.x + b1 * a.y;

    let a2 = d.y - c.y;
    let b2 = c.x - d.x;
    let c2 = a2 * c.x + b2 * c.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return Err(InvalidGeometryKind::ParallelLines.into());
    }

    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Ok(point(x, y))
}

/// The directed angle from ray `b->a` to ray `b->c`, normalized into
/// `[0, 2*PI)`. Used to sort the edges around a vertex into planar
/// rotational order.
pub fn angle_rad(a: Point, b: Point, c: Point) -> f64 {
    let angle = f64::atan2(a.y - b.y, a.x - b.x) - f64::atan2(c.y - b.y, c.x - b.x);
    normalize_angle(angle)
}

#[inline]
fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let wrapped = angle % two_pi;
    if wrapped < 0.0 {
        wrapped + two_pi
    } else {
        wrapped
    }
}

/// True iff `p` lies strictly inside, or on an edge of, triangle `t`,
/// using the same-side-of-all-edges test. Always false if `p` coincides
/// with one of `t`'s vertices.
pub fn point_strictly_in_triangle(t: Triangle, p: Point) -> bool {
    if p == t.a || p == t.b || p == t.c {
        return false;
    }

    let d1 = signed_area(p, t.a, t.b);
    let d2 = signed_area(p, t.b, t.c);
    let d3 = signed_area(p, t.c, t.a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}
