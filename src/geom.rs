//! 2D geometric primitives: orientation predicate, segment/line intersection,
//! squared distance. Everything the rest of the crate needs to reason about
//! clockwise/counter-clockwise and collinearity lives here so the sign
//! convention is defined exactly once.

use crate::point::Point;

/// Scale used to fold two coordinates into a single hashable key.
///
/// Must exceed the largest coordinate magnitude the scene can produce,
/// including after rotation/translation, or two genuinely distinct rounded
/// x values could collide with a rounded y value from another point.
pub const ROUND_SCALE: i64 = 1_000_000;

/// Rounds a point to the integer grid used for vertex folding. Two points
/// with the same key are treated as the same vertex.
pub fn point_key(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    /// b lies clockwise of a, as seen from p (screen convention: y grows downward)
    Cw,
    /// b lies counter-clockwise of a, as seen from p
    Ccw,
    Collinear,
}

impl Orientation {
    pub fn is_cw(self) -> bool {
        matches!(self, Self::Cw)
    }

    pub fn is_ccw(self) -> bool {
        matches!(self, Self::Ccw)
    }

    pub fn is_collinear(self) -> bool {
        matches!(self, Self::Collinear)
    }
}

/// Sign of the twice-signed-area of triangle `p`, `a`, `b`.
///
/// Positive area (by the usual math convention) means `b` is counter-clockwise
/// of `a` around `p`; because this crate uses screen coordinates (y grows
/// downward), that corresponds to [`Orientation::Ccw`].
pub fn orient2d(p: Point, a: Point, b: Point) -> Orientation {
    let det_left = (a.x - p.x) * (b.y - p.y);
    let det_right = (a.y - p.y) * (b.x - p.x);
    let val = det_left - det_right;

    if val == 0. {
        Orientation::Collinear
    } else if val > 0. {
        Orientation::Ccw
    } else {
        Orientation::Cw
    }
}

pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Intersection of two segments, parameterized along the first segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentIntersection {
    pub point: Point,
    /// distance along `p1 -> p2`, normalized to `[0, 1]`
    pub t0: f64,
    /// distance along `q1 -> q2`, normalized to `[0, 1]`
    pub t1: f64,
}

/// Intersection of the infinite lines through `(p1, p2)` and `(q1, q2)`.
/// Returns `None` when the lines are parallel (including coincident).
pub fn line_line_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> Option<Point> {
    let denom = (p1.x - p2.x) * (q1.y - q2.y) - (p1.y - p2.y) * (q1.x - q2.x);
    if denom == 0. {
        return None;
    }

    let a = p1.x * p2.y - p1.y * p2.x;
    let b = q1.x * q2.y - q1.y * q2.x;

    let x = (a * (q1.x - q2.x) - (p1.x - p2.x) * b) / denom;
    let y = (a * (q1.y - q2.y) - (p1.y - p2.y) * b) / denom;
    Some(Point::new(x, y))
}

/// Intersection of the two segments, closed on endpoints.
pub fn segment_segment_intersect(
    p1: Point,
    p2: Point,
    q1: Point,
    q2: Point,
) -> Option<SegmentIntersection> {
    let denom = (p2.x - p1.x) * (q2.y - q1.y) - (p2.y - p1.y) * (q2.x - q1.x);
    if denom == 0. {
        // parallel (or one/both segments degenerate)
        return None;
    }

    let t0 = ((q1.x - p1.x) * (q2.y - q1.y) - (q1.y - p1.y) * (q2.x - q1.x)) / denom;
    let t1 = ((q1.x - p1.x) * (p2.y - p1.y) - (q1.y - p1.y) * (p2.x - p1.x)) / denom;

    if !(0. ..=1.).contains(&t0) || !(0. ..=1.).contains(&t1) {
        return None;
    }

    let point = Point::new(p1.x + t0 * (p2.x - p1.x), p1.y + t0 * (p2.y - p1.y));
    Some(SegmentIntersection { point, t0, t1 })
}

pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    segment_segment_intersect(p1, p2, q1, q2).is_some()
}

/// Extends the ray `origin -> through` until its length squared is at least
/// `min_length2`, returning the far endpoint.
pub fn extend_ray(origin: Point, through: Point, min_length2: f64) -> Point {
    let dx = through.x - origin.x;
    let dy = through.y - origin.y;
    let len2 = dx * dx + dy * dy;
    if len2 >= min_length2 || len2 == 0. {
        return through;
    }
    let scale = (min_length2 / len2).sqrt();
    Point::new(origin.x + dx * scale, origin.y + dy * scale)
}
