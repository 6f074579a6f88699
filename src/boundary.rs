//! Post-sweep clipping of the swept polygon against one or more boundary
//! shapes, via a Sutherland-Hodgman convex clip.

use crate::geom::{self, Orientation};
use crate::point::Point;

/// A single post-sweep clip region. `Polygon` must be convex; this is a
/// documented limitation (see DESIGN.md) rather than something this crate
/// validates at runtime.
#[derive(Debug, Clone)]
pub enum BoundaryShape {
    Circle { center: Point, radius: f64, segments: u32 },
    Rectangle { min: Point, max: Point },
    Polygon(Vec<Point>),
}

impl BoundaryShape {
    fn materialize(&self) -> Vec<Point> {
        match self {
            BoundaryShape::Circle { center, radius, segments } => {
                let segments = (*segments).max(3);
                (0..segments)
                    .map(|i| {
                        let theta = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
                        Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
                    })
                    .collect()
            }
            BoundaryShape::Rectangle { min, max } => {
                vec![
                    Point::new(min.x, min.y),
                    Point::new(max.x, min.y),
                    Point::new(max.x, max.y),
                    Point::new(min.x, max.y),
                ]
            }
            BoundaryShape::Polygon(points) => points.clone(),
        }
    }
}

/// Clips `subject` sequentially against each shape in `shapes`, in list
/// order. An empty shape list is a no-op.
pub fn clip_sequence(subject: Vec<Point>, shapes: &[BoundaryShape]) -> Vec<Point> {
    let mut current = subject;
    for shape in shapes {
        if current.is_empty() {
            break;
        }
        current = clip_convex(&current, &shape.materialize());
    }
    current
}

/// Sutherland-Hodgman clip of `subject` (any simple polygon) against the
/// convex polygon `clip`, assumed clockwise under screen convention.
fn clip_convex(subject: &[Point], clip: &[Point]) -> Vec<Point> {
    if clip.len() < 3 {
        return subject.to_vec();
    }

    let mut output = subject.to_vec();
    for i in 0..clip.len() {
        if output.is_empty() {
            break;
        }
        let edge_a = clip[i];
        let edge_b = clip[(i + 1) % clip.len()];
        output = clip_against_edge(&output, edge_a, edge_b);
    }
    output
}

/// A point is inside the clip half-plane when it is not clockwise of
/// `edge_a -> edge_b` (clip shapes are materialized in clockwise winding, so
/// their interior sits counter-clockwise of every edge under this
/// predicate's convention).
fn inside(p: Point, edge_a: Point, edge_b: Point) -> bool {
    !matches!(geom::orient2d(edge_a, edge_b, p), Orientation::Cw)
}

fn clip_against_edge(points: &[Point], edge_a: Point, edge_b: Point) -> Vec<Point> {
    let mut output = Vec::with_capacity(points.len());
    let len = points.len();
    for i in 0..len {
        let current = points[i];
        let prev = points[(i + len - 1) % len];
        let current_in = inside(current, edge_a, edge_b);
        let prev_in = inside(prev, edge_a, edge_b);

        if current_in {
            if !prev_in {
                if let Some(hit) = geom::line_line_intersect(prev, current, edge_a, edge_b) {
                    output.push(hit);
                }
            }
            output.push(current);
        } else if prev_in {
            if let Some(hit) = geom::line_line_intersect(prev, current, edge_a, edge_b) {
                output.push(hit);
            }
        }
    }
    output
}
