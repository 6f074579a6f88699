//! Deterministic clockwise ordering of vertices around the sweep origin,
//! starting from due west, under screen convention (y increases downward).

use std::cell::RefCell;
use std::cmp::Ordering;

use crate::geom::{self, Orientation};
use crate::graph::VertexGraph;
use crate::ids::VertexId;
use crate::point::Point;

/// NW / NE / SE / SW, in sweep order starting due west.
fn quadrant(origin: Point, p: Point) -> u8 {
    let south = p.y > origin.y;
    match (south, p.x < origin.x) {
        (false, true) => 0,  // north, west
        (false, false) => 1, // north, east
        (true, false) => 2,  // south, east
        (true, true) => 3,   // south, west
    }
}

/// Sorts vertex ids clockwise around `origin`, registering collinear pairs
/// discovered along the way into each vertex's `collinear_vertices`.
pub fn sort_vertices(graph: &mut VertexGraph, origin: Point, ids: &[VertexId]) -> Vec<VertexId> {
    let mut sorted: Vec<VertexId> = ids.to_vec();
    let collinear_pairs: RefCell<Vec<(VertexId, VertexId)>> = RefCell::new(Vec::new());

    sorted.sort_by(|&a, &b| {
        if a == b {
            return Ordering::Equal;
        }
        let pa = graph.get(a).sort_point();
        let pb = graph.get(b).sort_point();

        let qa = quadrant(origin, pa);
        let qb = quadrant(origin, pb);
        if qa != qb {
            return qa.cmp(&qb);
        }

        match geom::orient2d(origin, pa, pb) {
            Orientation::Cw => Ordering::Less,
            Orientation::Ccw => Ordering::Greater,
            Orientation::Collinear => {
                collinear_pairs.borrow_mut().push((a, b));
                let da = geom::distance_squared(origin, pa);
                let db = geom::distance_squared(origin, pb);
                match da.partial_cmp(&db) {
                    Some(Ordering::Equal) | None => {
                        let ka = graph.get(a).key;
                        let kb = graph.get(b).key;
                        log::debug!(
                            "numeric tie while ordering collinear vertices {:?} and {:?}; breaking by key",
                            ka,
                            kb
                        );
                        ka.cmp(&kb)
                    }
                    Some(order) => order,
                }
            }
        }
    });

    for (a, b) in collinear_pairs.into_inner() {
        if !graph.get(a).collinear_vertices.contains(&b) {
            graph.get_mut(a).collinear_vertices.push(b);
        }
        if !graph.get(b).collinear_vertices.contains(&a) {
            graph.get_mut(b).collinear_vertices.push(a);
        }
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_buckets_clockwise_from_west() {
        let origin = Point::new(0., 0.);
        assert_eq!(quadrant(origin, Point::new(-1., -1.)), 0); // NW
        assert_eq!(quadrant(origin, Point::new(1., -1.)), 1); // NE
        assert_eq!(quadrant(origin, Point::new(1., 1.)), 2); // SE
        assert_eq!(quadrant(origin, Point::new(-1., 1.)), 3); // SW
    }

    #[test]
    fn test_sort_vertices_orders_clockwise() {
        let origin = Point::new(0., 0.);
        let mut graph = VertexGraph::new();
        let nw = graph.intern(Point::new(-1., -1.));
        let ne = graph.intern(Point::new(1., -1.));
        let se = graph.intern(Point::new(1., 1.));
        let sw = graph.intern(Point::new(-1., 1.));

        let ids = [se, sw, ne, nw];
        let sorted = sort_vertices(&mut graph, origin, &ids);
        assert_eq!(sorted, vec![nw, ne, se, sw]);
    }

    #[test]
    fn test_sort_vertices_records_collinear_pairs() {
        let origin = Point::new(0., 0.);
        let mut graph = VertexGraph::new();
        let near = graph.intern(Point::new(2., -2.));
        let far = graph.intern(Point::new(4., -4.));

        let ids = [far, near];
        let sorted = sort_vertices(&mut graph, origin, &ids);
        assert_eq!(sorted, vec![near, far]);
        assert!(graph.get(near).collinear_vertices.contains(&far));
        assert!(graph.get(far).collinear_vertices.contains(&near));
    }
}
