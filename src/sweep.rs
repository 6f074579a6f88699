//! The radial sweep itself: given a populated vertex graph, walks vertices in
//! clockwise order around the origin, maintaining an active-edge set and
//! emitting polygon boundary points.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::edge::EdgeArena;
use crate::geom::{self, Orientation};
use crate::graph::{Vertex, VertexGraph};
use crate::ids::{EdgeId, VertexId};
use crate::ordering;
use crate::point::Point;

/// A ray cast from the origin toward a vertex during the sweep, retained
/// only when the caller asked for debug output.
#[derive(Debug, Clone, Copy)]
pub struct DebugRay {
    pub origin: Point,
    pub target: Point,
    pub is_behind: bool,
}

#[derive(Debug, Clone, Copy)]
struct CollisionResult {
    is_behind: bool,
    was_limited: bool,
}

/// Either a real vertex or a point where the current sweep ray crosses an
/// active edge away from any vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SweepPoint {
    Endpoint(VertexId),
    Internal(EdgeId, Point),
}

/// Runs the full sweep and returns the polygon's boundary points (open, not
/// closed) plus any retained debug rays.
pub fn run(
    graph: &mut VertexGraph,
    edges: &EdgeArena,
    origin: Point,
    max_radius2: f64,
    debug: bool,
) -> (Vec<Point>, Vec<DebugRay>) {
    let mut active = initial_active_edges(graph, edges, origin, max_radius2);

    let ids: Vec<VertexId> = graph.ids().collect();
    let sorted = ordering::sort_vertices(graph, origin, &ids);

    let mut visited = vec![false; graph.len()];
    let mut points = Vec::new();
    let mut rays = Vec::new();

    for &v in &sorted {
        if visited[v.as_usize()] {
            continue;
        }
        let group = transitive_collinear_group(graph, v);
        visited[v.as_usize()] = true;
        for &g in &group {
            visited[g.as_usize()] = true;
        }

        for &u in group.iter().chain(std::iter::once(&v)) {
            let vertex = graph.get(u).clone();
            update_active_edges(&mut active, &vertex);
        }

        if !group.is_empty() {
            let mut members = group.clone();
            members.push(v);
            crate::graph::suppress_collinear_blocking(graph, origin, &members);
        }

        let v_point = graph.get(v).sort_point();
        let result = is_vertex_behind_active_edges(v_point, v, &active, edges, graph);
        if debug {
            rays.push(DebugRay {
                origin,
                target: v_point,
                is_behind: result.is_behind,
            });
        }
        if result.is_behind {
            continue;
        }

        let vertex = graph.get(v);
        let has_collinear = !group.is_empty();

        if !vertex.has_ccw_edges() {
            points.extend(switch_edge(origin, v, &group, &active, edges, graph, max_radius2));
        } else if !has_collinear && vertex.is_limiting_cw && vertex.is_limiting_ccw && !result.was_limited {
            // A fully limited notch closes without contributing a boundary point.
        } else if !vertex.is_limiting_cw && !vertex.is_limiting_ccw && vertex.has_cw_edges() && vertex.has_ccw_edges() {
            points.push(v_point);
        } else {
            points.extend(switch_edge(origin, v, &group, &active, edges, graph, max_radius2));
        }
    }

    (points, rays)
}

fn initial_active_edges(graph: &VertexGraph, edges: &EdgeArena, origin: Point, max_radius2: f64) -> Vec<EdgeId> {
    let far_west = Point::new(origin.x - max_radius2.sqrt(), origin.y);
    let mut active = Vec::new();
    for (edge_id, edge) in edges.iter() {
        let pa = graph.get(edge.a).position;
        let pb = graph.get(edge.b).position;
        if geom::segments_intersect(origin, far_west, pa, pb) {
            active.push(edge_id);
        }
    }
    active.sort();
    active
}

fn transitive_collinear_group(graph: &VertexGraph, v: VertexId) -> Vec<VertexId> {
    let mut seen: FxHashSet<VertexId> = FxHashSet::default();
    let mut stack = vec![v];
    seen.insert(v);
    while let Some(cur) = stack.pop() {
        for &other in &graph.get(cur).collinear_vertices {
            if seen.insert(other) {
                stack.push(other);
            }
        }
    }
    seen.remove(&v);
    let mut group: Vec<VertexId> = seen.into_iter().collect();
    group.sort();
    group
}

fn update_active_edges(active: &mut Vec<EdgeId>, vertex: &Vertex) {
    for edge_id in vertex.ccw_edges() {
        if let Some(pos) = active.iter().position(|&e| e == edge_id) {
            active.remove(pos);
        }
    }
    for edge_id in vertex.cw_edges() {
        if !active.contains(&edge_id) {
            let pos = active.partition_point(|&e| e < edge_id);
            active.insert(pos, edge_id);
        }
    }
}

fn is_vertex_behind_active_edges(
    v_point: Point,
    v_id: VertexId,
    active: &[EdgeId],
    edges: &EdgeArena,
    graph: &VertexGraph,
) -> CollisionResult {
    let mut was_limited = false;
    for &edge_id in active {
        let edge = edges.get(edge_id);
        if edge.a == v_id || edge.b == v_id {
            continue;
        }
        let pa = graph.get(edge.a).position;
        let pb = graph.get(edge.b).position;
        if geom::orient2d(pa, pb, v_point) == Orientation::Ccw {
            if edge.is_limited() && !was_limited {
                was_limited = true;
                continue;
            }
            return CollisionResult { is_behind: true, was_limited };
        }
    }
    CollisionResult { is_behind: false, was_limited }
}

fn switch_edge(
    origin: Point,
    v: VertexId,
    group: &[VertexId],
    active: &[EdgeId],
    edges: &EdgeArena,
    graph: &VertexGraph,
    max_radius2: f64,
) -> Vec<Point> {
    let v_point = graph.get(v).sort_point();
    let far = geom::extend_ray(origin, v_point, max_radius2);

    let mut group_vertices: Vec<VertexId> = group.to_vec();
    group_vertices.push(v);

    let mut candidates: Vec<SweepPoint> = group_vertices.iter().map(|&id| SweepPoint::Endpoint(id)).collect();

    for &edge_id in active {
        let edge = edges.get(edge_id);
        if group_vertices.contains(&edge.a) || group_vertices.contains(&edge.b) {
            continue;
        }
        let pa = graph.get(edge.a).position;
        let pb = graph.get(edge.b).position;
        if let Some(hit) = geom::segment_segment_intersect(origin, far, pa, pb) {
            candidates.push(SweepPoint::Internal(edge_id, hit.point));
        }
    }

    let point_of = |sp: &SweepPoint| -> Point {
        match sp {
            SweepPoint::Endpoint(id) => graph.get(*id).sort_point(),
            SweepPoint::Internal(_, p) => *p,
        }
    };
    let sort_key = |sp: &SweepPoint| -> (u8, usize) {
        match sp {
            SweepPoint::Endpoint(id) => (0, id.as_usize()),
            SweepPoint::Internal(id, _) => (1, id.as_usize()),
        }
    };

    candidates.sort_by(|a, b| {
        let da = geom::distance_squared(origin, point_of(a));
        let db = geom::distance_squared(origin, point_of(b));
        da.partial_cmp(&db)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| sort_key(a).cmp(&sort_key(b)))
    });

    let mut blocked_cw = false;
    let mut blocked_ccw = false;
    let mut limited_cw = false;
    let mut limited_ccw = false;
    let mut collisions: VecDeque<SweepPoint> = VecDeque::new();

    for x in candidates {
        let prev_cw = blocked_cw;
        let prev_ccw = blocked_ccw;

        match x {
            SweepPoint::Internal(edge_id, _) => {
                let limited = edges.get(edge_id).is_limited();
                if !blocked_cw && !blocked_ccw && !limited {
                    return collisions.into_iter().map(|sp| point_of(&sp)).collect();
                }
                blocked_cw |= !limited || limited_cw;
                blocked_ccw |= !limited || limited_ccw;
                limited_cw = true;
                limited_ccw = true;
            }
            SweepPoint::Endpoint(id) => {
                let vertex = graph.get(id);
                blocked_cw |= (limited_cw && vertex.is_limiting_cw) || vertex.is_blocking_cw;
                blocked_ccw |= (limited_ccw && vertex.is_limiting_ccw) || vertex.is_blocking_ccw;
                limited_cw |= vertex.is_limiting_cw;
                limited_ccw |= vertex.is_limiting_ccw;
            }
        }

        if blocked_cw && !prev_cw {
            collisions.push_front(x);
        }
        if blocked_ccw && !prev_ccw {
            collisions.push_back(x);
        }
        if blocked_cw && blocked_ccw {
            break;
        }
    }

    collisions.into_iter().map(|sp| point_of(&sp)).collect()
}
