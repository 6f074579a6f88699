//! The vertex graph: interns coincident edge endpoints into a single vertex,
//! attaches edges to their cw/ccw adjacency, and materializes wall-wall
//! intersection vertices.

use rustc_hash::FxHashMap;

use crate::edge::{Edge, EdgeArena, Side};
use crate::error::Result;
use crate::geom::{self, Orientation};
use crate::ids::{EdgeId, VertexId, WallId};
use crate::point::Point;
use crate::wall::{BoundsSource, Restriction, Sense, WallSource};

/// A node of the vertex graph. Adjacency is a single list tagged by [`Side`]
/// rather than two separate cw/ccw `Vec`s (see DESIGN.md): an edge attached
/// with `Side::Both` counts toward both sides at once, which is exactly the
/// case the active-edge-set update in [`crate::sweep`] has to special-case.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub position: Point,
    pub key: (i32, i32),
    pub edges: Vec<(EdgeId, Side)>,
    pub collinear_vertices: Vec<VertexId>,
    pub intersection_coordinates: Option<Point>,
    pub is_limited: bool,
    pub is_limiting_cw: bool,
    pub is_limiting_ccw: bool,
    pub is_blocking_cw: bool,
    pub is_blocking_ccw: bool,
    d2: Option<f64>,
}

impl Vertex {
    fn new(position: Point) -> Self {
        Self {
            position,
            key: geom::point_key(position),
            edges: Vec::new(),
            collinear_vertices: Vec::new(),
            intersection_coordinates: None,
            is_limited: false,
            is_limiting_cw: false,
            is_limiting_ccw: false,
            is_blocking_cw: false,
            is_blocking_ccw: false,
            d2: None,
        }
    }

    pub fn sort_point(&self) -> Point {
        self.intersection_coordinates.unwrap_or(self.position)
    }

    pub fn cw_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .filter(|(_, side)| side.touches_cw())
            .map(|(id, _)| *id)
    }

    pub fn ccw_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .filter(|(_, side)| side.touches_ccw())
            .map(|(id, _)| *id)
    }

    pub fn has_ccw_edges(&self) -> bool {
        self.edges.iter().any(|(_, side)| side.touches_ccw())
    }

    pub fn has_cw_edges(&self) -> bool {
        self.edges.iter().any(|(_, side)| side.touches_cw())
    }

    /// Squared distance from `origin`, memoized on first use.
    pub fn distance2_from(&mut self, origin: Point) -> f64 {
        *self
            .d2
            .get_or_insert_with(|| geom::distance_squared(origin, self.sort_point()))
    }

    fn recompute_derived(&mut self, edges: &EdgeArena) {
        let mut any = false;
        let mut all_limited = true;
        let mut cw_any = false;
        let mut cw_all_limited = true;
        let mut ccw_any = false;
        let mut ccw_all_limited = true;

        for (edge_id, side) in &self.edges {
            let limited = edges.get(*edge_id).is_limited();
            any = true;
            all_limited &= limited;

            if side.touches_cw() {
                cw_any = true;
                cw_all_limited &= limited;
            }
            if side.touches_ccw() {
                ccw_any = true;
                ccw_all_limited &= limited;
            }
        }

        self.is_limited = any && all_limited;
        self.is_limiting_cw = cw_any && cw_all_limited;
        self.is_limiting_ccw = ccw_any && ccw_all_limited;
        self.is_blocking_cw = self
            .edges
            .iter()
            .any(|(id, side)| side.touches_cw() && !edges.get(*id).is_limited());
        self.is_blocking_ccw = self
            .edges
            .iter()
            .any(|(id, side)| side.touches_ccw() && !edges.get(*id).is_limited());
    }
}

#[derive(Debug, Default)]
pub struct VertexGraph {
    vertices: Vec<Vertex>,
    by_key: FxHashMap<(i32, i32), VertexId>,
}

impl VertexGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.as_usize()]
    }

    pub fn get_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.as_usize()]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter().enumerate().map(|(i, v)| (VertexId(i), v))
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Interns a point by its rounded key, creating a new vertex if this is
    /// the first time this key has been seen.
    pub fn intern(&mut self, point: Point) -> VertexId {
        let key = geom::point_key(point);
        if let Some(id) = self.by_key.get(&key) {
            return *id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(point));
        self.by_key.insert(key, id);
        id
    }

    fn attach(&mut self, vertex: VertexId, edge: EdgeId, side: Side) {
        let v = self.get_mut(vertex);
        match v.edges.iter_mut().find(|(id, _)| *id == edge) {
            Some((_, existing)) => {
                if *existing != side {
                    *existing = Side::Both;
                }
            }
            None => v.edges.push((edge, side)),
        }
    }

    pub fn recompute_all_derived(&mut self, edges: &EdgeArena) {
        for v in &mut self.vertices {
            v.recompute_derived(edges);
        }
    }
}

/// Corrects `is_blocking_cw`/`is_blocking_ccw` for vertices that belong to a
/// collinear group (see [`crate::ordering::sort_vertices`]): within a group,
/// only the farthest CW-blocking member and the nearest CCW-blocking member
/// can actually flip `switch_edge`'s active state — an interior endpoint
/// (one superseded on that side by another member of the same group) would
/// otherwise stop the sweep at a spurious point instead of the group's true
/// outermost termination (see DESIGN.md). `members` must include every
/// vertex of the group plus the vertex currently being visited. Must run
/// after the group's transitive closure is known, i.e. after sorting.
pub fn suppress_collinear_blocking(graph: &mut VertexGraph, origin: Point, members: &[VertexId]) {
    if members.len() < 2 {
        return;
    }

    let snapshot: Vec<(VertexId, f64, bool, bool)> = members
        .iter()
        .map(|&id| {
            let d2 = graph.get_mut(id).distance2_from(origin);
            let v = graph.get(id);
            (id, d2, v.is_blocking_cw, v.is_blocking_ccw)
        })
        .collect();

    for &(id, d2, blocking_cw, blocking_ccw) in &snapshot {
        if blocking_cw {
            let superseded = snapshot
                .iter()
                .any(|&(other, other_d2, other_cw, _)| other != id && other_d2 > d2 && other_cw);
            if superseded {
                graph.get_mut(id).is_blocking_cw = false;
            }
        }
        if blocking_ccw {
            let superseded = snapshot
                .iter()
                .any(|&(other, other_d2, _, other_ccw)| other != id && other_d2 < d2 && other_ccw);
            if superseded {
                graph.get_mut(id).is_blocking_ccw = false;
            }
        }
    }
}

/// A raw candidate edge before its endpoints have been interned into the
/// vertex graph.
pub struct RawEdge {
    pub a: Point,
    pub b: Point,
    pub wall: Option<WallId>,
    pub kind: Restriction,
    pub is_boundary: bool,
}

/// Collects candidate edges: walls filtered by sense relevance, plus one
/// ring of canvas-boundary edges (inner or outer, per `use_inner_bounds`).
pub fn identify_edges(
    walls: &dyn WallSource,
    bounds: &dyn BoundsSource,
    sense: Sense,
    use_inner_bounds: bool,
) -> Vec<RawEdge> {
    let mut raw = Vec::new();

    for (index, wall) in walls.walls().iter().enumerate() {
        let restriction = wall.restriction_for(sense);
        if restriction.is_excluded() {
            continue;
        }
        raw.push(RawEdge {
            a: wall.a,
            b: wall.b,
            wall: Some(walls.wall_id(index)),
            kind: restriction,
            is_boundary: false,
        });
    }

    let (min, max) = if use_inner_bounds {
        bounds.inner()
    } else {
        bounds.outer()
    };
    let corners = [
        Point::new(min.x, min.y),
        Point::new(max.x, min.y),
        Point::new(max.x, max.y),
        Point::new(min.x, max.y),
    ];
    for i in 0..4 {
        raw.push(RawEdge {
            a: corners[i],
            b: corners[(i + 1) % 4],
            wall: None,
            kind: Restriction::Normal,
            is_boundary: true,
        });
    }

    raw
}

/// Interns edge endpoints into the vertex graph, normalizes each edge's
/// orientation relative to `origin`, and attaches it to both endpoints'
/// adjacency lists.
pub fn identify_vertices(
    raw_edges: Vec<RawEdge>,
    origin: Point,
    graph: &mut VertexGraph,
    edges: &mut EdgeArena,
) -> Result<()> {
    for raw in raw_edges {
        let a = graph.intern(raw.a);
        let b = graph.intern(raw.b);
        let mut edge = Edge {
            a,
            b,
            wall: raw.wall,
            kind: raw.kind,
            is_boundary: raw.is_boundary,
        };
        edge.normalize_orientation(origin, |id| graph.get(id).position)?;
        let (a, b) = (edge.a, edge.b);
        let edge_id = edges.insert(edge);
        graph.attach(a, edge_id, Side::Ccw);
        graph.attach(b, edge_id, Side::Cw);
    }
    Ok(())
}

/// For each wall-wall crossing recorded on a participating wall, materializes
/// an intersection vertex and attaches both crossing edges to it with the
/// correct side classification.
pub fn identify_intersections(
    origin: Point,
    walls: &dyn WallSource,
    graph: &mut VertexGraph,
    edges: &mut EdgeArena,
) {
    let mut processed: std::collections::HashSet<(usize, usize)> = std::collections::HashSet::new();

    // Map from WallId -> the EdgeIds backed by that wall (a wall may back
    // more than one edge only in degenerate inputs; in practice exactly one).
    let mut edges_by_wall: FxHashMap<usize, Vec<EdgeId>> = FxHashMap::default();
    for (edge_id, edge) in edges.iter() {
        if let Some(wall_id) = edge.wall {
            edges_by_wall.entry(wall_id.as_usize()).or_default().push(edge_id);
        }
    }

    for (wall_index, wall) in walls.walls().iter().enumerate() {
        for (&other_wall_id, &point) in &wall.intersects_with {
            let other_index = other_wall_id.as_usize();
            let pair = if wall_index < other_index {
                (wall_index, other_index)
            } else {
                (other_index, wall_index)
            };
            if !processed.insert(pair) {
                continue;
            }

            let Some(edge_ids_a) = edges_by_wall.get(&wall_index) else {
                continue;
            };
            let Some(edge_ids_b) = edges_by_wall.get(&other_index) else {
                continue;
            };

            let v = graph.intern(point);
            graph.get_mut(v).intersection_coordinates = Some(point);

            for &edge_id in edge_ids_a.iter().chain(edge_ids_b.iter()) {
                attach_intersection(origin, v, edge_id, graph, edges);
            }
        }
    }
}

fn attach_intersection(
    origin: Point,
    v: VertexId,
    edge_id: EdgeId,
    graph: &mut VertexGraph,
    edges: &EdgeArena,
) {
    let edge = edges.get(edge_id);
    let pa = graph.get(edge.a).position;
    let pb = graph.get(edge.b).position;
    let pv = graph.get(v).sort_point();

    let side_b = geom::orient2d(origin, pb, pv);
    let side = if side_b == Orientation::Cw {
        Side::Cw
    } else {
        let side_a = geom::orient2d(origin, pa, pv);
        if side_a == Orientation::Ccw {
            Side::Ccw
        } else {
            Side::Both
        }
    };

    graph.attach(v, edge_id, side);
}
