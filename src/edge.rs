//! Edge data and orientation normalization relative to a sweep origin.

use crate::error::{PolygonError, Result};
use crate::geom::{self, Orientation};
use crate::ids::{EdgeId, VertexId, WallId};
use crate::point::Point;
use crate::wall::Restriction;

/// Which side of a vertex an edge attaches to. An edge can straddle the
/// origin ray through an intersection vertex, in which case it attaches to
/// both sides (see DESIGN.md Design Notes on the "both ccw and cw" case).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Cw,
    Ccw,
    Both,
}

impl Side {
    pub fn touches_cw(self) -> bool {
        matches!(self, Self::Cw | Self::Both)
    }

    pub fn touches_ccw(self) -> bool {
        matches!(self, Self::Ccw | Self::Both)
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub wall: Option<WallId>,
    pub kind: Restriction,
    pub is_boundary: bool,
}

impl Edge {
    pub fn is_limited(&self) -> bool {
        self.kind.is_limited()
    }

    /// Swaps endpoints so that `b` is clockwise of `a` as seen from `origin`.
    /// Collinear endpoints are left untouched.
    pub fn normalize_orientation(
        &mut self,
        origin: Point,
        point_of: impl Fn(VertexId) -> Point,
    ) -> Result<()> {
        let pa = point_of(self.a);
        let pb = point_of(self.b);
        if pa.x == pb.x && pa.y == pb.y {
            return Err(PolygonError::DegenerateEdge(pa));
        }
        if geom::orient2d(origin, pa, pb) == Orientation::Ccw {
            std::mem::swap(&mut self.a, &mut self.b);
        }
        Ok(())
    }
}

/// Arena of edges, addressed by [`EdgeId`]: a flat `Vec` behind an opaque id,
/// so the rest of the engine never holds a borrow across a mutation.
#[derive(Debug, Default)]
pub struct EdgeArena {
    edges: Vec<Edge>,
}

impl EdgeArena {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn insert(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        id
    }

    pub fn get(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn get_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.0]
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }
}
