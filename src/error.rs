use crate::point::Point;

/// Failures that abort a `compute()` invocation before a polygon is produced.
///
/// An empty environment is not an error: it resolves to `Ok` with an empty
/// polygon. A numeric tie during sort ordering is resolved deterministically
/// and only logged (see [`crate::ordering`]).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PolygonError {
    #[error("edge endpoints coincide at {0:?}")]
    DegenerateEdge(Point),
    #[error("coordinate is not finite: {0:?}")]
    NonFiniteCoordinate(Point),
    #[error("origin {0:?} lies exactly on a wall endpoint")]
    OriginOnVertex(Point),
}

pub type Result<T> = std::result::Result<T, PolygonError>;
