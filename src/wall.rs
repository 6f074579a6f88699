//! Scene collaborators: a source of walls and a source of canvas bounds.
//! Both are expressed as traits so a caller with its own scene graph can
//! implement them directly; this module also ships simple `Vec`-backed
//! implementations for standalone use and tests.

use rustc_hash::FxHashMap;

use crate::ids::WallId;
use crate::point::Point;

/// Per-sense restriction carried by a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sense {
    Sight,
    Light,
    Sound,
    Move,
}

/// How a wall restricts propagation for a given [`Sense`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// The wall has no effect on this sense; it is excluded from the sweep entirely.
    None,
    /// The wall fully blocks this sense.
    Normal,
    /// The wall blocks only after the sweep ray has already passed through one
    /// other limited wall: see the `Limited edge` glossary entry.
    Limited,
    /// Restriction tied to distance from a source, or to proximity; the
    /// engine treats these as fully blocking for the purposes of the sweep
    /// (the distance/proximity falloff itself is a rendering-side concern
    /// out of scope for this crate).
    Proximity,
    Distance,
}

impl Restriction {
    pub fn is_limited(self) -> bool {
        matches!(self, Self::Limited)
    }

    pub fn is_excluded(self) -> bool {
        matches!(self, Self::None)
    }
}

/// A single obstacle segment, with a per-sense restriction table and any
/// precomputed crossings with other walls.
#[derive(Debug, Clone)]
pub struct Wall {
    pub a: Point,
    pub b: Point,
    pub restrictions: FxHashMap<Sense, Restriction>,
    /// Other walls this one is known to cross, and the crossing point.
    pub intersects_with: FxHashMap<WallId, Point>,
}

impl Wall {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            restrictions: FxHashMap::default(),
            intersects_with: FxHashMap::default(),
        }
    }

    pub fn with_restriction(mut self, sense: Sense, restriction: Restriction) -> Self {
        self.restrictions.insert(sense, restriction);
        self
    }

    pub fn restriction_for(&self, sense: Sense) -> Restriction {
        self.restrictions
            .get(&sense)
            .copied()
            .unwrap_or(Restriction::Normal)
    }
}

/// A source of walls participating in a sweep. Implemented directly by
/// callers that already maintain a scene graph; this crate also provides
/// [`WallList`] for standalone use.
pub trait WallSource {
    fn walls(&self) -> &[Wall];

    fn wall_id(&self, index: usize) -> WallId {
        WallId(index)
    }
}

/// A plain `Vec`-backed [`WallSource`].
#[derive(Debug, Clone, Default)]
pub struct WallList {
    pub walls: Vec<Wall>,
}

impl WallList {
    pub fn new(walls: Vec<Wall>) -> Self {
        Self { walls }
    }
}

impl WallSource for WallList {
    fn walls(&self) -> &[Wall] {
        &self.walls
    }
}

/// The four edges of a canvas boundary rectangle, inner and outer.
pub trait BoundsSource {
    /// `(min, max)` corners of the outer boundary rectangle.
    fn outer(&self) -> (Point, Point);
    /// `(min, max)` corners of the inner boundary rectangle, used when
    /// `config.use_inner_bounds` is set.
    fn inner(&self) -> (Point, Point);
}

/// A plain rectangle-pair [`BoundsSource`].
#[derive(Debug, Clone, Copy)]
pub struct CanvasBounds {
    pub outer_min: Point,
    pub outer_max: Point,
    pub inner_min: Point,
    pub inner_max: Point,
}

impl CanvasBounds {
    /// Uses the same rectangle for both inner and outer bounds.
    pub fn single(min: Point, max: Point) -> Self {
        Self {
            outer_min: min,
            outer_max: max,
            inner_min: min,
            inner_max: max,
        }
    }
}

impl BoundsSource for CanvasBounds {
    fn outer(&self) -> (Point, Point) {
        (self.outer_min, self.outer_max)
    }

    fn inner(&self) -> (Point, Point) {
        (self.inner_min, self.inner_max)
    }
}
