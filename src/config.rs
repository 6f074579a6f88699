//! Sweep configuration: a plain builder struct, consumed by
//! [`crate::PolygonEngine::compute`]. No file or environment parsing is in
//! scope here — the caller constructs a value and passes it in.

use crate::boundary::BoundaryShape;
use crate::wall::Sense;

#[derive(Debug, Clone)]
pub struct SweepConfig {
    sense: Sense,
    use_inner_bounds: bool,
    boundary_shapes: Vec<BoundaryShape>,
    max_radius2: f64,
    debug: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sense: Sense::Sight,
            use_inner_bounds: false,
            boundary_shapes: Vec::new(),
            max_radius2: 1.0e12,
            debug: false,
        }
    }
}

impl SweepConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.sense = sense;
        self
    }

    pub fn with_inner_bounds(mut self, use_inner_bounds: bool) -> Self {
        self.use_inner_bounds = use_inner_bounds;
        self
    }

    pub fn with_boundary_shape(mut self, shape: BoundaryShape) -> Self {
        self.boundary_shapes.push(shape);
        self
    }

    pub fn with_boundary_shapes(mut self, shapes: Vec<BoundaryShape>) -> Self {
        self.boundary_shapes = shapes;
        self
    }

    pub fn with_max_radius2(mut self, max_radius2: f64) -> Self {
        self.max_radius2 = max_radius2;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn use_inner_bounds(&self) -> bool {
        self.use_inner_bounds
    }

    pub fn boundary_shapes(&self) -> &[BoundaryShape] {
        &self.boundary_shapes
    }

    pub fn max_radius2(&self) -> f64 {
        self.max_radius2
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_outer_bounds_and_sight() {
        let config = SweepConfig::new();
        assert_eq!(config.sense(), Sense::Sight);
        assert!(!config.use_inner_bounds());
        assert!(config.boundary_shapes().is_empty());
    }

    #[test]
    fn test_builder_chains_overrides() {
        let config = SweepConfig::new()
            .with_sense(Sense::Sound)
            .with_inner_bounds(true)
            .with_max_radius2(4_000_000.0)
            .with_debug(true);
        assert_eq!(config.sense(), Sense::Sound);
        assert!(config.use_inner_bounds());
        assert_eq!(config.max_radius2(), 4_000_000.0);
        assert!(config.debug());
    }
}
