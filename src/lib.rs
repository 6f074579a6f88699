mod boundary;
mod collision;
mod config;
mod edge;
mod error;
mod geom;
mod graph;
mod ids;
mod ordering;
mod point;
mod polygon;
mod sweep;
mod wall;

#[cfg(feature = "draw")]
mod draw;

#[cfg(feature = "draw")]
pub use draw::render;

pub use boundary::BoundaryShape;
pub use config::SweepConfig;
pub use error::{PolygonError, Result};
pub use point::Point;
pub use polygon::Polygon;
pub use sweep::DebugRay;
pub use wall::{BoundsSource, CanvasBounds, Restriction, Sense, Wall, WallList, WallSource};

pub mod queries {
    //! Single-ray collision queries, independent of [`crate::PolygonEngine::compute`].
    pub use crate::collision::{all, any, closest, Hit};
}

/// Computes a radial visibility/illumination polygon from `origin` against
/// the given scene collaborators.
pub struct PolygonEngine;

impl PolygonEngine {
    pub fn compute(
        origin: Point,
        config: &SweepConfig,
        walls: &dyn WallSource,
        bounds: &dyn BoundsSource,
    ) -> Result<Polygon> {
        if !origin.is_finite() {
            return Err(PolygonError::NonFiniteCoordinate(origin));
        }
        for wall in walls.walls() {
            if points_coincide(origin, wall.a) || points_coincide(origin, wall.b) {
                return Err(PolygonError::OriginOnVertex(origin));
            }
        }

        let (min, max) = if config.use_inner_bounds() {
            bounds.inner()
        } else {
            bounds.outer()
        };
        if origin.x < min.x || origin.x > max.x || origin.y < min.y || origin.y > max.y {
            return Ok(Polygon::empty());
        }

        let boundary_degenerate = min.x == max.x || min.y == max.y;
        let has_relevant_walls = walls
            .walls()
            .iter()
            .any(|w| !w.restriction_for(config.sense()).is_excluded());
        if boundary_degenerate && !has_relevant_walls {
            return Ok(Polygon::empty());
        }

        let raw_edges = graph::identify_edges(walls, bounds, config.sense(), config.use_inner_bounds());

        let mut vertex_graph = graph::VertexGraph::new();
        let mut edge_arena = edge::EdgeArena::new();
        graph::identify_vertices(raw_edges, origin, &mut vertex_graph, &mut edge_arena)?;
        graph::identify_intersections(origin, walls, &mut vertex_graph, &mut edge_arena);
        vertex_graph.recompute_all_derived(&edge_arena);

        let (points, rays) = sweep::run(&mut vertex_graph, &edge_arena, origin, config.max_radius2(), config.debug());
        let points = boundary::clip_sequence(points, config.boundary_shapes());

        Ok(Polygon { points, rays })
    }
}

fn points_coincide(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(min: Point, max: Point) -> CanvasBounds {
        CanvasBounds::single(min, max)
    }

    #[test]
    fn test_s1_empty_room_yields_rectangle() {
        let origin = Point::new(500., 500.);
        let walls = WallList::new(vec![]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert_eq!(polygon.len(), 4);
        for corner in [
            Point::new(0., 0.),
            Point::new(1000., 0.),
            Point::new(1000., 1000.),
            Point::new(0., 1000.),
        ] {
            assert!(polygon.points.iter().any(|p| points_coincide(*p, corner)));
        }
    }

    #[test]
    fn test_s2_single_wall_blocks_west_side() {
        let origin = Point::new(500., 500.);
        let walls = WallList::new(vec![Wall::new(Point::new(400., 0.), Point::new(400., 1000.))]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert!(polygon.points.iter().all(|p| p.x >= 400.0 - 1e-6));
    }

    #[test]
    fn test_s3_limited_edge_is_seen_past() {
        let origin = Point::new(500., 500.);
        let walls = WallList::new(vec![
            Wall::new(Point::new(300., 400.), Point::new(300., 600.)),
            Wall::new(Point::new(200., 400.), Point::new(200., 600.))
                .with_restriction(Sense::Sight, Restriction::Limited),
        ]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert!(!polygon
            .points
            .iter()
            .any(|p| points_coincide(*p, Point::new(200., 400.)) || points_coincide(*p, Point::new(200., 600.))));
        assert!(polygon
            .points
            .iter()
            .any(|p| points_coincide(*p, Point::new(300., 400.)) || points_coincide(*p, Point::new(300., 600.))));
    }

    #[test]
    fn test_s4_wall_intersection_introduces_vertex() {
        let origin = Point::new(450., 450.);
        let mut vertical = Wall::new(Point::new(400., 300.), Point::new(400., 700.));
        let mut horizontal = Wall::new(Point::new(300., 500.), Point::new(500., 500.));
        vertical.intersects_with.insert(crate::ids::WallId(1), Point::new(400., 500.));
        horizontal.intersects_with.insert(crate::ids::WallId(0), Point::new(400., 500.));
        let walls = WallList::new(vec![vertical, horizontal]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert!(polygon.points.iter().any(|p| points_coincide(*p, Point::new(400., 500.))));
    }

    #[test]
    fn test_s5_collinear_endpoints_emit_outermost_only() {
        let origin = Point::new(500., 500.);
        let walls = WallList::new(vec![
            Wall::new(Point::new(600., 500.), Point::new(700., 500.)),
            Wall::new(Point::new(800., 500.), Point::new(900., 500.)),
        ]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert!(!polygon
            .points
            .iter()
            .any(|p| points_coincide(*p, Point::new(700., 500.)) || points_coincide(*p, Point::new(800., 500.))));
    }

    #[test]
    fn test_s6_closed_box_inside_room_yields_box_only() {
        let origin = Point::new(500., 500.);
        let walls = WallList::new(vec![
            Wall::new(Point::new(400., 400.), Point::new(600., 400.)),
            Wall::new(Point::new(600., 400.), Point::new(600., 600.)),
            Wall::new(Point::new(600., 600.), Point::new(400., 600.)),
            Wall::new(Point::new(400., 600.), Point::new(400., 400.)),
        ]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert_eq!(polygon.len(), 4);
        for p in &polygon.points {
            assert!(p.x >= 400.0 - 1e-6 && p.x <= 600.0 + 1e-6);
            assert!(p.y >= 400.0 - 1e-6 && p.y <= 600.0 + 1e-6);
        }
    }

    #[test]
    fn test_origin_on_wall_endpoint_errors() {
        let origin = Point::new(400., 0.);
        let walls = WallList::new(vec![Wall::new(Point::new(400., 0.), Point::new(400., 1000.))]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let err = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap_err();
        assert_eq!(err, PolygonError::OriginOnVertex(origin));
    }

    #[test]
    fn test_empty_environment_yields_empty_polygon() {
        let origin = Point::new(0., 0.);
        let walls = WallList::new(vec![]);
        let bounds = room(Point::new(0., 0.), Point::new(0., 0.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert!(polygon.is_empty());
    }

    #[test]
    fn test_origin_outside_bounds_yields_empty_polygon() {
        let origin = Point::new(-500., -500.);
        let walls = WallList::new(vec![]);
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let config = SweepConfig::new();

        let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        assert!(polygon.is_empty());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use rand::Rng;

    fn random_scene(rng: &mut impl Rng) -> (Point, WallList, CanvasBounds) {
        let bounds = room(Point::new(0., 0.), Point::new(1000., 1000.));
        let origin = Point::new(rng.gen_range(100.0..900.0), rng.gen_range(100.0..900.0));
        let wall_count = rng.gen_range(0..12);
        let mut walls = Vec::with_capacity(wall_count);
        for _ in 0..wall_count {
            let a = Point::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0));
            let dx = rng.gen_range(-200.0..200.0);
            let dy = rng.gen_range(-200.0..200.0);
            walls.push(Wall::new(a, Point::new(a.x + dx, a.y + dy)));
        }
        (origin, WallList::new(walls), bounds)
    }

    #[test]
    fn test_random_scenes_stay_within_bounds() {
        let mut rng = rand::thread_rng();
        let config = SweepConfig::new();
        let margin = config.max_radius2().sqrt();
        let mut succeeded = 0;

        for _ in 0..200 {
            let (origin, walls, bounds) = random_scene(&mut rng);
            let polygon = match PolygonEngine::compute(origin, &config, &walls, &bounds) {
                Ok(polygon) => polygon,
                Err(_) => continue,
            };
            for p in &polygon.points {
                assert!(p.x >= 0. - margin - 1e-6 && p.x <= 1000. + margin + 1e-6);
                assert!(p.y >= 0. - margin - 1e-6 && p.y <= 1000. + margin + 1e-6);
            }
            succeeded += 1;
        }
        assert!(succeeded > 100, "too many scenes errored out, got {succeeded} usable samples");
    }

    #[test]
    fn test_random_scenes_are_deterministic() {
        let mut rng = rand::thread_rng();
        let config = SweepConfig::new();
        let mut succeeded = 0;

        for _ in 0..100 {
            let (origin, walls, bounds) = random_scene(&mut rng);
            let first = match PolygonEngine::compute(origin, &config, &walls, &bounds) {
                Ok(polygon) => polygon,
                Err(_) => continue,
            };
            let second = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
            assert_eq!(first.points, second.points);
            succeeded += 1;
        }
        assert!(succeeded > 50, "too many scenes errored out, got {succeeded} usable samples");
    }
}
