//! Single-ray collision queries, independent of the vertex graph and sweep.
//! Answers "what does a ray from the origin to a target point hit" without
//! building a full visibility polygon.

use crate::geom;
use crate::point::Point;
use crate::wall::{Sense, WallSource};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Point,
    pub distance2: f64,
    pub limited: bool,
}

/// Whether the ray from `origin` to `target` is obstructed, accounting for
/// one free pass through a limited wall.
pub fn any(origin: Point, target: Point, walls: &dyn WallSource, sense: Sense) -> bool {
    let mut limited_hits = 0;
    for hit in raw_hits(origin, target, walls, sense) {
        if hit.limited {
            limited_hits += 1;
            if limited_hits >= 2 {
                return true;
            }
        } else {
            return true;
        }
    }
    false
}

/// All hits along the ray, sorted by distance, with a single leading
/// limited hit dropped (the first limited wall is passed through freely).
pub fn all(origin: Point, target: Point, walls: &dyn WallSource, sense: Sense) -> Vec<Hit> {
    let mut hits = raw_hits(origin, target, walls, sense);
    hits.sort_by(|a, b| a.distance2.partial_cmp(&b.distance2).unwrap_or(std::cmp::Ordering::Equal));
    dedup_by_key(&mut hits);
    if hits.first().map(|h| h.limited).unwrap_or(false) {
        hits.remove(0);
    }
    hits
}

/// The closest hit along the ray, after dropping a leading limited hit.
pub fn closest(origin: Point, target: Point, walls: &dyn WallSource, sense: Sense) -> Option<Hit> {
    all(origin, target, walls, sense).into_iter().next()
}

fn raw_hits(origin: Point, target: Point, walls: &dyn WallSource, sense: Sense) -> Vec<Hit> {
    let mut hits = Vec::new();
    for wall in walls.walls() {
        let restriction = wall.restriction_for(sense);
        if restriction.is_excluded() {
            continue;
        }
        if let Some(intersection) = geom::segment_segment_intersect(origin, target, wall.a, wall.b) {
            hits.push(Hit {
                point: intersection.point,
                distance2: geom::distance_squared(origin, intersection.point),
                limited: restriction.is_limited(),
            });
        }
    }
    hits
}

fn dedup_by_key(hits: &mut Vec<Hit>) {
    let mut seen = std::collections::HashSet::new();
    hits.retain(|h| seen.insert(geom::point_key(h.point)));
}
