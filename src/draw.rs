//! Debug visualization of a computed polygon: rays, polygon outline, and
//! the walls that produced it, rendered to a PNG. Feature-gated (`draw`),
//! mirroring the teacher crate's own optional drawing support.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::point::Point;
use crate::polygon::Polygon;
use crate::wall::WallSource;

struct MapRect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

struct ScreenMap {
    from: MapRect,
    to: MapRect,
}

impl ScreenMap {
    fn point(&self, p: Point) -> (f32, f32) {
        let x = (p.x - self.from.x) / self.from.w * self.to.w + self.to.x;
        let y = (p.y - self.from.y) / self.from.h * self.to.h + self.to.y;
        (x as f32, y as f32)
    }
}

fn bounding_map(points: impl Iterator<Item = Point>, size: u32) -> ScreenMap {
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    if !min_x.is_finite() {
        min_x = 0.;
        max_x = 1.;
        min_y = 0.;
        max_y = 1.;
    }
    let margin = 30.;
    ScreenMap {
        from: MapRect {
            x: min_x - margin,
            y: min_y - margin,
            w: (max_x - min_x + 2. * margin).max(1.),
            h: (max_y - min_y + 2. * margin).max(1.),
        },
        to: MapRect {
            x: 0.,
            y: 0.,
            w: size as f64,
            h: size as f64,
        },
    }
}

/// Renders the origin, the polygon outline, every wall, and any retained
/// debug rays onto an 800x800 canvas.
pub fn render(origin: Point, polygon: &Polygon, walls: &dyn WallSource, size: u32) -> RgbImage {
    let white = Rgb([255u8, 255, 255]);
    let black = Rgb([0u8, 0, 0]);
    let blue = Rgb([40u8, 80, 220]);
    let gray = Rgb([170u8, 170, 170]);
    let red = Rgb([220u8, 40, 40]);

    let mut image = RgbImage::new(size, size);
    image.fill(255);
    image.pixels_mut().for_each(|p| *p = white);

    let all_points = std::iter::once(origin)
        .chain(polygon.points.iter().copied())
        .chain(walls.walls().iter().flat_map(|w| [w.a, w.b]));
    let map = bounding_map(all_points, size);

    for wall in walls.walls() {
        draw_line_segment_mut(&mut image, map.point(wall.a), map.point(wall.b), gray);
    }

    let n = polygon.points.len();
    for i in 0..n {
        let a = polygon.points[i];
        let b = polygon.points[(i + 1) % n];
        draw_line_segment_mut(&mut image, map.point(a), map.point(b), blue);
    }

    for ray in &polygon.rays {
        let color = if ray.is_behind { gray } else { red };
        draw_line_segment_mut(&mut image, map.point(ray.origin), map.point(ray.target), color);
    }

    let (ox, oy) = map.point(origin);
    draw_filled_circle_mut(&mut image, (ox as i32, oy as i32), 4, black);

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::WallList;

    #[test]
    fn test_render_produces_requested_size() {
        let origin = Point::new(0., 0.);
        let polygon = Polygon::empty();
        let walls = WallList::new(vec![]);
        let image = render(origin, &polygon, &walls, 200);
        assert_eq!(image.width(), 200);
        assert_eq!(image.height(), 200);
    }
}
