use clap::Parser;
use sweep_polygon::{CanvasBounds, PolygonEngine, Point, Sense, SweepConfig, Wall, WallList};

/// Computes a visibility polygon for a small built-in scene and prints it,
/// optionally rendering a PNG when the `draw` feature is enabled.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value_t = 500.)]
    origin_x: f64,
    #[arg(long, default_value_t = 500.)]
    origin_y: f64,
    #[arg(long)]
    out: Option<std::path::PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let walls = WallList::new(vec![
        Wall::new(Point::new(400., 0.), Point::new(400., 400.)),
        Wall::new(Point::new(600., 600.), Point::new(600., 1000.)),
    ]);
    let bounds = CanvasBounds::single(Point::new(0., 0.), Point::new(1000., 1000.));
    let origin = Point::new(args.origin_x, args.origin_y);
    let config = SweepConfig::new().with_sense(Sense::Sight).with_debug(args.out.is_some());

    let polygon = PolygonEngine::compute(origin, &config, &walls, &bounds).expect("compute polygon");
    println!("polygon with {} points:", polygon.len());
    for p in &polygon.points {
        println!("  ({:.1}, {:.1})", p.x, p.y);
    }

    #[cfg(feature = "draw")]
    if let Some(path) = args.out {
        let image = sweep_polygon::render(origin, &polygon, &walls, 800);
        image.save(path).expect("write output image");
    }
}
