use std::path::PathBuf;

use clap::Parser;
use rectclip::prelude::*;
use rectclip::{colors, Result};

/// Render a demo scene of oversized shapes through the clipper into a PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Where to write the PNG
    #[arg(short, long, default_value = "rectclip.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// JSON file with min_x, min_y, max_x and max_y
    #[arg(long, conflicts_with = "limit")]
    bounds: Option<PathBuf>,

    /// Clip to [-LIMIT, LIMIT] on both axes
    #[arg(long)]
    limit: Option<f64>,
}

impl Args {
    fn clip_bounds(&self) -> Result<ClipBounds> {
        match (&self.bounds, self.limit) {
            (Some(path), _) => ClipBounds::load(path),
            (None, Some(limit)) => ClipBounds::symmetric(limit),
            (None, None) => Ok(ClipBounds::default()),
        }
    }
}

fn draw_grid(canvas: &mut Canvas, spacing: i32, color: u32) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for x in (0..w).step_by(spacing as usize) {
        canvas.draw_line(x, 0, x, h - 1, color);
    }
    for y in (0..h).step_by(spacing as usize) {
        canvas.draw_line(0, y, w - 1, y, color);
    }
}

/// Shapes that reach far past any screen, centred on the canvas.
fn demo_scene(width: u32, height: u32) -> Vec<(Vec<Point>, ShapeKind, u32)> {
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);

    let triangle = vec![
        Point::new(cx - 100.0, cy + 150.0),
        Point::new(cx + 90000.0, cy + 150.0),
        Point::new(cx - 100.0, cy - 75000.0),
    ];

    let polyline: Vec<Point> = (-8..=8)
        .map(|i| {
            let t = i as f64 / 8.0;
            Point::new(cx + t * 1.0e6, cy + (t * 9.0).sin() * 200.0)
        })
        .collect();

    let star: Vec<Point> = (0..10)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::PI / 5.0;
            let radius = if i % 2 == 0 { 250000.0 } else { 120.0 };
            Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();

    vec![
        (triangle, ShapeKind::Closed, colors::CYAN),
        (polyline, ShapeKind::Open, colors::YELLOW),
        (star, ShapeKind::Closed, colors::MAGENTA),
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let bounds = args.clip_bounds()?;
    log::info!(
        "clipping to x [{}, {}], y [{}, {}]",
        bounds.min_x(),
        bounds.max_x(),
        bounds.min_y(),
        bounds.max_y()
    );

    let mut canvas = Canvas::new(args.width, args.height).with_clipper(Clipper::new(bounds));
    canvas.clear(colors::BACKGROUND);
    draw_grid(&mut canvas, 50, colors::GRID);

    for (points, kind, color) in demo_scene(args.width, args.height) {
        let edges = canvas.draw_shape(&points, kind, color);
        log::debug!("{:?} shape: {} vertices, {} edges drawn", kind, points.len(), edges);
    }

    canvas.save_png(&args.output)
}
