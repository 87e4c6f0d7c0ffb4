//! Pixel canvas that trims shapes before rasterizing them.
//!
//! Stands in for a renderer whose coordinates are fixed-width integers: every
//! shape goes through the canvas' [`Clipper`] first. Before the float-to-int
//! conversion the result is also cut to the canvas plus [`RASTER_MARGIN`], so
//! pixel coordinates stay small whatever bounds the clipper was given.

use std::path::Path;

use image::RgbaImage;

use crate::clipper::{ClipBounds, Clipper, ShapeKind};
use crate::colors;
use crate::error::Result;
use crate::math::Point;

/// Pixels of slack around the canvas when cutting geometry for the raster
/// stage, so strokes leaving the canvas keep their slope up to the edge.
pub const RASTER_MARGIN: f64 = 2.0;

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    clipper: Clipper,
    /// The canvas rectangle plus margin.
    window: Clipper,
    /// `clipper`'s bounds intersected with `window`. `None` when they do not
    /// overlap and nothing can be drawn.
    raster: Option<Clipper>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let window = Clipper::new(Self::window_bounds(width, height));
        let clipper = Clipper::default();
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
            clipper,
            window,
            raster: Self::raster_clipper(&clipper, &window),
        }
    }

    /// Use `clipper` instead of the default X11 bounds.
    pub fn with_clipper(mut self, clipper: Clipper) -> Self {
        self.clipper = clipper;
        self.raster = Self::raster_clipper(&clipper, &self.window);
        self
    }

    fn window_bounds(width: u32, height: u32) -> ClipBounds {
        let max_x = width as f64 + RASTER_MARGIN;
        let max_y = height as f64 + RASTER_MARGIN;
        // min < max always holds, so the fallback is unreachable
        ClipBounds::new(-RASTER_MARGIN, -RASTER_MARGIN, max_x, max_y).unwrap_or_default()
    }

    fn raster_clipper(clipper: &Clipper, window: &Clipper) -> Option<Clipper> {
        let raster = clipper.bounds().intersection(window.bounds());
        if raster.is_none() {
            log::debug!("clip bounds do not overlap the canvas, shapes will not be drawn");
        }
        raster.map(Clipper::new)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clipper(&self) -> &Clipper {
        &self.clipper
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Draws a line between two pixel positions.
    ///
    /// The segment is first cut to the canvas window, so endpoints far off
    /// the canvas cost no more than ones on it.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let mut segment = vec![
            Point::new(x0 as f64, y0 as f64),
            Point::new(x1 as f64, y1 as f64),
        ];
        self.window.trim(&mut segment, ShapeKind::Open);
        match segment.as_slice() {
            [] => {}
            [p] => {
                let (x, y) = to_pixel(*p);
                self.set_pixel(x, y, color);
            }
            [a, b, ..] => self.stroke(to_pixel(*a), to_pixel(*b), color),
        }
    }

    /// Bresenham's line algorithm.
    ///
    /// The error term tracks the distance between the ideal line and the
    /// current pixel; whenever it crosses a threshold the minor axis steps
    /// too, giving a diagonal move. Works in i64 so that `2 * err` cannot
    /// overflow for any pair of i32 endpoints.
    fn stroke(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32), color: u32) {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            if x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64 {
                let index = y as usize * self.width as usize + x as usize;
                self.color_buffer[index] = color;
            }

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Trim `points` to the clip bounds and stroke the result.
    ///
    /// Closed shapes get their closing edge. Returns the number of edges
    /// drawn; a shape trimmed down to one vertex draws a single pixel.
    pub fn draw_shape(&mut self, points: &[Point], kind: ShapeKind, color: u32) -> usize {
        let Some(raster) = self.raster else {
            return 0;
        };
        let mut trimmed = self.clipper.trimmed(points, kind);
        raster.trim(&mut trimmed, kind);
        let pixels: Vec<(i32, i32)> = trimmed.iter().map(|p| to_pixel(*p)).collect();

        match pixels.as_slice() {
            [] => 0,
            [(x, y)] => {
                self.set_pixel(*x, *y, color);
                0
            }
            _ => {
                let mut edges = 0;
                for pair in pixels.windows(2) {
                    self.stroke(pair[0], pair[1], color);
                    edges += 1;
                }
                if kind == ShapeKind::Closed && pixels.len() > 2 {
                    self.stroke(pixels[pixels.len() - 1], pixels[0], color);
                    edges += 1;
                }
                log::trace!(
                    "stroked {} edges from {} input vertices",
                    edges,
                    points.len()
                );
                edges
            }
        }
    }

    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (pixel, &argb) in img.pixels_mut().zip(&self.color_buffer) {
            pixel.0 = colors::to_rgba(argb);
        }
        img
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!(
            "wrote {}x{} canvas to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

/// Only called on points inside a canvas window, which fit an i32 easily.
fn to_pixel(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}
