//! Software rasterizer for [`Canvas`] scenes.
//!
//! Data coordinates are mapped onto a fixed-size figure (in inches) at a
//! caller-chosen DPI, with zero padding: the data bounds fill the raster
//! exactly. Infinite lines are clipped against the data bounds before being
//! stroked.

use std::path::Path;

use crate::canvas::{Aspect, Canvas, Shape};
use crate::color::Color;
use crate::error::PlotError;
use crate::types::Vec2;

/// Figure width in inches.
pub const FIG_WIDTH_IN: f64 = 6.4;
/// Figure height in inches, used when the aspect policy is `Auto`.
pub const FIG_HEIGHT_IN: f64 = 4.8;

const PT_PER_IN: f64 = 72.0;

/// An RGBA framebuffer.
#[derive(Clone, Debug)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a white raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![255; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The color at a pixel. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height);
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
    }

    /// Fill a disc centered at pixel coordinates.
    fn disc(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let r = radius.max(0.5);
        let x0 = (cx - r).floor() as i64;
        let x1 = (cx + r).ceil() as i64;
        let y0 = (cy - r).floor() as i64;
        let y1 = (cy + r).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Stroke a segment between two pixel positions by stamping discs.
    fn segment(&mut self, a: (f64, f64), b: (f64, f64), radius: f64, color: Color) {
        let len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        let steps = (len / 0.5).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.disc(a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t, radius, color);
        }
    }

    /// Encode as PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), PlotError> {
        image::save_buffer(
            path,
            &self.data,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|source| PlotError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Maps data coordinates onto raster pixels.
struct Viewport {
    x_lim: (f64, f64),
    y_lim: (f64, f64),
    width: u32,
    height: u32,
}

impl Viewport {
    fn to_px(&self, p: Vec2) -> (f64, f64) {
        let (x0, x1) = self.x_lim;
        let (y0, y1) = self.y_lim;
        let px = (p.x - x0) / (x1 - x0) * (self.width.saturating_sub(1)) as f64;
        // Raster rows grow downward; data Y grows upward.
        let py = (y1 - p.y) / (y1 - y0) * (self.height.saturating_sub(1)) as f64;
        (px, py)
    }
}

/// Rasterize a canvas at the given DPI.
pub fn rasterize(canvas: &Canvas, dpi: u32) -> Raster {
    let (x0, x1) = canvas.x_lim();
    let (y0, y1) = canvas.y_lim();
    let width = (FIG_WIDTH_IN * dpi as f64).round().max(1.0) as u32;
    let height = match canvas.aspect() {
        // Square data units: pixel height follows the data ranges.
        Aspect::Equal => {
            let ratio = ((y1 - y0) / (x1 - x0)).abs();
            (width as f64 * ratio).round().max(1.0) as u32
        }
        Aspect::Auto => (FIG_HEIGHT_IN * dpi as f64).round().max(1.0) as u32,
    };

    let view = Viewport {
        x_lim: canvas.x_lim(),
        y_lim: canvas.y_lim(),
        width,
        height,
    };
    let mut raster = Raster::new(width, height);
    let px_per_pt = dpi as f64 / PT_PER_IN;

    if canvas.axes_visible() {
        draw_axes(&mut raster, &view);
    }

    for shape in canvas.shapes() {
        match *shape {
            Shape::Marker { pos, size, color } => {
                // Marker size is an area in pt², matching scatter conventions.
                let radius_pt = (size.max(0.0) / std::f64::consts::PI).sqrt();
                let (cx, cy) = view.to_px(pos);
                raster.disc(cx, cy, radius_pt * px_per_pt, color);
            }
            Shape::Line { a, b, width, color } => {
                if let Some((p, q)) = clip_infinite_line(a, b, view.x_lim, view.y_lim) {
                    let radius = (width * px_per_pt / 2.0).max(0.5);
                    raster.segment(view.to_px(p), view.to_px(q), radius, color);
                }
            }
        }
    }

    raster
}

fn draw_axes(raster: &mut Raster, view: &Viewport) {
    const AXIS_COLOR: Color = Color::rgb(160, 160, 160);
    let (x0, x1) = view.x_lim;
    let (y0, y1) = view.y_lim;
    if x0 < 0.0 && x1 > 0.0 {
        let a = view.to_px(Vec2::new(0.0, y0));
        let b = view.to_px(Vec2::new(0.0, y1));
        raster.segment(a, b, 0.5, AXIS_COLOR);
    }
    if y0 < 0.0 && y1 > 0.0 {
        let a = view.to_px(Vec2::new(x0, 0.0));
        let b = view.to_px(Vec2::new(x1, 0.0));
        raster.segment(a, b, 0.5, AXIS_COLOR);
    }
}

/// Clip the infinite line through `a` and `b` to the given data bounds.
///
/// Returns the entry and exit points of the line, or `None` when the line
/// misses the bounds entirely, when `a == b`, or when either point is not
/// finite (the caller is expected to have filtered the line-at-infinity
/// sentinel already, but a non-finite input must never draw).
pub fn clip_infinite_line(
    a: Vec2,
    b: Vec2,
    x_lim: (f64, f64),
    y_lim: (f64, f64),
) -> Option<(Vec2, Vec2)> {
    if !a.is_finite() || !b.is_finite() || a == b {
        return None;
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    // Liang-Barsky over an unbounded parameter range.
    let mut t0 = f64::NEG_INFINITY;
    let mut t1 = f64::INFINITY;
    for (d, pos, lim) in [(dx, a.x, x_lim), (dy, a.y, y_lim)] {
        let (lo, hi) = if lim.0 <= lim.1 { lim } else { (lim.1, lim.0) };
        if d == 0.0 {
            if pos < lo || pos > hi {
                return None;
            }
        } else {
            let ta = (lo - pos) / d;
            let tb = (hi - pos) / d;
            let (ta, tb) = if ta <= tb { (ta, tb) } else { (tb, ta) };
            t0 = t0.max(ta);
            t1 = t1.min(tb);
        }
    }
    if t0 > t1 {
        return None;
    }
    Some((
        Vec2::new(a.x + dx * t0, a.y + dy * t0),
        Vec2::new(a.x + dx * t1, a.y + dy * t1),
    ))
}
