//! The drawing surface.
//!
//! A [`Canvas`] is an explicit, owned object passed to every drawing call,
//! so independent renders (and tests) never share hidden state. It retains
//! the shapes drawn onto it; rasterization happens on [`Canvas::present`] or
//! [`Canvas::save_png`].

use std::path::Path;

use crate::color::Color;
use crate::error::PlotError;
use crate::render::{self, Raster};
use crate::types::Vec2;

/// Aspect policy for the data-to-pixel mapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Aspect {
    /// One data unit spans the same number of pixels on both axes.
    #[default]
    Equal,
    /// The axes scale independently to fill the figure.
    Auto,
}

/// A retained shape on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A dot at a data-space position. `size` is a marker area in pt².
    Marker { pos: Vec2, size: f64, color: Color },
    /// The infinite line through two distinct data-space points. `width` is a
    /// stroke width in pt.
    Line {
        a: Vec2,
        b: Vec2,
        width: f64,
        color: Color,
    },
}

/// Contract default DPI for saved rasters.
pub const SAVE_DPI: u32 = 1080;

/// DPI of the in-memory display surface.
pub const DISPLAY_DPI: u32 = 100;

/// A 2D canvas: declared data bounds, aspect policy, and retained shapes.
#[derive(Clone, Debug)]
pub struct Canvas {
    x_lim: (f64, f64),
    y_lim: (f64, f64),
    aspect: Aspect,
    axes_visible: bool,
    shapes: Vec<Shape>,
    save_dpi: u32,
    display_dpi: u32,
    frame: Option<Raster>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas with unit bounds and equal aspect.
    pub fn new() -> Self {
        Self {
            x_lim: (-1.0, 1.0),
            y_lim: (-1.0, 1.0),
            aspect: Aspect::Equal,
            axes_visible: true,
            shapes: Vec::new(),
            save_dpi: SAVE_DPI,
            display_dpi: DISPLAY_DPI,
            frame: None,
        }
    }

    pub fn x_lim(&self) -> (f64, f64) {
        self.x_lim
    }

    pub fn y_lim(&self) -> (f64, f64) {
        self.y_lim
    }

    /// Set the data bounds shown by the canvas.
    pub fn set_limits(&mut self, x_lim: (f64, f64), y_lim: (f64, f64)) {
        self.x_lim = x_lim;
        self.y_lim = y_lim;
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    pub fn axes_visible(&self) -> bool {
        self.axes_visible
    }

    /// Hide the coordinate axes.
    pub fn hide_axes(&mut self) {
        self.axes_visible = false;
    }

    /// Override the DPI used by [`Canvas::save_png`]. The contract default is
    /// [`SAVE_DPI`]; tests lower it to keep rasters small.
    pub fn set_save_dpi(&mut self, dpi: u32) {
        self.save_dpi = dpi;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The last presented frame, if any.
    pub fn frame(&self) -> Option<&Raster> {
        self.frame.as_ref()
    }

    /// Remove all shapes and the presented frame, keeping the configuration.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.frame = None;
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Add a dot marker at a data-space position.
    pub fn marker(&mut self, pos: Vec2, size: f64, color: Color) {
        self.shapes.push(Shape::Marker { pos, size, color });
    }

    /// Add the infinite line through two data-space points.
    pub fn line(&mut self, a: Vec2, b: Vec2, width: f64, color: Color) {
        self.shapes.push(Shape::Line { a, b, width, color });
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Rasterize at the display DPI and retain the frame on the canvas.
    ///
    /// This is the stand-in for flushing to a window: the frame stays
    /// inspectable via [`Canvas::frame`].
    pub fn present(&mut self) {
        let frame = render::rasterize(self, self.display_dpi);
        log::debug!(
            "presented canvas: {}x{} px, {} shapes",
            frame.width(),
            frame.height(),
            self.shapes.len()
        );
        self.frame = Some(frame);
    }

    /// Rasterize at the save DPI (no padding) and write a PNG to `path`.
    pub fn save_png(&self, path: &Path) -> Result<(), PlotError> {
        let raster = render::rasterize(self, self.save_dpi);
        raster.write_png(path)?;
        log::info!(
            "saved plot to {} ({}x{} px)",
            path.display(),
            raster.width(),
            raster.height()
        );
        Ok(())
    }
}
