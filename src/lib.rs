//! # dualplot - Projective Point-Line Duality, Plotted
//!
//! Points of the real projective plane in homogeneous coordinates, their
//! dual lines, and a small plotting layer for drawing both.
//!
//! ## Architecture
//!
//! ```text
//! PointSet (trait)        projective::Point ── dual() ──► DualLine
//!    │ plot_points/duals          │                          │
//!    ▼                            ▼ image()                  ▼
//! draw::{points, duals} ──► Canvas (retained shapes) ──► render (raster/PNG)
//! ```
//!
//! The point under the duality `[a : b : c] ↔ aX + bY + cZ = 0` is pure
//! math with no I/O; the [`Canvas`] is an explicit drawing surface passed to
//! every call, so independent plots never share state.

mod canvas;
mod color;
mod error;
mod figure;
mod projective;
mod render;
mod types;

pub mod draw;
pub mod graphs;

pub use canvas::{Aspect, Canvas, Shape, DISPLAY_DPI, SAVE_DPI};
pub use color::{jet, spectrum, Color, ColorMap, ColorSpec};
pub use error::PlotError;
pub use figure::{PlotArgs, PointSet};
pub use projective::{DualLine, Point};
pub use render::{clip_infinite_line, rasterize, Raster, FIG_HEIGHT_IN, FIG_WIDTH_IN};
pub use types::Vec2;
