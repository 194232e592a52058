//! Error types for plot operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when composing or saving a plot.
///
/// Degenerate geometry (the line-at-infinity sentinel, points at infinity
/// asked to render as dots) is never an error; those draws are skipped.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A precondition of `plot` failed. Raised before any drawing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing the raster image failed.
    #[error("failed to write plot image to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
