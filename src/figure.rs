//! The rendering contract for point collections.
//!
//! A collection of projective points implements [`PointSet`]: it declares its
//! canvas bounds and draws its own point sequences via the [`crate::draw`]
//! routines. The composed [`PointSet::plot`] operation is provided by the
//! trait; a collection that needs a stricter precondition overrides only
//! [`PointSet::validate_args`], never the whole sequence.

use std::path::PathBuf;

use crate::canvas::{Aspect, Canvas};
use crate::error::PlotError;

/// Arguments to [`PointSet::plot`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotArgs {
    /// Marker size (pt²). Points are drawn only when set.
    pub size: Option<f64>,
    /// Dual line width (pt). Duals are drawn only when set.
    pub width: Option<f64>,
    /// Save the raster to `path` after drawing.
    pub save: bool,
    pub path: Option<PathBuf>,
}

impl PlotArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the points with this marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Draw the duals with this line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Save the plot to `path`.
    pub fn save_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.save = true;
        self.path = Some(path.into());
        self
    }
}

/// A set of points that can be plotted.
pub trait PointSet {
    /// Declared horizontal canvas bounds.
    fn x_lim(&self) -> (f64, f64);

    /// Declared vertical canvas bounds.
    fn y_lim(&self) -> (f64, f64);

    /// Declared aspect policy.
    fn aspect(&self) -> Aspect {
        Aspect::Equal
    }

    /// Draw the points of this set onto the canvas.
    fn plot_points(&self, canvas: &mut Canvas, size: f64);

    /// Draw the duals of this set's points onto the canvas.
    fn plot_duals(&self, canvas: &mut Canvas, width: f64);

    /// Collection-specific precondition hook, checked by [`PointSet::plot`]
    /// after the shared preconditions and before any drawing.
    fn validate_args(&self, _args: &PlotArgs) -> Result<(), PlotError> {
        Ok(())
    }

    /// Compose a full plot: set up the canvas, draw points and/or duals,
    /// optionally save, and always present.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when neither `size` nor `width` is given, when
    /// `save` is requested without a `path`, or when the collection's own
    /// [`PointSet::validate_args`] rejects the combination. All preconditions
    /// fail before anything is drawn.
    fn plot(&self, canvas: &mut Canvas, args: &PlotArgs) -> Result<(), PlotError> {
        if args.size.is_none() && args.width.is_none() {
            return Err(PlotError::InvalidArgument(
                "nothing to draw: give a point size and/or a dual line width".into(),
            ));
        }
        let save_to = if args.save {
            Some(args.path.as_deref().ok_or_else(|| {
                PlotError::InvalidArgument("save requested without a path".into())
            })?)
        } else {
            None
        };
        self.validate_args(args)?;

        canvas.set_limits(self.x_lim(), self.y_lim());
        canvas.set_aspect(self.aspect());
        canvas.hide_axes();

        if let Some(size) = args.size {
            self.plot_points(canvas, size);
        }
        if let Some(width) = args.width {
            self.plot_duals(canvas, width);
        }

        if let Some(path) = save_to {
            canvas.save_png(path)?;
        }
        canvas.present();
        Ok(())
    }
}
