//! Point sets with interesting duals.

use std::f64::consts::PI;

use crate::canvas::{Aspect, Canvas};
use crate::color::{Color, ColorSpec};
use crate::draw;
use crate::error::PlotError;
use crate::figure::{PlotArgs, PointSet};
use crate::projective::Point;

/// Minimum number of points a curve must be sampled at.
pub const MIN_POINTS: usize = 2;

/// A simple triangular grid.
///
/// Nine points lying on three lines `P`, `Q`, and `R`; each line keeps its
/// own color (red, green, blue) for both the points and their duals.
pub struct TriangularGrid {
    p_points: Vec<Point>,
    q_points: Vec<Point>,
    r_points: Vec<Point>,
}

impl Default for TriangularGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangularGrid {
    pub fn new() -> Self {
        Self {
            p_points: vec![
                Point::new(1.0, -1.0, 1.0),
                Point::new(-1.0, 1.0, 0.0),
                Point::new(-1.0, 1.0, 1.0),
            ],
            q_points: vec![
                Point::new(1.0, 3.0, -3.0),
                Point::new(1.0, 3.0, 0.0),
                Point::new(1.0, 3.0, 3.0),
            ],
            r_points: vec![
                Point::new(4.0, 0.0, 3.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(4.0, 0.0, -3.0),
            ],
        }
    }

    fn lines(&self) -> [(&[Point], Color); 3] {
        [
            (&self.p_points, Color::RED),
            (&self.q_points, Color::GREEN),
            (&self.r_points, Color::BLUE),
        ]
    }
}

impl PointSet for TriangularGrid {
    fn x_lim(&self) -> (f64, f64) {
        (-2.0, 2.0)
    }

    fn y_lim(&self) -> (f64, f64) {
        (-2.0, 2.0)
    }

    fn plot_points(&self, canvas: &mut Canvas, size: f64) {
        for (points, color) in self.lines() {
            draw::points(canvas, points, &ColorSpec::Fixed(color), size);
        }
    }

    fn plot_duals(&self, canvas: &mut Canvas, width: f64) {
        for (points, color) in self.lines() {
            draw::duals(canvas, points, &ColorSpec::Fixed(color), width);
        }
    }
}

/// The roots of unity on a circle, with the corresponding points at infinity.
///
/// Only the roots themselves are drawn as dots (the points at infinity are
/// infinitely far away); both groups contribute duals, the directions in
/// rainbow colors.
pub struct UnitCircle {
    roots_of_unity: Vec<Point>,
    points_at_infinity: Vec<Point>,
}

impl UnitCircle {
    pub fn new(roots: usize) -> Self {
        let roots_of_unity = (0..roots)
            .map(|t| {
                let angle = 2.0 * t as f64 * PI / roots as f64;
                Point::affine(angle.cos(), angle.sin())
            })
            .collect();
        let points_at_infinity = (0..roots)
            .map(|t| {
                let angle = t as f64 * PI / roots as f64;
                Point::new(-angle.sin(), angle.cos(), 0.0)
            })
            .collect();
        Self {
            roots_of_unity,
            points_at_infinity,
        }
    }

    pub fn roots_of_unity(&self) -> &[Point] {
        &self.roots_of_unity
    }

    pub fn points_at_infinity(&self) -> &[Point] {
        &self.points_at_infinity
    }
}

impl PointSet for UnitCircle {
    fn x_lim(&self) -> (f64, f64) {
        (-5.0, 5.0)
    }

    fn y_lim(&self) -> (f64, f64) {
        (-5.0, 5.0)
    }

    fn plot_points(&self, canvas: &mut Canvas, size: f64) {
        draw::points(
            canvas,
            &self.roots_of_unity,
            &ColorSpec::Fixed(Color::BLACK),
            size,
        );
    }

    fn plot_duals(&self, canvas: &mut Canvas, width: f64) {
        draw::duals(
            canvas,
            &self.roots_of_unity,
            &ColorSpec::Fixed(Color::BLACK),
            width,
        );
        draw::duals(canvas, &self.points_at_infinity, &ColorSpec::Rainbow, width);
    }
}

/// Equally spaced points on the cubic curve `Y = X^3`.
pub struct CubicCurve {
    cubic_points: Vec<Point>,
}

impl CubicCurve {
    /// Sample `number` points with x evenly spaced over `[-10, 10]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `number` is below [`MIN_POINTS`].
    pub fn new(number: usize) -> Result<Self, PlotError> {
        if number < MIN_POINTS {
            return Err(PlotError::InvalidArgument(format!(
                "must have at least {MIN_POINTS} points, found {number}"
            )));
        }

        let (lower, upper) = (-10.0_f64, 10.0_f64);
        let diff = upper - lower;
        let denominator = (number - 1) as f64;
        // Dividing last keeps the midpoint of an odd sample count at exactly
        // x = 0, which the exact-zero dual branches rely on.
        let cubic_points = (0..number)
            .map(|i| {
                let x = lower + (i as f64 * diff) / denominator;
                Point::affine(x, x.powi(3))
            })
            .collect();
        Ok(Self { cubic_points })
    }

    pub fn points(&self) -> &[Point] {
        &self.cubic_points
    }
}

impl PointSet for CubicCurve {
    fn x_lim(&self) -> (f64, f64) {
        (-1.5, 1.5)
    }

    fn y_lim(&self) -> (f64, f64) {
        (-0.04, 0.04)
    }

    fn aspect(&self) -> Aspect {
        Aspect::Auto
    }

    fn plot_points(&self, canvas: &mut Canvas, size: f64) {
        draw::points(canvas, &self.cubic_points, &ColorSpec::Rainbow, size);
    }

    fn plot_duals(&self, canvas: &mut Canvas, width: f64) {
        draw::duals(canvas, &self.cubic_points, &ColorSpec::Rainbow, width);
    }

    /// The cubic curve refuses to draw points and duals together: over its
    /// narrow Y-range the overlay is unreadable.
    fn validate_args(&self, args: &PlotArgs) -> Result<(), PlotError> {
        if args.size.is_some() && args.width.is_some() {
            return Err(PlotError::InvalidArgument(
                "the cubic curve cannot draw points and duals together".into(),
            ));
        }
        Ok(())
    }
}
