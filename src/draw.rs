//! Shared drawing routines for sequences of projective points.
//!
//! These are the operations every point collection delegates to: draw one
//! point or one dual line, or a whole ordered sequence with either a uniform
//! color or rainbow coloring.

use crate::canvas::Canvas;
use crate::color::{jet, spectrum, Color, ColorSpec};
use crate::projective::Point;

/// Draw one point as a dot, if it has a finite image.
///
/// A point at infinity has no finite image and is silently skipped; it is
/// still a valid input to [`dual`].
pub fn point(canvas: &mut Canvas, point: &Point, color: Color, size: f64) {
    if let Some(pos) = point.image() {
        canvas.marker(pos, size, color);
    }
}

/// Draw the dual line of one point.
///
/// The line at infinity (the sentinel dual) has no finite representation and
/// is silently skipped.
pub fn dual(canvas: &mut Canvas, point: &Point, color: Color, width: f64) {
    let line = point.dual();
    if !line.is_at_infinity() {
        canvas.line(line.a, line.b, width, color);
    }
}

/// Draw an ordered sequence of points.
///
/// With [`ColorSpec::Rainbow`], the i-th point gets the i-th of `points.len()`
/// evenly spaced spectrum samples; this is the only place sequence order
/// carries meaning. Otherwise every point gets the one uniform color. `size`
/// is forwarded to every draw.
pub fn points(canvas: &mut Canvas, points: &[Point], color: &ColorSpec, size: f64) {
    each(canvas, points, color, |canvas, p, c| point(canvas, p, c, size));
}

/// Draw the duals of an ordered sequence of points. Coloring as in
/// [`points`]; `width` is forwarded to every draw.
pub fn duals(canvas: &mut Canvas, points: &[Point], color: &ColorSpec, width: f64) {
    each(canvas, points, color, |canvas, p, c| dual(canvas, p, c, width));
}

fn each(
    canvas: &mut Canvas,
    points: &[Point],
    color: &ColorSpec,
    mut draw: impl FnMut(&mut Canvas, &Point, Color),
) {
    match color {
        ColorSpec::Fixed(c) => {
            for p in points {
                draw(canvas, p, *c);
            }
        }
        ColorSpec::Rainbow => {
            let colors = spectrum(jet, points.len());
            for (p, c) in points.iter().zip(colors) {
                draw(canvas, p, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Shape;

    fn canvas() -> Canvas {
        let mut canvas = Canvas::new();
        canvas.set_limits((-5.0, 5.0), (-5.0, 5.0));
        canvas
    }

    #[test]
    fn point_at_infinity_is_skipped() {
        let mut canvas = canvas();
        point(&mut canvas, &Point::new(1.0, 1.0, 0.0), Color::RED, 5.0);
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn finite_point_is_drawn_at_its_image() {
        let mut canvas = canvas();
        point(&mut canvas, &Point::new(2.0, 4.0, 2.0), Color::RED, 5.0);
        assert_eq!(
            canvas.shapes(),
            &[Shape::Marker {
                pos: (1.0, 2.0).into(),
                size: 5.0,
                color: Color::RED,
            }]
        );
    }

    #[test]
    fn sentinel_dual_is_skipped() {
        let mut canvas = canvas();
        dual(&mut canvas, &Point::new(0.0, 0.0, 5.0), Color::BLACK, 1.0);
        dual(&mut canvas, &Point::new(0.0, 0.0, 0.0), Color::BLACK, 1.0);
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn dual_of_point_at_infinity_is_drawn() {
        // z = 0 has no dot image, but its dual is an ordinary line.
        let mut canvas = canvas();
        dual(&mut canvas, &Point::new(1.0, 1.0, 0.0), Color::BLACK, 1.0);
        assert_eq!(canvas.shapes().len(), 1);
    }

    #[test]
    fn uniform_color_applies_to_all() {
        let mut canvas = canvas();
        let pts = [Point::affine(0.0, 0.0), Point::affine(1.0, 1.0)];
        points(&mut canvas, &pts, &ColorSpec::parse("g"), 3.0);
        for shape in canvas.shapes() {
            match shape {
                Shape::Marker { color, size, .. } => {
                    assert_eq!(*color, Color::GREEN);
                    assert_eq!(*size, 3.0);
                }
                other => panic!("unexpected shape {other:?}"),
            }
        }
    }

    #[test]
    fn rainbow_assigns_spectrum_samples_in_order() {
        let mut canvas = canvas();
        let pts: Vec<Point> = (0..5).map(|i| Point::affine(i as f64, 0.0)).collect();
        points(&mut canvas, &pts, &ColorSpec::parse("RAINBOW"), 2.0);
        assert_eq!(canvas.shapes().len(), 5);
        for (i, shape) in canvas.shapes().iter().enumerate() {
            let Shape::Marker { color, .. } = shape else {
                panic!("expected marker");
            };
            assert_eq!(*color, jet(i as f64 / 4.0));
        }
    }

    #[test]
    fn rainbow_duals_skip_sentinels_but_keep_their_color_slot() {
        // Each point still consumes its spectrum position; only the draw of
        // the sentinel is skipped.
        let mut canvas = canvas();
        let pts = [
            Point::affine(1.0, 1.0),
            Point::new(0.0, 0.0, 1.0), // sentinel dual
            Point::affine(-1.0, 2.0),
        ];
        duals(&mut canvas, &pts, &ColorSpec::Rainbow, 1.0);
        let colors: Vec<Color> = canvas
            .shapes()
            .iter()
            .map(|s| match s {
                Shape::Line { color, .. } => *color,
                other => panic!("unexpected shape {other:?}"),
            })
            .collect();
        assert_eq!(colors, vec![jet(0.0), jet(1.0)]);
    }
}
