//! End-to-end tests: compose full plots through the `PointSet` contract and
//! save them to disk.

use dualplot::graphs::{CubicCurve, TriangularGrid, UnitCircle};
use dualplot::{Canvas, Color, PlotArgs, PlotError, PointSet, Shape};

/// A canvas with a small save raster so tests stay fast.
fn test_canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.set_save_dpi(25);
    canvas
}

#[test]
fn triangular_grid_full_plot() {
    let mut canvas = test_canvas();
    TriangularGrid::new()
        .plot(&mut canvas, &PlotArgs::new().size(5.0).width(0.75))
        .unwrap();

    // 6 finite dots + 9 dual lines, axes hidden, frame presented.
    assert_eq!(canvas.shapes().len(), 15);
    assert!(!canvas.axes_visible());
    let frame = canvas.frame().expect("presented frame");
    assert_eq!(frame.width(), 640);
    // Equal aspect over square limits.
    assert_eq!(frame.height(), 640);
}

#[test]
fn unit_circle_duals_only() {
    let mut canvas = test_canvas();
    UnitCircle::new(20)
        .plot(&mut canvas, &PlotArgs::new().width(0.75))
        .unwrap();

    // 20 root duals + 20 direction duals, no markers.
    assert_eq!(canvas.shapes().len(), 40);
    assert!(canvas
        .shapes()
        .iter()
        .all(|s| matches!(s, Shape::Line { .. })));
}

#[test]
fn unit_circle_direction_duals_are_rainbow_colored() {
    let mut canvas = test_canvas();
    let circle = UnitCircle::new(5);
    circle
        .plot(&mut canvas, &PlotArgs::new().width(0.75))
        .unwrap();

    let colors: Vec<Color> = canvas
        .shapes()
        .iter()
        .skip(5) // the root duals, drawn first, are all black
        .map(|s| match s {
            Shape::Line { color, .. } => *color,
            other => panic!("unexpected shape {other:?}"),
        })
        .collect();
    assert_eq!(colors.len(), 5);
    for (i, color) in colors.iter().enumerate() {
        assert_eq!(*color, dualplot::jet(i as f64 / 4.0));
    }
}

#[test]
fn save_writes_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.png");

    let mut canvas = test_canvas();
    TriangularGrid::new()
        .plot(
            &mut canvas,
            &PlotArgs::new().width(0.75).save_to(path.clone()),
        )
        .unwrap();

    let metadata = std::fs::metadata(&path).expect("file written");
    assert!(metadata.len() > 0);
    // A presented frame still exists alongside the saved file.
    assert!(canvas.frame().is_some());
}

#[test]
fn save_without_path_fails_before_drawing() {
    let mut canvas = test_canvas();
    let args = PlotArgs {
        size: None,
        width: Some(0.75),
        save: true,
        path: None,
    };
    let err = UnitCircle::new(4).plot(&mut canvas, &args).unwrap_err();
    assert!(matches!(err, PlotError::InvalidArgument(_)));
    assert!(canvas.shapes().is_empty());
    assert!(canvas.frame().is_none());
}

#[test]
fn plot_with_no_arguments_fails() {
    let mut canvas = test_canvas();
    let err = TriangularGrid::new()
        .plot(&mut canvas, &PlotArgs::new())
        .unwrap_err();
    assert!(matches!(err, PlotError::InvalidArgument(_)));
}

#[test]
fn cubic_curve_matches_driver_usage() {
    // The driver plots duals only; both together must be refused.
    let curve = CubicCurve::new(19).unwrap();
    let mut canvas = test_canvas();
    curve
        .plot(&mut canvas, &PlotArgs::new().width(0.75))
        .unwrap();
    // 19 points, but the middle sample is the origin, whose dual is the
    // line at infinity and is skipped.
    assert_eq!(canvas.shapes().len(), 18);

    let mut canvas = test_canvas();
    let err = curve
        .plot(&mut canvas, &PlotArgs::new().size(5.0).width(0.75))
        .unwrap_err();
    assert!(matches!(err, PlotError::InvalidArgument(_)));
}

#[test]
fn independent_canvases_do_not_interfere() {
    let mut first = test_canvas();
    let mut second = test_canvas();
    TriangularGrid::new()
        .plot(&mut first, &PlotArgs::new().size(5.0))
        .unwrap();
    UnitCircle::new(3)
        .plot(&mut second, &PlotArgs::new().width(0.75))
        .unwrap();
    assert_eq!(first.shapes().len(), 6);
    assert_eq!(second.shapes().len(), 6);
    assert_eq!(first.x_lim(), (-2.0, 2.0));
    assert_eq!(second.x_lim(), (-5.0, 5.0));
}
