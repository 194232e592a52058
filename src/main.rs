//! Plot points and their duals.

use std::fs;

use dualplot::graphs::{CubicCurve, TriangularGrid, UnitCircle};
use dualplot::{Canvas, PlotArgs, PlotError, PointSet};

fn main() -> Result<(), PlotError> {
    env_logger::init();
    fs::create_dir_all("assets")?;

    TriangularGrid::new().plot(
        &mut Canvas::new(),
        &PlotArgs::new()
            .size(5.0)
            .width(0.75)
            .save_to("assets/triangular-grid.png"),
    )?;

    UnitCircle::new(20).plot(
        &mut Canvas::new(),
        &PlotArgs::new().width(0.75).save_to("assets/unit-circle.png"),
    )?;

    // The cubic curve draws duals only; see CubicCurve::validate_args.
    let cubics: [(usize, f64, &str); 7] = [
        (19, 0.75, "assets/cubic-dual-19.png"),
        (19, 2.0, "assets/cubic-dual-19-thick.png"),
        (19, 3.0, "assets/cubic-dual-19-thicker.png"),
        (41, 0.75, "assets/cubic-dual-41.png"),
        (61, 0.75, "assets/cubic-dual-61.png"),
        (101, 0.75, "assets/cubic-dual-101.png"),
        (151, 0.75, "assets/cubic-dual-151.png"),
    ];
    for (number, width, path) in cubics {
        CubicCurve::new(number)?.plot(
            &mut Canvas::new(),
            &PlotArgs::new().width(width).save_to(path),
        )?;
    }

    Ok(())
}
