//! Points of the real projective plane and their dual lines.

use std::fmt;

use crate::types::Vec2;

/// A point of the projective plane in homogeneous coordinates.
///
/// `(x, y, z)` and `(kx, ky, kz)` denote the same projective point for any
/// nonzero `k`, but the type does not normalize: equality is coordinate-wise,
/// so differently-scaled triples compare unequal. A point with `z == 0` is a
/// point at infinity (a direction) and has no finite affine image.
///
/// No triple is rejected, including the degenerate `(0, 0, 0)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// An affine point, i.e. `z = 1`.
    #[inline]
    pub const fn affine(x: f64, y: f64) -> Self {
        Self { x, y, z: 1.0 }
    }

    /// Whether this is a point at infinity (`z == 0`).
    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        self.z == 0.0
    }

    /// The affine image `(x/z, y/z)`, or `None` for a point at infinity.
    #[inline]
    pub fn image(&self) -> Option<Vec2> {
        (self.z != 0.0).then(|| Vec2::new(self.x / self.z, self.y / self.z))
    }

    /// The dual of this point under the point-line duality of the projective
    /// plane.
    ///
    /// The line corresponding to the point `[a : b : c]` is
    /// `aX + bY + cZ = 0`. That rearranges to `Y = mX + k` only when `b` is
    /// nonzero; if `b` is zero the line is either vertical (`a != 0`) or the
    /// line at infinity (`a == 0`), which has no finite representation and
    /// comes back as [`DualLine::AT_INFINITY`].
    ///
    /// The branch conditions are exact zero comparisons: callers intending an
    /// axis-aligned or infinite case are expected to pass exact zeros.
    pub fn dual(&self) -> DualLine {
        if self.y == 0.0 {
            if self.x == 0.0 {
                return DualLine::AT_INFINITY;
            }
            let x = -self.z / self.x;
            return DualLine::new(Vec2::new(x, -1.0), Vec2::new(x, 1.0));
        }

        let m = -self.x / self.y;
        let k = -self.z / self.y;
        DualLine::new(Vec2::new(-1.0, -m + k), Vec2::new(1.0, m + k))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The value of the dual transform: two 2D points that the (infinite) dual
/// line passes through.
///
/// Recomputed on demand from a [`Point`], never cached. The line at infinity
/// is represented by the [`DualLine::AT_INFINITY`] sentinel, which drawing
/// code must skip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DualLine {
    pub a: Vec2,
    pub b: Vec2,
}

impl DualLine {
    /// Sentinel for the line at infinity: both points at `(inf, inf)`.
    pub const AT_INFINITY: DualLine = DualLine {
        a: Vec2::INFINITY,
        b: Vec2::INFINITY,
    };

    #[inline]
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Whether this is the line at infinity (no finite representation).
    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        !self.a.is_finite() || !self.b.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertical_branch() {
        // -c/a = -(-10)/5 = 2
        let d = Point::new(5.0, 0.0, -10.0).dual();
        assert_eq!(d, DualLine::new(Vec2::new(2.0, -1.0), Vec2::new(2.0, 1.0)));
        assert!(!d.is_at_infinity());
    }

    #[test]
    fn slope_branch() {
        // m = -1, k = 0
        let d = Point::new(1.0, 1.0, 0.0).dual();
        assert_eq!(d, DualLine::new(Vec2::new(-1.0, 1.0), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn infinity_sentinel() {
        let d = Point::new(0.0, 0.0, 5.0).dual();
        assert_eq!(d, DualLine::AT_INFINITY);
        assert!(d.is_at_infinity());
    }

    #[test]
    fn degenerate_origin_maps_to_sentinel() {
        assert_eq!(Point::new(0.0, 0.0, 0.0).dual(), DualLine::AT_INFINITY);
    }

    #[test]
    fn point_at_infinity_has_no_image_but_has_a_dual() {
        let p = Point::new(3.0, -2.0, 0.0);
        assert!(p.is_at_infinity());
        assert_eq!(p.image(), None);
        assert!(!p.dual().is_at_infinity());
    }

    #[test]
    fn affine_image_divides_by_z() {
        let p = Point::new(2.0, 4.0, 2.0);
        assert_eq!(p.image(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(Point::affine(1.0, -3.0).image(), Some(Vec2::new(1.0, -3.0)));
    }

    #[test]
    fn scaled_triples_are_distinct_values() {
        assert_ne!(Point::new(1.0, 2.0, 1.0), Point::new(2.0, 4.0, 2.0));
    }

    #[test]
    fn dual_of_dual_preserves_slope_and_intercept() {
        for p in [
            Point::new(3.0, 2.0, -1.0),
            Point::new(-0.5, 4.0, 7.0),
            Point::affine(1.0, 1.0),
        ] {
            let d = p.dual();
            // Recover Y = mX + k from the two sample points at X = -1 and X = 1,
            // rebuild the point [-m : 1 : -k], and dualize again.
            let m = (d.b.y - d.a.y) / 2.0;
            let k = (d.a.y + d.b.y) / 2.0;
            let d2 = Point::new(-m, 1.0, -k).dual();
            assert_relative_eq!(d2.a.x, d.a.x, max_relative = 1e-12);
            assert_relative_eq!(d2.a.y, d.a.y, max_relative = 1e-12);
            assert_relative_eq!(d2.b.x, d.b.x, max_relative = 1e-12);
            assert_relative_eq!(d2.b.y, d.b.y, max_relative = 1e-12);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.0, -2.0, 0.0).to_string(), "(1, -2, 0)");
    }
}
