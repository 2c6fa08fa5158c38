#![warn(missing_docs)]

//! Math types for octvol.
//!
//! Thin wrappers around nalgebra providing the point, vector and direction
//! types used by the containment volumes, plus the tolerance constants that
//! make boundary classification reproducible.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
    /// Slack for dimensionless parameters (box coordinates, normalized radii).
    pub parametric: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 mm linear, 1e-9 parametric).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        parametric: 1e-9,
    };

    /// Linear slack for a closed-set comparison against a shape of size `scale`.
    ///
    /// Grows with the shape so that boundary points built from large
    /// coordinates still round onto the inside.
    pub fn slack(&self, scale: f64) -> f64 {
        self.linear * scale.abs().max(1.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Normalize `v`, or return `None` if it is shorter than the linear tolerance.
pub fn try_direction(v: &Vec3) -> Option<Dir3> {
    Unit::try_new(*v, Tolerance::DEFAULT.linear)
}

/// Build an orthonormal pair `(u, w)` perpendicular to `dir`.
///
/// `(u, w, dir)` is right-handed. `u` is kept in the XY plane unless `dir`
/// is nearly vertical, so a move along +X gets `u = +Y` and `w = +Z`.
pub fn perpendicular_basis(dir: &Dir3) -> (Vec3, Vec3) {
    let d = dir.as_ref();
    let seed = if d.z.abs() < 0.9 {
        Vec3::z()
    } else {
        Vec3::x()
    };
    let u = seed.cross(d).normalize();
    let w = d.cross(&u);
    (u, w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_slack_scales_with_size() {
        let tol = Tolerance::DEFAULT;
        assert_relative_eq!(tol.slack(0.5), tol.linear);
        assert_relative_eq!(tol.slack(1000.0), tol.linear * 1000.0);
    }

    #[test]
    fn test_try_direction_zero() {
        assert!(try_direction(&Vec3::zeros()).is_none());
        let d = try_direction(&Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(d.as_ref().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perpendicular_basis_orthonormal() {
        for v in [
            Vec3::x(),
            Vec3::y(),
            Vec3::z(),
            -Vec3::z(),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.2, 0.1, 5.0),
        ] {
            let d = try_direction(&v).unwrap();
            let (u, w) = perpendicular_basis(&d);
            assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(w.norm(), 1.0, epsilon = 1e-12);
            assert!(u.dot(&w).abs() < 1e-12);
            assert!(u.dot(d.as_ref()).abs() < 1e-12);
            assert!(w.dot(d.as_ref()).abs() < 1e-12);
            // right-handed
            assert_relative_eq!(u.cross(&w), *d.as_ref(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_perpendicular_basis_x_move_stays_in_xy() {
        let d = try_direction(&Vec3::x()).unwrap();
        let (u, _) = perpendicular_basis(&d);
        assert!(u.z.abs() < 1e-12);
    }
}
