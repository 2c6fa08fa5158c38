use log::debug;
use octvol_math::{Point3, Vec3};

use super::closed_slack;
use crate::Bbox;

/// Axis-aligned cube at `center` with side length `side`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    center: Point3,
    side: f64,
    tol: f64,
    bb: Bbox,
}

impl Cube {
    /// Create a cube. A negative side gives an empty volume.
    pub fn new(center: Point3, side: f64) -> Self {
        if side < 0.0 {
            debug!("cube at {center:?} has negative side {side}, volume is empty");
        }
        let mut cube = Self {
            center,
            side,
            tol: closed_slack(&center, side),
            bb: Bbox::empty(),
        };
        cube.bb = cube.calc_bb();
        cube
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Side length.
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Bounding box. For a cube this is the cube itself.
    pub fn bbox(&self) -> &Bbox {
        &self.bb
    }

    /// True if the Chebyshev distance from the center is at most `side / 2`.
    pub fn is_inside(&self, p: &Point3) -> bool {
        if !self.bb.is_inside(p) {
            return false;
        }
        (p - self.center).amax() <= self.side / 2.0 + self.tol
    }

    fn calc_bb(&self) -> Bbox {
        if self.side < 0.0 {
            return Bbox::empty();
        }
        let mut bb = Bbox::empty();
        bb.add_point_padded(&self.center, &Vec3::repeat(self.side / 2.0 + self.tol));
        bb
    }
}
