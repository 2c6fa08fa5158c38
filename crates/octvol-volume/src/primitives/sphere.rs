use log::debug;
use octvol_math::{Point3, Vec3};

use super::closed_slack;
use crate::Bbox;

/// Sphere centered at `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    tol: f64,
    bb: Bbox,
}

impl Sphere {
    /// Create a sphere. A negative radius gives an empty volume.
    pub fn new(center: Point3, radius: f64) -> Self {
        if radius < 0.0 {
            debug!("sphere at {center:?} has negative radius {radius}, volume is empty");
        }
        let mut sphere = Self {
            center,
            radius,
            tol: closed_slack(&center, radius),
            bb: Bbox::empty(),
        };
        sphere.bb = sphere.calc_bb();
        sphere
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Bounding box.
    pub fn bbox(&self) -> &Bbox {
        &self.bb
    }

    /// True if `‖p − center‖ ≤ radius`.
    pub fn is_inside(&self, p: &Point3) -> bool {
        if !self.bb.is_inside(p) {
            return false;
        }
        let r = self.radius + self.tol;
        (p - self.center).norm_squared() <= r * r
    }

    fn calc_bb(&self) -> Bbox {
        if self.radius < 0.0 {
            return Bbox::empty();
        }
        let mut bb = Bbox::empty();
        bb.add_point_padded(&self.center, &Vec3::repeat(self.radius + self.tol));
        bb
    }
}
