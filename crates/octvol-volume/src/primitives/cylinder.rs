use log::debug;
use octvol_math::{try_direction, Dir3, Point3, Vec3};

use super::closed_slack;
use crate::Bbox;

/// Finite cylinder with flat end caps, axis from `p1` to `p2`.
///
/// A zero-length axis or a negative radius gives an empty volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    p1: Point3,
    p2: Point3,
    radius: f64,
    /// Unit axis and its length; `None` when the cylinder is degenerate.
    axis: Option<(Dir3, f64)>,
    tol: f64,
    bb: Bbox,
}

impl Cylinder {
    /// Create a cylinder of `radius` around the segment from `p1` to `p2`.
    pub fn new(p1: Point3, p2: Point3, radius: f64) -> Self {
        let v = p2 - p1;
        let length = v.norm();
        let axis = match try_direction(&v) {
            Some(dir) if radius >= 0.0 => Some((dir, length)),
            _ => {
                debug!("cylinder {p1:?} -> {p2:?} (r={radius}) is degenerate, volume is empty");
                None
            }
        };
        let mut cyl = Self {
            p1,
            p2,
            radius,
            axis,
            tol: closed_slack(&p1, radius.max(length)),
            bb: Bbox::empty(),
        };
        cyl.bb = cyl.calc_bb();
        cyl
    }

    /// Start of the axis.
    pub fn p1(&self) -> Point3 {
        self.p1
    }

    /// End of the axis.
    pub fn p2(&self) -> Point3 {
        self.p2
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Bounding box.
    pub fn bbox(&self) -> &Bbox {
        &self.bb
    }

    /// True if `p` is within `radius` of the axis line and its projection
    /// onto the axis falls between the two caps.
    pub fn is_inside(&self, p: &Point3) -> bool {
        let Some((dir, length)) = &self.axis else {
            return false;
        };
        if !self.bb.is_inside(p) {
            return false;
        }
        let v = p - self.p1;
        let t = v.dot(dir.as_ref());
        if t < -self.tol || t > length + self.tol {
            return false;
        }
        let r = self.radius + self.tol;
        (v - dir.as_ref() * t).norm_squared() <= r * r
    }

    /// Both cap discs, each grown by the disc's extent along every world axis.
    fn calc_bb(&self) -> Bbox {
        let Some((dir, _)) = &self.axis else {
            return Bbox::empty();
        };
        let d = dir.as_ref();
        let disc = Vec3::new(
            (1.0 - d.x * d.x).max(0.0).sqrt(),
            (1.0 - d.y * d.y).max(0.0).sqrt(),
            (1.0 - d.z * d.z).max(0.0).sqrt(),
        ) * self.radius
            + Vec3::repeat(self.tol);
        let mut bb = Bbox::empty();
        bb.add_point_padded(&self.p1, &disc);
        bb.add_point_padded(&self.p2, &disc);
        bb
    }
}
