//! Swept volume of a cylindrical cutter moving in a straight line.
//!
//! The sweep of a cylinder translated along its own axis is again a
//! flat-capped cylinder, so it decomposes exactly into closed-form pieces:
//!
//! - two [`Cylinder`] end-caps, the cutter at rest at each endpoint
//! - one [`EllipticalTube`] side wall, with equal axes so the ellipse is a circle
//! - one [`BoxVolume`] core, the square prism inscribed in the wall
//!
//! No sampling of intermediate cutter positions is needed.

use log::debug;
use octvol_math::{perpendicular_basis, try_direction, Dir3, Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::primitives::{BoxVolume, Cylinder, EllipticalTube};
use crate::Bbox;

/// A cylindrical (flat end mill) cutter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylCutter {
    /// Cutter diameter in mm.
    pub diameter: f64,
}

impl CylCutter {
    /// Create a cutter of the given diameter.
    pub fn new(diameter: f64) -> Self {
        Self { diameter }
    }

    /// Cutter radius.
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Volume swept by a cylindrical cutter of `radius` moving from `p1` to `p2`.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderMoveVolume {
    p1: Point3,
    p2: Point3,
    radius: f64,
    c1: Cylinder,
    c2: Cylinder,
    etube: EllipticalTube,
    core: BoxVolume,
    bb: Bbox,
}

impl CylinderMoveVolume {
    /// Build the sweep for a move `p1 -> p2` with cutter `radius`.
    ///
    /// A zero-length move falls back to the cutter at rest: a cylinder of
    /// `radius` standing on `p1` along +Z with height `radius`. A zero or
    /// negative radius sweeps nothing.
    pub fn new(p1: Point3, p2: Point3, radius: f64) -> Self {
        if radius < 0.0 {
            debug!("move {p1:?} -> {p2:?} has negative cutter radius {radius}, volume is empty");
        }
        let r = radius.max(0.0);
        let travel = p2 - p1;
        let (dir, moving) = match try_direction(&travel) {
            Some(dir) => (dir, true),
            None => {
                debug!("zero-length move at {p1:?}, sweep reduces to the cutter at rest");
                (Dir3::new_unchecked(Vec3::z()), false)
            }
        };
        let d = dir.into_inner();
        let (u, w) = perpendicular_basis(&dir);

        let c1;
        let c2;
        if moving {
            let cap = r.min(travel.norm());
            c1 = Cylinder::new(p1, p1 + d * cap, r);
            c2 = Cylinder::new(p2 - d * cap, p2, r);
        } else {
            c1 = Cylinder::new(p1, p1 + d * r, r);
            c2 = c1.clone();
        }
        let etube = EllipticalTube::new(p1, p2, u * r, w * r);
        let core = BoxVolume::new(p1 - u * r, travel, (u + w) * r, (u - w) * r);

        let mut bb = Bbox::empty();
        for child in [c1.bbox(), c2.bbox(), etube.bbox(), core.bbox()] {
            bb.union(child);
        }

        Self {
            p1,
            p2,
            radius,
            c1,
            c2,
            etube,
            core,
            bb,
        }
    }

    /// Build the sweep of `cutter` moving from `p1` to `p2`.
    pub fn from_cutter(cutter: &CylCutter, p1: Point3, p2: Point3) -> Self {
        Self::new(p1, p2, cutter.radius())
    }

    /// Start of the move.
    pub fn p1(&self) -> Point3 {
        self.p1
    }

    /// End of the move.
    pub fn p2(&self) -> Point3 {
        self.p2
    }

    /// Cutter radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// End-caps at `p1` and `p2`.
    pub fn caps(&self) -> (&Cylinder, &Cylinder) {
        (&self.c1, &self.c2)
    }

    /// Side wall.
    pub fn etube(&self) -> &EllipticalTube {
        &self.etube
    }

    /// Core box.
    pub fn core(&self) -> &BoxVolume {
        &self.core
    }

    /// Bounding box, the union of the four parts' boxes.
    pub fn bbox(&self) -> &Bbox {
        &self.bb
    }

    /// True if `p` is inside any of the four parts.
    pub fn is_inside(&self, p: &Point3) -> bool {
        if !self.bb.is_inside(p) {
            return false;
        }
        // cheapest first: the core is one matrix product
        self.core.is_inside(p)
            || self.c1.is_inside(p)
            || self.c2.is_inside(p)
            || self.etube.is_inside(p)
    }
}
