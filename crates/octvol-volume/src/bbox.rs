//! Axis-aligned bounding box.
//!
//! Used as a broadphase filter: a point outside a volume's box is outside
//! the volume, so the exact containment test only runs for points that
//! pass this one.

use octvol_math::{Point3, Vec3};

/// Axis-aligned bounding box in 3D.
///
/// The default box is empty (inverted bounds) and contains no points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    /// Minimum X.
    pub min_x: f64,
    /// Maximum X.
    pub max_x: f64,
    /// Minimum Y.
    pub min_y: f64,
    /// Maximum Y.
    pub max_y: f64,
    /// Minimum Z.
    pub min_z: f64,
    /// Maximum Z.
    pub max_z: f64,
}

impl Bbox {
    /// Create a box from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
            min_z: min.z,
            max_z: max.z,
        }
    }

    /// Create an empty (inverted) box suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    /// Smallest box containing all `points`. Empty if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.add_point(p);
        }
        bb
    }

    /// True if no point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y || self.min_z > self.max_z
    }

    /// Minimum corner.
    pub fn min(&self) -> Point3 {
        Point3::new(self.min_x, self.min_y, self.min_z)
    }

    /// Maximum corner.
    pub fn max(&self) -> Point3 {
        Point3::new(self.max_x, self.max_y, self.max_z)
    }

    /// Test if `p` lies inside the box (bounds inclusive).
    pub fn is_inside(&self, p: &Point3) -> bool {
        p.x >= self.min_x
            && p.x <= self.max_x
            && p.y >= self.min_y
            && p.y <= self.max_y
            && p.z >= self.min_z
            && p.z <= self.max_z
    }

    /// Expand the box to include a point. Never shrinks.
    pub fn add_point(&mut self, p: &Point3) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
        self.min_z = self.min_z.min(p.z);
        self.max_z = self.max_z.max(p.z);
    }

    /// Expand the box to include `p` grown by `half` on each axis.
    pub(crate) fn add_point_padded(&mut self, p: &Point3, half: &Vec3) {
        self.add_point(&(p - half));
        self.add_point(&(p + half));
    }

    /// Expand the box to contain another box.
    pub fn union(&mut self, other: &Bbox) {
        if other.is_empty() {
            return;
        }
        self.add_point(&other.min());
        self.add_point(&other.max());
    }

    /// Test if two boxes overlap (touching counts as overlap).
    pub fn overlaps(&self, other: &Bbox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
            && self.min_z <= other.max_z
            && self.max_z >= other.min_z
    }

    /// Expand the box by a tolerance in all directions.
    pub fn expand(&mut self, tol: f64) {
        if self.is_empty() {
            return;
        }
        self.min_x -= tol;
        self.min_y -= tol;
        self.min_z -= tol;
        self.max_x += tol;
        self.max_y += tol;
        self.max_z += tol;
    }
}

impl Default for Bbox {
    fn default() -> Self {
        Self::empty()
    }
}
