//! The closed set of containment volumes.

use octvol_math::{Point3, Vec3};

use crate::cylmove::CylinderMoveVolume;
use crate::node::NodeExtent;
use crate::primitives::{BoxVolume, Cube, Cylinder, EllipticalTube, Sphere};
use crate::Bbox;

/// A solid volume that can classify points as inside or outside.
///
/// Volumes are immutable once built; every query takes `&self` and is safe
/// to run from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub enum OctVolume {
    /// Sphere.
    Sphere(Sphere),
    /// Axis-aligned cube.
    Cube(Cube),
    /// Finite flat-capped cylinder.
    Cylinder(Cylinder),
    /// Parallelepiped.
    Box(BoxVolume),
    /// Elliptical tube.
    EllipticalTube(EllipticalTube),
    /// Swept volume of a cylindrical cutter move.
    CylinderMove(CylinderMoveVolume),
}

impl OctVolume {
    /// Sphere at `center` with `radius`.
    pub fn sphere(center: Point3, radius: f64) -> Self {
        Sphere::new(center, radius).into()
    }

    /// Cube at `center` with side length `side`.
    pub fn cube(center: Point3, side: f64) -> Self {
        Cube::new(center, side).into()
    }

    /// Cylinder of `radius` around the segment from `p1` to `p2`.
    pub fn cylinder(p1: Point3, p2: Point3, radius: f64) -> Self {
        Cylinder::new(p1, p2, radius).into()
    }

    /// Parallelepiped from `corner` along `v1`, `v2`, `v3`.
    pub fn parallelepiped(corner: Point3, v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        BoxVolume::new(corner, v1, v2, v3).into()
    }

    /// Elliptical tube for the move `p1 -> p2` with ellipse axes `a`, `b`.
    pub fn elliptical_tube(p1: Point3, p2: Point3, a: Vec3, b: Vec3) -> Self {
        EllipticalTube::new(p1, p2, a, b).into()
    }

    /// Sweep of a cylindrical cutter of `radius` moving `p1 -> p2`.
    pub fn cylinder_move(p1: Point3, p2: Point3, radius: f64) -> Self {
        CylinderMoveVolume::new(p1, p2, radius).into()
    }

    /// Exact containment test. Boundary points are inside.
    pub fn is_inside(&self, p: &Point3) -> bool {
        match self {
            OctVolume::Sphere(v) => v.is_inside(p),
            OctVolume::Cube(v) => v.is_inside(p),
            OctVolume::Cylinder(v) => v.is_inside(p),
            OctVolume::Box(v) => v.is_inside(p),
            OctVolume::EllipticalTube(v) => v.is_inside(p),
            OctVolume::CylinderMove(v) => v.is_inside(p),
        }
    }

    /// Bounding box, computed once at construction.
    pub fn bbox(&self) -> &Bbox {
        match self {
            OctVolume::Sphere(v) => v.bbox(),
            OctVolume::Cube(v) => v.bbox(),
            OctVolume::Cylinder(v) => v.bbox(),
            OctVolume::Box(v) => v.bbox(),
            OctVolume::EllipticalTube(v) => v.bbox(),
            OctVolume::CylinderMove(v) => v.bbox(),
        }
    }

    /// Bounding-box-only test. A `true` result does not mean the point is
    /// inside the volume; a `false` result means it is not.
    pub fn is_inside_bb(&self, p: &Point3) -> bool {
        self.bbox().is_inside(p)
    }

    /// True if the octree node's cube overlaps the bounding box.
    ///
    /// Nodes for which this is false can be skipped together with their
    /// whole subtree.
    pub fn is_inside_bbo(&self, node: &impl NodeExtent) -> bool {
        self.bbox().overlaps(&node.bbox())
    }
}

impl From<Sphere> for OctVolume {
    fn from(v: Sphere) -> Self {
        OctVolume::Sphere(v)
    }
}

impl From<Cube> for OctVolume {
    fn from(v: Cube) -> Self {
        OctVolume::Cube(v)
    }
}

impl From<Cylinder> for OctVolume {
    fn from(v: Cylinder) -> Self {
        OctVolume::Cylinder(v)
    }
}

impl From<BoxVolume> for OctVolume {
    fn from(v: BoxVolume) -> Self {
        OctVolume::Box(v)
    }
}

impl From<EllipticalTube> for OctVolume {
    fn from(v: EllipticalTube) -> Self {
        OctVolume::EllipticalTube(v)
    }
}

impl From<CylinderMoveVolume> for OctVolume {
    fn from(v: CylinderMoveVolume) -> Self {
        OctVolume::CylinderMove(v)
    }
}
