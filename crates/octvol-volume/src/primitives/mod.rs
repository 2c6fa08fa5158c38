//! Primitive containment volumes.
//!
//! Every primitive is a closed set: points on the boundary are inside.
//! Each one computes its bounding box once in its constructor and checks
//! that box before running the exact test.

mod cube;
mod cylinder;
mod etube;
mod parallelepiped;
mod sphere;

pub use cube::Cube;
pub use cylinder::Cylinder;
pub use etube::EllipticalTube;
pub use parallelepiped::BoxVolume;
pub use sphere::Sphere;

use octvol_math::{Point3, Tolerance};

/// Linear slack for a shape of characteristic `size` placed near `anchor`.
///
/// Rounding error in `p - anchor` grows with the coordinate magnitude, so
/// the anchor's coordinates count towards the scale.
pub(crate) fn closed_slack(anchor: &Point3, size: f64) -> f64 {
    Tolerance::DEFAULT.slack(size.abs().max(anchor.coords.amax()))
}
