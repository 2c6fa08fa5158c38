#![warn(missing_docs)]

//! Point-containment volumes for octree stock simulation.
//!
//! An octree-based material-removal simulator asks one question of every
//! volume: is this sample point inside? This crate answers it for a closed
//! family of shapes, each guarded by a bounding box so that most points are
//! rejected with six comparisons.
//!
//! # Volumes
//!
//! - [`Sphere`], [`Cube`], [`Cylinder`], [`BoxVolume`] (parallelepiped) and
//!   [`EllipticalTube`] primitives
//! - [`CylinderMoveVolume`], the volume swept by a cylindrical cutter along a
//!   straight move, built as the union of two cylinders, a tube and a box
//!
//! All of them are variants of [`OctVolume`].
//!
//! # Example
//!
//! ```
//! use octvol_math::Point3;
//! use octvol_volume::{classify_cell, Cell, CellClass, OctVolume};
//!
//! // A 2 mm cutter moving 10 mm along X
//! let sweep = OctVolume::cylinder_move(Point3::origin(), Point3::new(10.0, 0.0, 0.0), 1.0);
//!
//! assert!(sweep.is_inside(&Point3::new(5.0, 0.0, 0.0)));
//! assert!(!sweep.is_inside(&Point3::new(5.0, 0.0, 1.0001)));
//!
//! // Octree pruning
//! let far = Cell::new(Point3::new(50.0, 0.0, 0.0), 4.0);
//! assert_eq!(classify_cell(&sweep, &far), CellClass::Outside);
//! ```

mod bbox;
mod cylmove;
pub mod def;
mod error;
mod node;
pub mod primitives;
pub mod sample;
mod volume;

pub use bbox::Bbox;
pub use cylmove::{CylCutter, CylinderMoveVolume};
pub use def::VolumeDef;
pub use error::{Result, VolumeError};
pub use node::{classify_cell, Cell, CellClass, NodeExtent};
pub use primitives::{BoxVolume, Cube, Cylinder, EllipticalTube, Sphere};
pub use volume::OctVolume;
