//! Glue between volumes and the octree that queries them.
//!
//! The octree owns its node addressing; all a volume needs from a node is
//! the cube it covers, described through [`NodeExtent`].

use octvol_math::{Point3, Vec3};

use crate::{Bbox, OctVolume};

/// The cubic region covered by an octree node.
pub trait NodeExtent {
    /// Center of the node cube.
    fn center(&self) -> Point3;

    /// Half the side length of the node cube.
    fn scale(&self) -> f64;

    /// Axis-aligned box of the node cube.
    fn bbox(&self) -> Bbox {
        let c = self.center();
        let s = Vec3::repeat(self.scale());
        Bbox::new(c - s, c + s)
    }

    /// The eight cube corners in Morton order: (-x-y-z), (+x-y-z), (-x+y-z),
    /// (+x+y-z), (-x-y+z), (+x-y+z), (-x+y+z), (+x+y+z).
    fn corners(&self) -> [Point3; 8] {
        let c = self.center();
        let s = self.scale();
        std::array::from_fn(|i| {
            Point3::new(
                if i & 1 == 0 { c.x - s } else { c.x + s },
                if i & 2 == 0 { c.y - s } else { c.y + s },
                if i & 4 == 0 { c.z - s } else { c.z + s },
            )
        })
    }
}

/// A plain node cube, for octrees that do not carry their own extent type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Cube center.
    pub center: Point3,
    /// Half side length.
    pub scale: f64,
}

impl Cell {
    /// Create a cell.
    pub fn new(center: Point3, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Child cell `index` (0..8) in the same Morton order as [`NodeExtent::corners`].
    ///
    /// Only the low three bits of `index` are read; debug builds panic on
    /// an index of 8 or more.
    pub fn child(&self, index: usize) -> Cell {
        debug_assert!(index < 8, "child index {index} out of range");
        let h = self.scale / 2.0;
        let offset = Vec3::new(
            if index & 1 == 0 { -h } else { h },
            if index & 2 == 0 { -h } else { h },
            if index & 4 == 0 { -h } else { h },
        );
        Cell::new(self.center + offset, h)
    }

    /// All eight children.
    pub fn children(&self) -> [Cell; 8] {
        std::array::from_fn(|i| self.child(i))
    }
}

impl NodeExtent for Cell {
    fn center(&self) -> Point3 {
        self.center
    }

    fn scale(&self) -> f64 {
        self.scale
    }
}

/// How a node cube relates to a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// The node's cube misses the volume's bounding box.
    Outside,
    /// All corners and the center are inside the volume.
    Inside,
    /// Anything else; the octree should subdivide.
    Boundary,
}

/// Classify an octree node against a volume.
///
/// [`CellClass::Inside`] is a sampling verdict (corners plus center), the
/// same one an octree uses to mark a node as material. A thin feature can
/// still poke through a node that samples as inside.
pub fn classify_cell(volume: &OctVolume, node: &impl NodeExtent) -> CellClass {
    if !volume.is_inside_bbo(node) {
        return CellClass::Outside;
    }
    let all_inside = volume.is_inside(&node.center())
        && node.corners().iter().all(|p| volume.is_inside(p));
    if all_inside {
        CellClass::Inside
    } else {
        CellClass::Boundary
    }
}
