use log::debug;
use nalgebra::Matrix3;
use octvol_math::{Point3, Tolerance, Vec3};

use super::closed_slack;
use crate::Bbox;

/// Parallelepiped spanned by three edge vectors from a corner.
///
/// Interior points are `corner + a*v1 + b*v2 + c*v3` with `a, b, c` in
/// `[0, 1]`. The edges need not be orthogonal. Coplanar edges give an
/// empty volume.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxVolume {
    corner: Point3,
    v1: Vec3,
    v2: Vec3,
    v3: Vec3,
    /// Inverse of `[v1 v2 v3]`, mapping world offsets to box coordinates.
    to_local: Option<Matrix3<f64>>,
    /// Per-coordinate slack: the linear slack measured in box coordinates.
    face_tol: Vec3,
    bb: Bbox,
}

impl BoxVolume {
    /// Create a box from `corner` along `v1`, `v2` and `v3`.
    pub fn new(corner: Point3, v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        let m = Matrix3::from_columns(&[v1, v2, v3]);
        // relative volume test, so that a thin but valid box is not rejected
        let scale = v1.norm() * v2.norm() * v3.norm();
        let to_local = if m.determinant().abs() > Tolerance::DEFAULT.parametric * scale {
            m.try_inverse()
        } else {
            None
        };
        if to_local.is_none() {
            debug!("box at {corner:?} has coplanar edges, volume is empty");
        }
        // row i of the inverse is the face normal of coordinate i scaled by
        // 1/height, so slack * |row i| keeps every face within `slack`
        let slack = closed_slack(&corner, v1.norm() + v2.norm() + v3.norm());
        let face_tol = to_local
            .map(|inv| Vec3::from_fn(|i, _| slack * inv.row(i).norm()))
            .unwrap_or_else(Vec3::zeros);
        let mut b = Self {
            corner,
            v1,
            v2,
            v3,
            to_local,
            face_tol,
            bb: Bbox::empty(),
        };
        b.bb = b.calc_bb();
        b
    }

    /// Corner the edges start from.
    pub fn corner(&self) -> Point3 {
        self.corner
    }

    /// The three edge vectors.
    pub fn edges(&self) -> [Vec3; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Bounding box.
    pub fn bbox(&self) -> &Bbox {
        &self.bb
    }

    /// Box coordinates `(a, b, c)` of `p`, if the box is not degenerate.
    pub fn local_coords(&self, p: &Point3) -> Option<Vec3> {
        self.to_local.map(|inv| inv * (p - self.corner))
    }

    /// True if all three box coordinates of `p` lie in `[0, 1]`.
    pub fn is_inside(&self, p: &Point3) -> bool {
        if !self.bb.is_inside(p) {
            return false;
        }
        let Some(abc) = self.local_coords(p) else {
            return false;
        };
        abc.iter()
            .zip(self.face_tol.iter())
            .all(|(&t, &tol)| (-tol..=1.0 + tol).contains(&t))
    }

    fn calc_bb(&self) -> Bbox {
        if self.to_local.is_none() {
            return Bbox::empty();
        }
        let mut bb = Bbox::empty();
        for i in 0..8 {
            let mut p = self.corner;
            if i & 1 != 0 {
                p += self.v1;
            }
            if i & 2 != 0 {
                p += self.v2;
            }
            if i & 4 != 0 {
                p += self.v3;
            }
            bb.add_point(&p);
        }
        let size = self.v1.norm() + self.v2.norm() + self.v3.norm();
        bb.expand(closed_slack(&self.corner, size));
        bb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skewed() -> BoxVolume {
        BoxVolume::new(
            Point3::new(1.0, -2.0, 0.5),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(1.0, 3.0, 0.0),
            Vec3::new(0.5, 0.5, 2.0),
        )
    }

    #[test]
    fn test_box_corners_inside() {
        let b = skewed();
        let [v1, v2, v3] = b.edges();
        for a in [0.0, 1.0] {
            for bb in [0.0, 1.0] {
                for c in [0.0, 1.0] {
                    let p = b.corner() + v1 * a + v2 * bb + v3 * c;
                    assert!(b.is_inside(&p), "corner ({a}, {bb}, {c})");
                }
            }
        }
    }

    #[test]
    fn test_box_just_outside_each_face() {
        let b = skewed();
        let [v1, v2, v3] = b.edges();
        let center = b.corner() + (v1 + v2 + v3) * 0.5;
        assert!(b.is_inside(&center));
        assert!(!b.is_inside(&(b.corner() + v1 * -0.0001 + v2 * 0.5 + v3 * 0.5)));
        assert!(!b.is_inside(&(b.corner() + v1 * 0.5 + v2 * 1.0001 + v3 * 0.5)));
        assert!(!b.is_inside(&(b.corner() + v1 * 0.5 + v2 * 0.5 + v3 * -0.0001)));
    }

    #[test]
    fn test_box_skew_excludes_bbox_corner() {
        let b = skewed();
        // the bbox min corner is not a box corner for sheared edges
        let bb = b.bbox();
        let probe = Point3::new(bb.max_x - 1e-3, bb.min_y + 1e-3, bb.min_z + 1e-3);
        assert!(bb.is_inside(&probe));
        assert!(!b.is_inside(&probe));
    }

    #[test]
    fn test_box_local_coords() {
        let b = skewed();
        let [v1, v2, v3] = b.edges();
        let p = b.corner() + v1 * 0.25 + v2 * 0.5 + v3 * 0.75;
        let abc = b.local_coords(&p).unwrap();
        assert!((abc - Vec3::new(0.25, 0.5, 0.75)).norm() < 1e-12);
    }

    #[test]
    fn test_box_far_from_origin_keeps_corners() {
        // thin skewed box whose coordinates dwarf its edges
        let b = BoxVolume::new(
            Point3::new(1.0e7, -1.3e7, 0.7e7),
            Vec3::new(0.01, 0.0, 0.0),
            Vec3::new(0.003, 0.01, 0.0),
            Vec3::new(0.002, 0.001, 0.01),
        );
        let [v1, v2, v3] = b.edges();
        for i in 0..8 {
            let (a, bb, c) = ((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64);
            let p = b.corner() + v1 * a + v2 * bb + v3 * c;
            assert!(b.is_inside(&p), "corner {i}");
        }
        assert!(b.is_inside(&(b.corner() + (v1 + v2 + v3) * 0.5)));
    }

    #[test]
    fn test_box_far_from_origin_rejects_outside() {
        let b = BoxVolume::new(
            Point3::new(1.0e7, 1.0e7, -1.0e7),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.3, 1.0, 0.0),
            Vec3::new(0.2, 0.1, 1.0),
        );
        let [v1, v2, v3] = b.edges();
        for i in 0..8 {
            let (a, bb, c) = ((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64);
            assert!(b.is_inside(&(b.corner() + v1 * a + v2 * bb + v3 * c)), "corner {i}");
        }
        // the linear slack here is 0.01, each probe sits well past a face
        assert!(!b.is_inside(&(b.corner() + v1 * -0.1 + v2 * 0.5 + v3 * 0.5)));
        assert!(!b.is_inside(&(b.corner() + v1 * 0.5 + v2 * 1.1 + v3 * 0.5)));
        assert!(!b.is_inside(&(b.corner() + v1 * 0.5 + v2 * 0.5 + v3 * 1.1)));
    }

    #[test]
    fn test_box_coplanar_edges_empty() {
        let b = BoxVolume::new(
            Point3::origin(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        );
        assert!(b.bbox().is_empty());
        assert!(!b.is_inside(&Point3::new(0.5, 0.5, 0.0)));

        let flat = BoxVolume::new(Point3::origin(), Vec3::x(), Vec3::y(), Vec3::zeros());
        assert!(!flat.is_inside(&Point3::origin()));
    }
}
