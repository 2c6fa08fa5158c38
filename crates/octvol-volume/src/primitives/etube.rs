use log::debug;
use nalgebra::{Matrix2, Vector2};
use octvol_math::{try_direction, Dir3, Point3, Tolerance, Vec3};

use super::closed_slack;
use crate::Bbox;

/// Elliptical tube: an ellipse with axes `a` and `b` swept from `p1` to `p2`.
///
/// The ellipse lies in the plane perpendicular to the move. Any component of
/// `a` or `b` along the move is dropped. The cross-section is a circle when
/// the projected axes are orthogonal and of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipticalTube {
    p1: Point3,
    p2: Point3,
    a: Vec3,
    b: Vec3,
    frame: Option<TubeFrame>,
    tol: f64,
    bb: Bbox,
}

/// Move direction plus the ellipse basis projected perpendicular to it.
#[derive(Debug, Clone, PartialEq)]
struct TubeFrame {
    dir: Dir3,
    length: f64,
    a: Vec3,
    b: Vec3,
    /// Inverse Gram matrix of `(a, b)`, for solving `q = alpha*a + beta*b`.
    gram_inv: Matrix2<f64>,
    /// Bound on `alpha^2 + beta^2` for points within the linear slack.
    radial_limit: f64,
}

impl TubeFrame {
    fn new(p1: &Point3, p2: &Point3, a: &Vec3, b: &Vec3, tol: f64) -> Option<Self> {
        let v = p2 - p1;
        let length = v.norm();
        let dir = try_direction(&v)?;
        let d = dir.as_ref();
        let a = a - d * a.dot(d);
        let b = b - d * b.dot(d);
        let gram = Matrix2::new(a.dot(&a), a.dot(&b), b.dot(&a), b.dot(&b));
        // Gram determinant is |a x b|^2; compare against |a|^2 |b|^2
        if gram.determinant() <= Tolerance::DEFAULT.parametric * gram[(0, 0)] * gram[(1, 1)] {
            return None;
        }
        let gram_inv = gram.try_inverse()?;
        // shortest semi-axis is the root of the smaller Gram eigenvalue; a
        // point `tol` past the ellipse has radius at most 1 + tol / minor
        let minor = gram.symmetric_eigenvalues().min().sqrt();
        let radial_limit = (1.0 + tol / minor).powi(2);
        Some(Self {
            dir,
            length,
            a,
            b,
            gram_inv,
            radial_limit,
        })
    }
}

impl EllipticalTube {
    /// Create a tube for the move `p1 -> p2` with ellipse axes `a` and `b`.
    ///
    /// A zero-length move or parallel axes give an empty volume.
    pub fn new(p1: Point3, p2: Point3, a: Vec3, b: Vec3) -> Self {
        let size = (p2 - p1).norm().max(a.norm()).max(b.norm());
        let tol = closed_slack(&p1, size);
        let frame = TubeFrame::new(&p1, &p2, &a, &b, tol);
        if frame.is_none() {
            debug!("elliptical tube {p1:?} -> {p2:?} is degenerate, volume is empty");
        }
        let mut tube = Self {
            p1,
            p2,
            a,
            b,
            frame,
            tol,
            bb: Bbox::empty(),
        };
        tube.bb = tube.calc_bb();
        tube
    }

    /// Start of the move.
    pub fn p1(&self) -> Point3 {
        self.p1
    }

    /// End of the move.
    pub fn p2(&self) -> Point3 {
        self.p2
    }

    /// Ellipse axes as given at construction.
    pub fn axes(&self) -> (Vec3, Vec3) {
        (self.a, self.b)
    }

    /// Bounding box.
    pub fn bbox(&self) -> &Bbox {
        &self.bb
    }

    /// True if `p` lies between the end ellipses and inside the swept ellipse.
    pub fn is_inside(&self, p: &Point3) -> bool {
        let Some(f) = &self.frame else {
            return false;
        };
        if !self.bb.is_inside(p) {
            return false;
        }
        let v = p - self.p1;
        let t = v.dot(f.dir.as_ref());
        if t < -self.tol || t > f.length + self.tol {
            return false;
        }
        let q = v - f.dir.as_ref() * t;
        let ab = f.gram_inv * Vector2::new(q.dot(&f.a), q.dot(&f.b));
        ab.norm_squared() <= f.radial_limit
    }

    /// The ellipse `cos(s)*a + sin(s)*b` reaches `sqrt(a_k^2 + b_k^2)` along
    /// world axis k; both end ellipses grown by that bound the tube.
    fn calc_bb(&self) -> Bbox {
        let Some(f) = &self.frame else {
            return Bbox::empty();
        };
        let reach = f.a.zip_map(&f.b, |x, y| (x * x + y * y).sqrt()) + Vec3::repeat(self.tol);
        let mut bb = Bbox::empty();
        bb.add_point_padded(&self.p1, &reach);
        bb.add_point_padded(&self.p2, &reach);
        bb
    }
}
