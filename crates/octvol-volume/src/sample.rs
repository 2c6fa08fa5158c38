//! Batch classification of sample points.
//!
//! An octree builder evaluates many sample points against one volume per
//! move. Volumes are read-only, so the batch is split across rayon's
//! thread pool without any locking.

use octvol_math::Point3;
use rayon::prelude::*;

use crate::OctVolume;

/// Classify every point, in order. `result[i]` is `volume.is_inside(&points[i])`.
pub fn classify_points(volume: &OctVolume, points: &[Point3]) -> Vec<bool> {
    points.par_iter().map(|p| volume.is_inside(p)).collect()
}

/// Number of points inside the volume.
pub fn count_inside(volume: &OctVolume, points: &[Point3]) -> usize {
    points.par_iter().filter(|p| volume.is_inside(p)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice() -> Vec<Point3> {
        let mut pts = Vec::new();
        for i in -20..=20 {
            for j in -20..=20 {
                for k in -5..=5 {
                    pts.push(Point3::new(i as f64 * 0.5, j as f64 * 0.1, k as f64 * 0.25));
                }
            }
        }
        pts
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let v = OctVolume::cylinder_move(Point3::new(-5.0, 0.0, 0.0), Point3::new(5.0, 0.5, 0.0), 1.0);
        let pts = lattice();
        let par = classify_points(&v, &pts);
        let seq: Vec<bool> = pts.iter().map(|p| v.is_inside(p)).collect();
        assert_eq!(par, seq);
        assert_eq!(count_inside(&v, &pts), seq.iter().filter(|&&b| b).count());
        assert!(count_inside(&v, &pts) > 0);
    }

    #[test]
    fn test_shared_across_threads() {
        let v = OctVolume::sphere(Point3::origin(), 2.0);
        let pts = lattice();
        let expected = count_inside(&v, &pts);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| count_inside(&v, &pts))).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
