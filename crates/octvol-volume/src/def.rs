//! Volume definitions as data.
//!
//! A [`VolumeDef`] describes a volume with plain arrays so it can be stored
//! in a job file or sent over the wire. [`VolumeDef::build`] validates it
//! and constructs the [`OctVolume`].
//!
//! ```
//! use octvol_volume::VolumeDef;
//! use octvol_math::Point3;
//!
//! let json = r#"{ "type": "cylinder_move", "p1": [0, 0, 0], "p2": [10, 0, 0], "cutter": { "diameter": 2.0 } }"#;
//! let volume = VolumeDef::from_json(json).unwrap();
//! assert!(volume.is_inside(&Point3::new(5.0, 0.0, 0.5)));
//! ```

use octvol_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::cylmove::{CylCutter, CylinderMoveVolume};
use crate::error::{Result, VolumeError};
use crate::OctVolume;

/// A volume described by its shape parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VolumeDef {
    /// Sphere.
    Sphere {
        /// Center point.
        center: [f64; 3],
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned cube.
    Cube {
        /// Center point.
        center: [f64; 3],
        /// Side length.
        side: f64,
    },
    /// Flat-capped cylinder.
    Cylinder {
        /// Axis start.
        p1: [f64; 3],
        /// Axis end.
        p2: [f64; 3],
        /// Radius.
        radius: f64,
    },
    /// Parallelepiped `corner + a*v1 + b*v2 + c*v3`, `a, b, c` in `[0, 1]`.
    Box {
        /// Corner the edges start from.
        corner: [f64; 3],
        /// First edge.
        v1: [f64; 3],
        /// Second edge.
        v2: [f64; 3],
        /// Third edge.
        v3: [f64; 3],
    },
    /// Elliptical tube.
    EllipticalTube {
        /// Move start.
        p1: [f64; 3],
        /// Move end.
        p2: [f64; 3],
        /// First ellipse axis.
        a: [f64; 3],
        /// Second ellipse axis.
        b: [f64; 3],
    },
    /// Cylindrical cutter sweep.
    CylinderMove {
        /// Move start.
        p1: [f64; 3],
        /// Move end.
        p2: [f64; 3],
        /// The cutter.
        cutter: CylCutter,
    },
}

impl VolumeDef {
    /// Parse a JSON definition and build it.
    pub fn from_json(json: &str) -> Result<OctVolume> {
        let def: VolumeDef = serde_json::from_str(json)?;
        def.build()
    }

    /// Validate the parameters and construct the volume.
    pub fn build(&self) -> Result<OctVolume> {
        let volume = match self {
            VolumeDef::Sphere { center, radius } => {
                OctVolume::sphere(point("center", center)?, dimension("radius", *radius)?)
            }
            VolumeDef::Cube { center, side } => {
                OctVolume::cube(point("center", center)?, dimension("side", *side)?)
            }
            VolumeDef::Cylinder { p1, p2, radius } => OctVolume::cylinder(
                point("p1", p1)?,
                point("p2", p2)?,
                dimension("radius", *radius)?,
            ),
            VolumeDef::Box { corner, v1, v2, v3 } => OctVolume::parallelepiped(
                point("corner", corner)?,
                vector("v1", v1)?,
                vector("v2", v2)?,
                vector("v3", v3)?,
            ),
            VolumeDef::EllipticalTube { p1, p2, a, b } => OctVolume::elliptical_tube(
                point("p1", p1)?,
                point("p2", p2)?,
                vector("a", a)?,
                vector("b", b)?,
            ),
            VolumeDef::CylinderMove { p1, p2, cutter } => {
                dimension("cutter.diameter", cutter.diameter)?;
                CylinderMoveVolume::from_cutter(cutter, point("p1", p1)?, point("p2", p2)?).into()
            }
        };
        Ok(volume)
    }
}

fn vector(field: &'static str, v: &[f64; 3]) -> Result<Vec3> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(Vec3::from(*v))
    } else {
        Err(VolumeError::NonFinite(field))
    }
}

fn point(field: &'static str, p: &[f64; 3]) -> Result<Point3> {
    vector(field, p).map(Point3::from)
}

fn dimension(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        Err(VolumeError::NonFinite(field))
    } else if value < 0.0 {
        Err(VolumeError::NegativeDimension { field, value })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_kind() {
        let defs = [
            r#"{ "type": "sphere", "center": [0, 0, 0], "radius": 1 }"#,
            r#"{ "type": "cube", "center": [0, 0, 0], "side": 2 }"#,
            r#"{ "type": "cylinder", "p1": [0, 0, -1], "p2": [0, 0, 1], "radius": 1 }"#,
            r#"{ "type": "box", "corner": [-1, -1, -1], "v1": [2, 0, 0], "v2": [0, 2, 0], "v3": [0, 0, 2] }"#,
            r#"{ "type": "elliptical_tube", "p1": [-1, 0, 0], "p2": [1, 0, 0], "a": [0, 1, 0], "b": [0, 0, 1] }"#,
            r#"{ "type": "cylinder_move", "p1": [-1, 0, 0], "p2": [1, 0, 0], "cutter": { "diameter": 2 } }"#,
        ];
        for json in defs {
            let v = VolumeDef::from_json(json).unwrap();
            assert!(v.is_inside(&Point3::origin()), "{json}");
            assert!(!v.is_inside(&Point3::new(0.0, 5.0, 0.0)), "{json}");
        }
    }

    #[test]
    fn test_build_matches_direct_construction() {
        let def = VolumeDef::CylinderMove {
            p1: [0.0, 0.0, 0.0],
            p2: [10.0, 0.0, 0.0],
            cutter: CylCutter::new(2.0),
        };
        let built = def.build().unwrap();
        let direct = OctVolume::cylinder_move(Point3::origin(), Point3::new(10.0, 0.0, 0.0), 1.0);
        assert_eq!(built, direct);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let def = VolumeDef::Box {
            corner: [1.0, 2.0, 3.0],
            v1: [1.0, 0.0, 0.0],
            v2: [0.0, 1.0, 0.0],
            v3: [0.0, 0.0, 1.0],
        };
        let json = serde_json::to_string(&def).unwrap();
        assert!(json.contains(r#""type":"box""#));
        let parsed: VolumeDef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, def);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let def = VolumeDef::Sphere {
            center: [0.0; 3],
            radius: -1.0,
        };
        match def.build() {
            Err(VolumeError::NegativeDimension { field, value }) => {
                assert_eq!(field, "radius");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected NegativeDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let def = VolumeDef::EllipticalTube {
            p1: [0.0; 3],
            p2: [1.0, 0.0, f64::NAN],
            a: [0.0, 1.0, 0.0],
            b: [0.0, 0.0, 1.0],
        };
        assert!(matches!(def.build(), Err(VolumeError::NonFinite("p2"))));

        let def = VolumeDef::CylinderMove {
            p1: [0.0; 3],
            p2: [1.0, 0.0, 0.0],
            cutter: CylCutter::new(f64::INFINITY),
        };
        assert!(matches!(def.build(), Err(VolumeError::NonFinite("cutter.diameter"))));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            VolumeDef::from_json(r#"{ "type": "torus", "radius": 1 }"#),
            Err(VolumeError::Json(_))
        ));
        let err = VolumeDef::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid volume definition"));
    }
}
