/// Euler rotation and 2D view transforms
use nalgebra::{Matrix3, Point2, Vector2};

use crate::geometry::Point3D;
use crate::trig::TrigTable;

/// Rotation around three axes (in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// Transform builder for rotation and view matrices
pub struct Transform;

impl Transform {
    /// Composed Z-Y-X rotation matrix.
    ///
    /// Angles are quantized to whole degrees (truncated toward zero) before
    /// lookup in `trig`.
    pub fn rotation_matrix(angles: &EulerAngles, trig: &TrigTable) -> Matrix3<f64> {
        let (s1, c1) = trig.sin_cos_quantized(angles.x);
        let (s2, c2) = trig.sin_cos_quantized(angles.y);
        let (s3, c3) = trig.sin_cos_quantized(angles.z);

        Matrix3::new(
            c2 * c3,
            c2 * s3,
            -s2,
            s1 * s2 * c3 - c1 * s3,
            s1 * s2 * s3 + c1 * c3,
            s1 * c2,
            c1 * s2 * c3 + s1 * s3,
            c1 * s2 * s3 - s1 * c3,
            c1 * c2,
        )
    }

    /// Rotate a copy of `point`
    pub fn rotate(point: &Point3D, angles: &EulerAngles, trig: &TrigTable) -> Point3D {
        Self::rotation_matrix(angles, trig) * *point
    }

    /// Uniform 2D scale about `center`, in homogeneous coordinates
    pub fn zoom_about(center: Point2<f64>, scale: f64) -> Matrix3<f64> {
        let to_center = Matrix3::new_translation(&center.coords);
        let from_center = Matrix3::new_translation(&-center.coords);
        to_center * Matrix3::new_nonuniform_scaling(&Vector2::new(scale, scale)) * from_center
    }
}
