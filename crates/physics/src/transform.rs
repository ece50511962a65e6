//! Transform matrix utilities for rigid poses
//!
//! Recorded object states arrive as row-major 4x4 rigid transforms. This
//! module converts between that representation and [`Pose`].

use crate::types::{Pose, Transform};
use glam::{Mat3, Quat, Vec3};

/// Convert a pose into a row-major 4x4 rigid transform
#[must_use]
pub fn to_transform_matrix(pose: &Pose) -> Transform {
    let r = Mat3::from_quat(pose.q);
    [
        [r.x_axis.x, r.y_axis.x, r.z_axis.x, pose.p.x],
        [r.x_axis.y, r.y_axis.y, r.z_axis.y, pose.p.y],
        [r.x_axis.z, r.y_axis.z, r.z_axis.z, pose.p.z],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Decode a row-major 4x4 rigid transform into a pose.
///
/// The bottom row is ignored. Decoding is a pure function of the input, so
/// the same matrix always yields a bit-identical pose.
#[must_use]
pub fn from_transform_matrix(m: &Transform) -> Pose {
    let rotation = Mat3::from_cols(
        Vec3::new(m[0][0], m[1][0], m[2][0]),
        Vec3::new(m[0][1], m[1][1], m[2][1]),
        Vec3::new(m[0][2], m[1][2], m[2][2]),
    );
    let translation = Vec3::new(m[0][3], m[1][3], m[2][3]);
    Pose::new(translation, Quat::from_mat3(&rotation).normalize())
}

impl Pose {
    #[must_use]
    pub fn to_transform(&self) -> Transform {
        to_transform_matrix(self)
    }

    #[must_use]
    pub fn from_transform(m: &Transform) -> Self {
        from_transform_matrix(m)
    }
}
