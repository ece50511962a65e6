//! Object placement policy used when no recorded init state applies.

use crate::config::TaskConstants;
use glam::{Quat, Vec3};
use physics::Pose;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectPlacement {
    /// Always the default object pose from [`TaskConstants`].
    #[default]
    Fixed,
    /// Default pose shifted by a uniform planar offset and rotated by a
    /// uniform yaw, both scaled by `randomness_scale`.
    Randomized,
}

impl ObjectPlacement {
    /// Pick the object pose for a new episode. `Fixed` never touches `rng`.
    #[must_use]
    pub fn sample(self, rng: &mut fastrand::Rng, randomness_scale: f32, constants: &TaskConstants) -> Pose {
        let base = constants.default_object_pose;
        match self {
            Self::Fixed => base,
            Self::Randomized => {
                let dx = symmetric(rng) * constants.random_xy_range.x * randomness_scale;
                let dy = symmetric(rng) * constants.random_xy_range.y * randomness_scale;
                let yaw = symmetric(rng) * constants.random_yaw_range * randomness_scale;
                Pose::new(
                    base.p + Vec3::new(dx, dy, 0.0),
                    (Quat::from_rotation_z(yaw) * base.q).normalize(),
                )
            }
        }
    }
}

/// Uniform sample in [-1, 1).
fn symmetric(rng: &mut fastrand::Rng) -> f32 {
    rng.f32() * 2.0 - 1.0
}
