use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Row-major 4x4 rigid transform. Rotation occupies the upper-left 3x3
/// block and the translation lives in the last column.
pub type Transform = [[f32; 4]; 4];

/// Rigid body pose: world position plus unit orientation quaternion.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub p: Vec3,
    pub q: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        p: Vec3::ZERO,
        q: Quat::IDENTITY,
    };

    #[must_use]
    pub const fn new(p: Vec3, q: Quat) -> Self {
        Self { p, q }
    }

    #[must_use]
    pub const fn from_position(p: Vec3) -> Self {
        Self { p, q: Quat::IDENTITY }
    }

    /// Builds a pose from static-frame x-y-z Euler angles, i.e.
    /// `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
    #[must_use]
    pub fn from_euler(p: Vec3, roll: f32, pitch: f32, yaw: f32) -> Self {
        Self {
            p,
            q: Quat::from_euler(EulerRot::ZYX, yaw, pitch, roll),
        }
    }

    /// Maps a point from this pose's local frame into the parent frame.
    #[must_use]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.p + self.q * local
    }

    /// Composes `self * other`, treating `other` as expressed in this frame.
    #[must_use]
    pub fn mul_pose(&self, other: &Pose) -> Pose {
        Pose {
            p: self.transform_point(other.p),
            q: (self.q * other.q).normalize(),
        }
    }

    /// The local z-axis expressed in the parent frame.
    #[must_use]
    pub fn z_axis(&self) -> Vec3 {
        self.q * Vec3::Z
    }

    /// Orientation as `[w, x, y, z]`.
    #[must_use]
    pub fn quat_wxyz(&self) -> [f32; 4] {
        [self.q.w, self.q.x, self.q.y, self.q.z]
    }
}

/// Passive joint-force terms requested from the backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PassiveForce {
    pub gravity: bool,
    pub coriolis_and_centrifugal: bool,
    pub external: bool,
}

impl PassiveForce {
    /// Gravity compensation only.
    pub const GRAVITY_ONLY: Self = Self {
        gravity: true,
        coriolis_and_centrifugal: false,
        external: false,
    };
}

/// Opaque handle to a robot link, issued by the scene that owns the link.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinkId(pub usize);
