//! Observation encoding.
//!
//! The oracle vector is laid out as:
//!
//! | block                          | length |
//! |--------------------------------|--------|
//! | robot joint positions          | dof    |
//! | object position                | 3      |
//! | object quaternion `[w,x,y,z]`  | 4      |
//! | object linear velocity         | 3      |
//! | object angular velocity        | 3      |
//! | object position minus palm     | 3      |
//! | cos(object z-axis, world up)   | 1      |
//!
//! The robot-state vector is joint positions followed by the palm position.

use glam::Vec3;
use physics::{LinkId, PhysicsError, Scene};

/// Length of the oracle vector beyond the joint positions.
pub const ORACLE_EXTRA_DIMS: usize = 7 + 6 + 3 + 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObservationMode {
    /// Full privileged state.
    Oracle,
    /// Robot-only state, paired with externally rendered imagery.
    RobotState,
}

impl ObservationMode {
    #[must_use]
    pub const fn from_visual_flag(use_visual_obs: bool) -> Self {
        if use_visual_obs {
            Self::RobotState
        } else {
            Self::Oracle
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct ObservationEncoder {
    mode: ObservationMode,
    palm: LinkId,
}

impl ObservationEncoder {
    #[must_use]
    pub const fn new(mode: ObservationMode, palm: LinkId) -> Self {
        Self { mode, palm }
    }

    #[must_use]
    pub const fn mode(&self) -> ObservationMode {
        self.mode
    }

    #[must_use]
    pub const fn oracle_dim(dof: usize) -> usize {
        dof + ORACLE_EXTRA_DIMS
    }

    /// Observation for the configured mode.
    ///
    /// # Errors
    ///
    /// Fails when the scene cannot report the palm pose.
    pub fn encode<S: Scene>(&self, scene: &S) -> Result<Vec<f32>, PhysicsError> {
        match self.mode {
            ObservationMode::Oracle => self.oracle_state(scene),
            ObservationMode::RobotState => self.robot_state(scene),
        }
    }

    /// # Errors
    ///
    /// Fails when the scene cannot report the palm pose.
    pub fn oracle_state<S: Scene>(&self, scene: &S) -> Result<Vec<f32>, PhysicsError> {
        let qpos = scene.robot_qpos();
        let object = scene.object_pose();
        let palm = scene.link_pose(self.palm)?;
        let object_in_palm = object.p - palm.p;
        let theta_cos = object.z_axis().dot(Vec3::Z);

        let mut obs = Vec::with_capacity(Self::oracle_dim(qpos.len()));
        obs.extend_from_slice(&qpos);
        obs.extend_from_slice(&object.p.to_array());
        obs.extend_from_slice(&object.quat_wxyz());
        obs.extend_from_slice(&scene.object_velocity().to_array());
        obs.extend_from_slice(&scene.object_angular_velocity().to_array());
        obs.extend_from_slice(&object_in_palm.to_array());
        obs.push(theta_cos);
        Ok(obs)
    }

    /// # Errors
    ///
    /// Fails when the scene cannot report the palm pose.
    pub fn robot_state<S: Scene>(&self, scene: &S) -> Result<Vec<f32>, PhysicsError> {
        let mut obs = scene.robot_qpos();
        obs.extend_from_slice(&scene.link_pose(self.palm)?.p.to_array());
        Ok(obs)
    }
}
