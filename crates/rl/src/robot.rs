//! Robot variant registry.
//!
//! Each supported robot name maps to exactly one [`RobotVariantProfile`].
//! Everything downstream branches on [`KinematicClass`], never on the name.

use crate::config::TaskConstants;
use crate::error::EnvError;
use glam::{Quat, Vec3};
use physics::{PhysicsError, Pose};
use serde::{Deserialize, Serialize};

/// How the robot is mounted and driven.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KinematicClass {
    /// Hand floating freely in the world, no arm.
    FreeFloating,
    /// xArm with a parallel gripper; the arm joints form a prefix of the dofs.
    XArm,
    /// Franka Panda; the init configuration already covers every dof.
    Panda,
}

/// Immutable capability profile of a supported robot.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotVariantProfile {
    pub robot_name: &'static str,
    pub kinematic_class: KinematicClass,
    pub palm_link_name: &'static str,
    pub fingertip_link_names: &'static [&'static str],
    pub arm_init_qpos: &'static [f32],
    pub root_offset: Vec3,
}

static PROFILES: [RobotVariantProfile; 4] = [
    RobotVariantProfile {
        robot_name: "xarm6",
        kinematic_class: KinematicClass::XArm,
        palm_link_name: "xarm_gripper_base_link",
        fingertip_link_names: &["left_finger", "right_finger"],
        arm_init_qpos: &[0.0, -0.3, -0.6, 0.0, 0.9, 0.0],
        root_offset: Vec3::new(0.0, 0.0, 0.0),
    },
    RobotVariantProfile {
        robot_name: "xarm7",
        kinematic_class: KinematicClass::XArm,
        palm_link_name: "xarm_gripper_base_link",
        fingertip_link_names: &["left_finger", "right_finger"],
        arm_init_qpos: &[0.0, -0.3, 0.0, 0.3, 0.0, 0.6, 0.0],
        root_offset: Vec3::new(-0.05, 0.0, 0.0),
    },
    RobotVariantProfile {
        robot_name: "panda",
        kinematic_class: KinematicClass::Panda,
        palm_link_name: "panda_hand",
        fingertip_link_names: &["panda_leftfinger", "panda_rightfinger"],
        arm_init_qpos: &[0.0, -0.785, 0.0, -2.356, 0.0, 1.571, 0.785, 0.04, 0.04],
        root_offset: Vec3::new(0.0, 0.0, 0.0),
    },
    RobotVariantProfile {
        robot_name: "allegro_hand_free",
        kinematic_class: KinematicClass::FreeFloating,
        palm_link_name: "palm_center",
        // thumb, index, middle, ring
        fingertip_link_names: &["link_15.0_tip", "link_3.0_tip", "link_7.0_tip", "link_11.0_tip"],
        arm_init_qpos: &[],
        root_offset: Vec3::new(0.0, 0.0, 0.0),
    },
];

/// Look up the profile for `robot_name`.
///
/// # Errors
///
/// Returns [`EnvError::UnsupportedRobot`] for names outside the registry.
pub fn resolve_profile(robot_name: &str) -> Result<&'static RobotVariantProfile, EnvError> {
    PROFILES
        .iter()
        .find(|profile| profile.robot_name == robot_name)
        .ok_or_else(|| EnvError::UnsupportedRobot {
            name: robot_name.to_string(),
        })
}

/// Names accepted by [`resolve_profile`].
pub fn supported_robots() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|profile| profile.robot_name)
}

/// Joint configuration and root pose applied at the start of every episode.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialRobotState {
    /// `None` leaves the joints untouched.
    pub qpos: Option<Vec<f32>>,
    pub base_pose: Pose,
}

impl RobotVariantProfile {
    /// Per-class initial configuration for a robot with `dof` joints.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::DimensionMismatch`] when an xArm has fewer
    /// joints than its arm init configuration.
    pub fn initial_state(&self, dof: usize, constants: &TaskConstants) -> Result<InitialRobotState, PhysicsError> {
        let state = match self.kinematic_class {
            KinematicClass::XArm => {
                let arm_dof = self.arm_init_qpos.len();
                if dof < arm_dof {
                    return Err(PhysicsError::DimensionMismatch {
                        what: "arm init qpos",
                        expected: dof,
                        actual: arm_dof,
                    });
                }
                let mut qpos = vec![0.0; dof];
                qpos[..arm_dof].copy_from_slice(self.arm_init_qpos);
                InitialRobotState {
                    qpos: Some(qpos),
                    base_pose: Pose::new(constants.arm_init_position + self.root_offset, Quat::IDENTITY),
                }
            }
            KinematicClass::Panda => InitialRobotState {
                qpos: Some(self.arm_init_qpos.to_vec()),
                base_pose: constants.panda_base_pose,
            },
            KinematicClass::FreeFloating => InitialRobotState {
                qpos: None,
                base_pose: constants.free_base_pose,
            },
        };
        Ok(state)
    }

    /// Every link the environment must find on the loaded robot, palm first.
    pub fn required_links(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.palm_link_name).chain(self.fingertip_link_names.iter().copied())
    }
}
