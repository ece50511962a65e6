//! # Kinematic Reference Scene
//!
//! A small CPU backend implementing [`Scene`]: one articulation whose joints
//! track PD drive targets and whose links are rigid offsets from the robot
//! root, plus one free box-shaped object falling onto a floor. It is not a
//! contact solver; it exists so the task layer can run end to end without an
//! external engine.

use crate::error::PhysicsError;
use crate::integrator::{
    integrate_joints, integrate_rigid_body, resolve_floor_contact, DriveGains, JointState,
    RigidBody,
};
use crate::scene::Scene;
use crate::types::{LinkId, PassiveForce, Pose};
use glam::Vec3;
use tracing::debug;

/// A named robot link, rigidly attached to the robot root
#[derive(Clone, Debug, PartialEq)]
pub struct LinkDesc {
    pub name: String,
    /// Pose of the link in the robot root frame
    pub offset: Pose,
}

impl LinkDesc {
    #[must_use]
    pub fn new(name: impl Into<String>, offset: Pose) -> Self {
        Self { name: name.into(), offset }
    }
}

/// Articulation asset the scene can instantiate
#[derive(Clone, Debug, PartialEq)]
pub struct ArticulationDesc {
    pub robot_name: String,
    pub dof: usize,
    pub links: Vec<LinkDesc>,
    /// Per-joint gravity torque; missing entries count as zero
    pub gravity_load: Vec<f32>,
}

impl ArticulationDesc {
    #[must_use]
    pub fn new(robot_name: impl Into<String>, dof: usize, links: Vec<LinkDesc>) -> Self {
        Self {
            robot_name: robot_name.into(),
            dof,
            links,
            gravity_load: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_gravity_load(mut self, gravity_load: Vec<f32>) -> Self {
        self.gravity_load = gravity_load;
        self
    }
}

/// Simulation parameters
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub gravity: Vec3,
    pub dt: f32,
    pub drive: DriveGains,
    pub floor_height: f32,
    pub object_half_size: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, 0.0, -9.81),
            dt: 0.01,
            drive: DriveGains {
                stiffness: 400.0,
                damping: 40.0,
            },
            floor_height: 0.0,
            object_half_size: 0.025,
        }
    }
}

/// Reference scene: one robot, one object, one floor
pub struct KinematicScene {
    pub params: SceneParams,
    robot: ArticulationDesc,
    loaded: bool,
    base: Pose,
    joints: JointState,
    object: RigidBody,
    rendering: (bool, bool),
    elapsed_steps: u64,
}

impl KinematicScene {
    /// Create a scene that can load the given articulation
    #[must_use]
    pub fn new(robot: ArticulationDesc) -> Self {
        let joints = JointState::zeros(robot.dof);
        Self {
            params: SceneParams::default(),
            robot,
            loaded: false,
            base: Pose::IDENTITY,
            joints,
            object: RigidBody::default(),
            rendering: (false, false),
            elapsed_steps: 0,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SceneParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn robot_pose(&self) -> Pose {
        self.base
    }

    #[must_use]
    pub fn drive_target(&self) -> &[f32] {
        &self.joints.drive_target
    }

    #[must_use]
    pub fn joint_force(&self) -> &[f32] {
        &self.joints.qf
    }

    /// `(use_gui, offscreen)` as last forwarded by the task layer
    #[must_use]
    pub fn rendering(&self) -> (bool, bool) {
        self.rendering
    }

    /// Steps taken since the last episode reset
    #[must_use]
    pub fn elapsed_steps(&self) -> u64 {
        self.elapsed_steps
    }

    pub fn set_object_velocity(&mut self, linear: Vec3, angular: Vec3) {
        self.object.vel = linear;
        self.object.angular_vel = angular;
    }

    fn ensure_loaded(&self) -> Result<(), PhysicsError> {
        if self.loaded {
            Ok(())
        } else {
            Err(PhysicsError::RobotNotLoaded)
        }
    }

    fn check_len(&self, what: &'static str, values: &[f32]) -> Result<(), PhysicsError> {
        self.ensure_loaded()?;
        if values.len() == self.robot.dof {
            Ok(())
        } else {
            Err(PhysicsError::DimensionMismatch {
                what,
                expected: self.robot.dof,
                actual: values.len(),
            })
        }
    }
}

impl Scene for KinematicScene {
    fn load_robot(&mut self, robot_name: &str) -> Result<(), PhysicsError> {
        if robot_name != self.robot.robot_name {
            return Err(PhysicsError::UnknownRobot(robot_name.to_string()));
        }
        self.loaded = true;
        self.joints = JointState::zeros(self.robot.dof);
        debug!(robot = robot_name, dof = self.robot.dof, "articulation loaded");
        Ok(())
    }

    fn configure_rendering(&mut self, use_gui: bool, offscreen: bool) -> Result<(), PhysicsError> {
        self.rendering = (use_gui, offscreen);
        Ok(())
    }

    fn robot_links(&self) -> Vec<(String, LinkId)> {
        self.robot
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| (link.name.clone(), LinkId(i)))
            .collect()
    }

    fn robot_dof(&self) -> usize {
        self.robot.dof
    }

    fn robot_qpos(&self) -> Vec<f32> {
        self.joints.qpos.clone()
    }

    fn set_robot_qpos(&mut self, qpos: &[f32]) -> Result<(), PhysicsError> {
        self.check_len("qpos", qpos)?;
        self.joints.qpos.copy_from_slice(qpos);
        Ok(())
    }

    fn set_drive_target(&mut self, target: &[f32]) -> Result<(), PhysicsError> {
        self.check_len("drive target", target)?;
        self.joints.drive_target.copy_from_slice(target);
        Ok(())
    }

    fn set_robot_pose(&mut self, pose: Pose) -> Result<(), PhysicsError> {
        self.ensure_loaded()?;
        self.base = pose;
        Ok(())
    }

    fn link_pose(&self, link: LinkId) -> Result<Pose, PhysicsError> {
        self.robot
            .links
            .get(link.0)
            .map(|desc| self.base.mul_pose(&desc.offset))
            .ok_or(PhysicsError::UnknownLink(link.0))
    }

    fn passive_force(&self, terms: PassiveForce) -> Vec<f32> {
        // Joints are massless apart from the gravity load, so only the gravity
        // term contributes.
        (0..self.robot.dof)
            .map(|i| {
                if terms.gravity {
                    self.robot.gravity_load.get(i).copied().unwrap_or(0.0)
                } else {
                    0.0
                }
            })
            .collect()
    }

    fn set_joint_force(&mut self, qf: &[f32]) -> Result<(), PhysicsError> {
        self.check_len("joint force", qf)?;
        self.joints.qf.copy_from_slice(qf);
        Ok(())
    }

    fn action_dim(&self) -> usize {
        self.robot.dof
    }

    /// Actions are joint velocity commands integrated into the drive target.
    fn apply_action(&mut self, action: &[f32]) -> Result<(), PhysicsError> {
        self.check_len("action", action)?;
        let dt = self.params.dt;
        for (target, a) in self.joints.drive_target.iter_mut().zip(action) {
            *target += a * dt;
        }
        Ok(())
    }

    fn object_pose(&self) -> Pose {
        self.object.pose
    }

    fn set_object_pose(&mut self, pose: Pose) {
        self.object.pose = pose;
    }

    fn object_velocity(&self) -> Vec3 {
        self.object.vel
    }

    fn object_angular_velocity(&self) -> Vec3 {
        self.object.angular_vel
    }

    fn reset_episode(&mut self) {
        self.joints.qvel.iter_mut().for_each(|v| *v = 0.0);
        self.joints.qf.iter_mut().for_each(|f| *f = 0.0);
        self.object.vel = Vec3::ZERO;
        self.object.angular_vel = Vec3::ZERO;
        self.elapsed_steps = 0;
    }

    fn step(&mut self) -> Result<(), PhysicsError> {
        self.ensure_loaded()?;
        let dt = self.params.dt;

        // 1. Joint drives
        integrate_joints(&mut self.joints, &self.robot.gravity_load, self.params.drive, dt);

        // 2. Free object
        integrate_rigid_body(&mut self.object, self.params.gravity, dt);
        resolve_floor_contact(&mut self.object, self.params.floor_height, self.params.object_half_size);

        self.elapsed_steps += 1;
        Ok(())
    }
}
