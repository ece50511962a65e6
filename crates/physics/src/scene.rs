//! # Scene Collaborator Interface
//!
//! The narrow call surface a task adapter needs from a physics backend: one
//! articulated robot, one free rigid object, and a single-step advance
//! primitive. All calls are blocking and sequential.

use crate::error::PhysicsError;
use crate::types::{LinkId, PassiveForce, Pose};
use glam::Vec3;

/// Physics scene holding a single robot articulation and a manipulated object.
pub trait Scene {
    /// Instantiate the named robot's articulation in the scene.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownRobot`] when the backend has no asset for
    /// `robot_name`.
    fn load_robot(&mut self, robot_name: &str) -> Result<(), PhysicsError>;

    /// Forward viewer and offscreen-render requests to the rendering side.
    ///
    /// # Errors
    ///
    /// Backends without a renderer accept and ignore the request.
    fn configure_rendering(&mut self, use_gui: bool, offscreen: bool) -> Result<(), PhysicsError> {
        let _ = (use_gui, offscreen);
        Ok(())
    }

    /// Every robot link as `(name, handle)`, in articulation order.
    fn robot_links(&self) -> Vec<(String, LinkId)>;

    /// Total robot degrees of freedom.
    fn robot_dof(&self) -> usize;

    /// Current joint positions, `robot_dof()` long.
    fn robot_qpos(&self) -> Vec<f32>;

    /// # Errors
    ///
    /// Fails on a length mismatch or when no robot is loaded.
    fn set_robot_qpos(&mut self, qpos: &[f32]) -> Result<(), PhysicsError>;

    /// # Errors
    ///
    /// Fails on a length mismatch or when no robot is loaded.
    fn set_drive_target(&mut self, target: &[f32]) -> Result<(), PhysicsError>;

    /// # Errors
    ///
    /// Fails when no robot is loaded.
    fn set_robot_pose(&mut self, pose: Pose) -> Result<(), PhysicsError>;

    /// World pose of a link. Handles come from [`Scene::robot_links`].
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownLink`] for a handle the scene never issued.
    fn link_pose(&self, link: LinkId) -> Result<Pose, PhysicsError>;

    /// Joint-space passive force for the requested terms.
    fn passive_force(&self, terms: PassiveForce) -> Vec<f32>;

    /// # Errors
    ///
    /// Fails on a length mismatch or when no robot is loaded.
    fn set_joint_force(&mut self, qf: &[f32]) -> Result<(), PhysicsError>;

    /// Number of action components the backend's controller accepts.
    fn action_dim(&self) -> usize;

    /// Hand an agent action to the backend's controller.
    ///
    /// # Errors
    ///
    /// Fails when `action` does not match [`Scene::action_dim`].
    fn apply_action(&mut self, action: &[f32]) -> Result<(), PhysicsError>;

    fn object_pose(&self) -> Pose;

    fn set_object_pose(&mut self, pose: Pose);

    fn object_velocity(&self) -> Vec3;

    fn object_angular_velocity(&self) -> Vec3;

    /// Clear per-episode bookkeeping (velocities, applied forces, counters).
    /// Poses and joint configuration are left as they are.
    fn reset_episode(&mut self);

    /// Advance the simulation by one integration step.
    ///
    /// # Errors
    ///
    /// Backend failures are reported as-is.
    fn step(&mut self) -> Result<(), PhysicsError>;
}
