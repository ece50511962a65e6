//! # Physics Integration
//!
//! Semi-implicit Euler updates for the free object and the robot's joint
//! state, plus the floor contact used by [`KinematicScene`].
//!
//! [`KinematicScene`]: crate::KinematicScene

use crate::types::Pose;
use glam::{Quat, Vec3};

/// Integration constants
const DAMPING_FACTOR: f32 = 0.999; // Slight damping to improve stability
const CONTACT_FRICTION: f32 = 0.9;

/// Free rigid body state
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub pose: Pose,
    pub vel: Vec3,
    pub angular_vel: Vec3,
}

/// Joint-space state of an articulation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JointState {
    pub qpos: Vec<f32>,
    pub qvel: Vec<f32>,
    pub drive_target: Vec<f32>,
    pub qf: Vec<f32>,
}

impl JointState {
    #[must_use]
    pub fn zeros(dof: usize) -> Self {
        Self {
            qpos: vec![0.0; dof],
            qvel: vec![0.0; dof],
            drive_target: vec![0.0; dof],
            qf: vec![0.0; dof],
        }
    }
}

/// PD drive gains shared by every joint
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DriveGains {
    pub stiffness: f32,
    pub damping: f32,
}

/// Integrate a free body under gravity
pub fn integrate_rigid_body(body: &mut RigidBody, gravity: Vec3, dt: f32) {
    body.vel += gravity * dt;
    body.pose.p += body.vel * dt;

    // q' = q + 0.5 * dt * (w, 0) * q
    let w = body.angular_vel;
    let spin = Quat::from_xyzw(w.x, w.y, w.z, 0.0) * body.pose.q;
    body.pose.q = (body.pose.q + spin * (0.5 * dt)).normalize();

    body.vel *= DAMPING_FACTOR;
    body.angular_vel *= DAMPING_FACTOR;
}

/// Keep a body of the given half height resting on a horizontal floor
pub fn resolve_floor_contact(body: &mut RigidBody, floor_height: f32, half_height: f32) {
    let lowest = body.pose.p.z - half_height;
    if lowest >= floor_height {
        return;
    }
    body.pose.p.z = floor_height + half_height;
    if body.vel.z < 0.0 {
        body.vel.z = 0.0;
    }
    body.vel.x *= CONTACT_FRICTION;
    body.vel.y *= CONTACT_FRICTION;
    body.angular_vel *= CONTACT_FRICTION;
}

/// Integrate joint positions under PD drives, applied joint forces and the
/// gravity load. Applying `qf = gravity_load` cancels gravity exactly.
pub fn integrate_joints(state: &mut JointState, gravity_load: &[f32], gains: DriveGains, dt: f32) {
    for i in 0..state.qpos.len() {
        let load = gravity_load.get(i).copied().unwrap_or(0.0);
        let drive = gains.stiffness * (state.drive_target[i] - state.qpos[i]) - gains.damping * state.qvel[i];
        let acceleration = drive + state.qf[i] - load;
        state.qvel[i] += acceleration * dt;
        state.qpos[i] += state.qvel[i] * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_fall_accelerates_downward() {
        let mut body = RigidBody {
            pose: Pose::from_position(Vec3::new(0.0, 0.0, 1.0)),
            ..Default::default()
        };
        for _ in 0..10 {
            integrate_rigid_body(&mut body, Vec3::new(0.0, 0.0, -9.81), 0.01);
        }
        assert!(body.pose.p.z < 1.0);
        assert!(body.vel.z < 0.0);
    }

    #[test]
    fn test_floor_contact_clamps_height() {
        let mut body = RigidBody {
            pose: Pose::from_position(Vec3::new(0.0, 0.0, -0.1)),
            vel: Vec3::new(1.0, 0.0, -2.0),
            angular_vel: Vec3::ZERO,
        };
        resolve_floor_contact(&mut body, 0.0, 0.025);
        assert_eq!(body.pose.p.z, 0.025);
        assert_eq!(body.vel.z, 0.0);
        assert!(body.vel.x < 1.0);
    }

    #[test]
    fn test_gravity_compensation_holds_joints() {
        let mut state = JointState::zeros(2);
        let load = [3.0, -1.5];
        state.qf.copy_from_slice(&load);
        let gains = DriveGains { stiffness: 0.0, damping: 0.0 };

        for _ in 0..100 {
            integrate_joints(&mut state, &load, gains, 0.01);
        }

        assert_eq!(state.qpos, vec![0.0, 0.0]);
    }
}
