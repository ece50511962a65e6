#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Physics Collaborator Layer
//!
//! This crate is the seam between task-level environment logic and whatever
//! engine actually simulates the scene. It owns the geometric value types and
//! the [`Scene`] trait that task code is written against.
//!
//! ## Key Components
//!
//! -   **Poses:** [`Pose`] pairs a position with a unit quaternion, and the
//!     [`transform`] module decodes recorded 4x4 rigid transforms into poses.
//! -   **Scene interface:** [`Scene`] exposes link enumeration, pose get/set,
//!     velocity queries, joint force and configuration commands, and a single
//!     step primitive. Robot links are addressed through [`LinkId`] handles
//!     issued by the scene.
//! -   **Reference backend:** [`KinematicScene`] in the [`simulation`] module is
//!     a small CPU implementation used for tests and benchmarks.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{ArticulationDesc, KinematicScene, LinkDesc, Pose, Scene};
//!
//! let arm = ArticulationDesc::new("arm", 2, vec![LinkDesc::new("hand", Pose::IDENTITY)]);
//! let mut scene = KinematicScene::new(arm);
//! scene.load_robot("arm")?;
//! scene.step()?;
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod error;
pub mod integrator;
pub mod scene;
pub mod simulation;
pub mod transform;
pub mod types;

pub use error::PhysicsError;
pub use integrator::{DriveGains, JointState, RigidBody};
pub use scene::Scene;
pub use simulation::{ArticulationDesc, KinematicScene, LinkDesc, SceneParams};
pub use types::{LinkId, PassiveForce, Pose, Transform};

pub use glam;
