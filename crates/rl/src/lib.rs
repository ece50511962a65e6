#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cube Picking Task Adapter
//!
//! Episodic RL environment on top of a [`physics::Scene`]: a robot must pick
//! a cube up off the table. The crate owns the episode lifecycle and leaves
//! dynamics, assets and rendering to the scene backend.
//!
//! ## Key Components
//!
//! -   **Robot registry:** [`robot::resolve_profile`] maps a robot name to an
//!     immutable [`RobotVariantProfile`] tagged with a [`KinematicClass`].
//! -   **Link index:** [`LinkIndex`] resolves the palm and fingertip links once
//!     per environment.
//! -   **Lifecycle:** [`CubePickingEnv`] resets the robot per class, runs a
//!     gravity-compensated stabilization phase and places the cube from a
//!     recorded state or an [`ObjectPlacement`] policy.
//! -   **Scoring:** [`ObservationEncoder`], [`RewardEvaluator`] and
//!     [`TerminationPolicy`] produce the `(obs, reward, done)` tuple.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rl::{CubePickingEnv, EnvConfig};
//!
//! let mut env = CubePickingEnv::new(scene, EnvConfig::default().with_robot("panda"))?;
//! let mut obs = env.reset(Some(0))?;
//! while !env.is_done() {
//!     let (next, reward, _done) = env.step(&action)?;
//!     obs = next;
//! }
//! ```

pub mod config;
pub mod cube_picking;
pub mod env;
pub mod error;
pub mod links;
pub mod observation;
pub mod placement;
pub mod reward;
pub mod robot;
pub mod termination;

pub use config::{EnvConfig, TaskConstants};
pub use cube_picking::{CubePickingEnv, EpisodeState, ResetOptions};
pub use env::Env;
pub use error::EnvError;
pub use links::{resolve_links, LinkIndex};
pub use observation::{ObservationEncoder, ObservationMode, ORACLE_EXTRA_DIMS};
pub use placement::ObjectPlacement;
pub use reward::RewardEvaluator;
pub use robot::{resolve_profile, supported_robots, InitialRobotState, KinematicClass, RobotVariantProfile};
pub use termination::TerminationPolicy;
