//! Environment configuration and task constants.

use crate::error::EnvError;
use crate::placement::ObjectPlacement;
use glam::{Vec2, Vec3};
use physics::Pose;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::num::NonZeroUsize;

const DEFAULT_FRAME_SKIP: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Every numeric constant the cube-picking task depends on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConstants {
    /// Agent steps per episode
    pub horizon: u64,
    /// Passive-force-only physics steps run before the object is placed
    pub stabilization_steps: usize,
    /// Planar object-to-palm distance must be strictly below this
    pub xy_success_threshold: f32,
    /// Object height must be strictly above this
    pub lift_height_threshold: f32,
    pub table_height: f32,
    /// World offset of arm-mounted robots, added to the profile root offset
    pub arm_init_position: Vec3,
    pub panda_base_pose: Pose,
    pub free_base_pose: Pose,
    pub default_object_pose: Pose,
    /// Half-widths of the uniform xy offset used by randomized placement
    pub random_xy_range: Vec2,
    /// Half-width of the uniform yaw used by randomized placement (radians)
    pub random_yaw_range: f32,
}

impl Default for TaskConstants {
    fn default() -> Self {
        let table_height = 0.6;
        Self {
            horizon: 10_000,
            stabilization_steps: 100,
            xy_success_threshold: 0.05,
            lift_height_threshold: 0.65,
            table_height,
            arm_init_position: Vec3::new(-0.4, 0.0, 0.0),
            panda_base_pose: Pose::from_euler(Vec3::new(0.0, -0.5, 0.0), 0.0, 0.0, FRAC_PI_2),
            free_base_pose: Pose::from_euler(Vec3::new(-0.4, 0.0, 0.2), 0.0, FRAC_PI_2, 0.0),
            default_object_pose: Pose::from_position(Vec3::new(0.0, 0.0, 0.3)),
            random_xy_range: Vec2::new(0.1, 0.1),
            random_yaw_range: std::f32::consts::FRAC_PI_6,
        }
    }
}

/// Constructor options for [`CubePickingEnv`](crate::CubePickingEnv).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Forwarded to the scene's rendering side
    pub use_gui: bool,
    /// Physics steps per agent step
    pub frame_skip: NonZeroUsize,
    /// Scales the randomized placement ranges
    pub randomness_scale: f32,
    pub robot_name: String,
    /// Selects the robot-state observation instead of the oracle state
    pub use_visual_obs: bool,
    /// Forwarded to the scene's rendering side
    pub need_offscreen_render: bool,
    /// Placement used when no recorded init state applies
    pub placement: ObjectPlacement,
    pub constants: TaskConstants,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            use_gui: false,
            frame_skip: DEFAULT_FRAME_SKIP,
            randomness_scale: 1.0,
            robot_name: "xarm6".to_string(),
            use_visual_obs: false,
            need_offscreen_render: false,
            placement: ObjectPlacement::Fixed,
            constants: TaskConstants::default(),
        }
    }
}

impl EnvConfig {
    /// Parse a JSON config; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] for malformed JSON or out-of-range values
    /// such as `frame_skip: 0`.
    pub fn from_json(json: &str) -> Result<Self, EnvError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_robot(mut self, robot_name: impl Into<String>) -> Self {
        self.robot_name = robot_name.into();
        self
    }

    #[must_use]
    pub fn with_visual_obs(mut self, use_visual_obs: bool) -> Self {
        self.use_visual_obs = use_visual_obs;
        self
    }

    #[must_use]
    pub fn with_frame_skip(mut self, frame_skip: NonZeroUsize) -> Self {
        self.frame_skip = frame_skip;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: ObjectPlacement) -> Self {
        self.placement = placement;
        self
    }
}
