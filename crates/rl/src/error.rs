use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    /// `robot_name` is not in the robot registry.
    #[error("unsupported robot `{name}`")]
    UnsupportedRobot { name: String },
    /// A required link is missing from the loaded robot.
    #[error("link `{name}` not found on robot")]
    LinkNotFound { name: String },
    /// `set_init` was handed an empty sequence.
    #[error("recorded init states must hold at least one entry")]
    EmptyInitStates,
    /// Collaborator failure, passed through unchanged.
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("invalid environment config: {0}")]
    Config(#[from] serde_json::Error),
}
