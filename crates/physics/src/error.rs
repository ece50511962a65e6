use thiserror::Error;

/// Failures reported by a [`Scene`](crate::Scene) backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The backend has no articulation asset for the requested robot.
    #[error("no articulation asset for robot `{0}`")]
    UnknownRobot(String),
    /// A robot command was issued before `load_robot`.
    #[error("robot has not been loaded into the scene")]
    RobotNotLoaded,
    /// The link handle was not issued by this scene.
    #[error("no link with handle {0}")]
    UnknownLink(usize),
    /// A joint-space vector did not match the articulation.
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
