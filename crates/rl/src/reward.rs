use crate::config::TaskConstants;
use physics::Pose;

/// Sparse lift-success reward.
///
/// Returns 1.0 when the object is within `xy_threshold` of the palm in the
/// horizontal plane and above `lift_height`, both strictly; 0.0 otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RewardEvaluator {
    xy_threshold: f32,
    lift_height: f32,
}

impl RewardEvaluator {
    #[must_use]
    pub fn new(constants: &TaskConstants) -> Self {
        Self {
            xy_threshold: constants.xy_success_threshold,
            lift_height: constants.lift_height_threshold,
        }
    }

    #[must_use]
    pub fn evaluate(&self, object: &Pose, palm: &Pose) -> f32 {
        let xy_dist = object.p.truncate().distance(palm.p.truncate());
        let lifted = object.p.z > self.lift_height;
        if xy_dist < self.xy_threshold && lifted {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn evaluator() -> RewardEvaluator {
        RewardEvaluator::new(&TaskConstants::default())
    }

    fn at(x: f32, y: f32, z: f32) -> Pose {
        Pose::from_position(Vec3::new(x, y, z))
    }

    #[test]
    fn lifted_object_near_palm_scores() {
        assert_eq!(evaluator().evaluate(&at(0.01, -0.02, 0.7), &at(0.0, 0.0, 0.8)), 1.0);
    }

    #[test]
    fn palm_height_does_not_matter() {
        assert_eq!(evaluator().evaluate(&at(0.0, 0.0, 0.66), &at(0.0, 0.0, 5.0)), 1.0);
    }

    #[test]
    fn resting_object_scores_zero() {
        assert_eq!(evaluator().evaluate(&at(0.0, 0.0, 0.3), &at(0.0, 0.0, 0.3)), 0.0);
    }

    #[test]
    fn far_object_scores_zero() {
        assert_eq!(evaluator().evaluate(&at(0.2, 0.0, 0.9), &at(0.0, 0.0, 0.9)), 0.0);
    }

    #[test]
    fn thresholds_are_strict() {
        let e = evaluator();
        // distance exactly at the threshold
        assert_eq!(e.evaluate(&at(0.05, 0.0, 0.9), &at(0.0, 0.0, 0.9)), 0.0);
        // height exactly at the threshold
        assert_eq!(e.evaluate(&at(0.0, 0.0, 0.65), &at(0.0, 0.0, 0.9)), 0.0);
    }
}
