#![allow(dead_code)]

use physics::glam::Vec3;
use physics::{
    ArticulationDesc, KinematicScene, LinkDesc, LinkId, PassiveForce, PhysicsError, Pose, Scene,
};
use rl::{resolve_profile, KinematicClass};
use std::cell::RefCell;
use std::rc::Rc;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Palm offset in the robot root frame used by every fixture articulation
pub const PALM_OFFSET: Vec3 = Vec3::new(0.5, 0.0, 0.7);

pub fn dof_for(robot_name: &str) -> usize {
    let profile = resolve_profile(robot_name).expect("supported robot");
    match profile.kinematic_class {
        // arm joints plus two gripper joints
        KinematicClass::XArm => profile.arm_init_qpos.len() + 2,
        KinematicClass::Panda => profile.arm_init_qpos.len(),
        // six floating joints plus sixteen finger joints
        KinematicClass::FreeFloating => 22,
    }
}

/// Articulation carrying every link the profile needs, plus a root link
pub fn articulation_for(robot_name: &str) -> ArticulationDesc {
    let profile = resolve_profile(robot_name).expect("supported robot");
    let mut links = vec![
        LinkDesc::new("base_link", Pose::IDENTITY),
        LinkDesc::new(profile.palm_link_name, Pose::from_position(PALM_OFFSET)),
    ];
    for (i, name) in profile.fingertip_link_names.iter().enumerate() {
        let side = if i % 2 == 0 { 0.04 } else { -0.04 };
        links.push(LinkDesc::new(
            *name,
            Pose::from_position(PALM_OFFSET + Vec3::new(0.0, side, -0.05)),
        ));
    }
    ArticulationDesc::new(robot_name, dof_for(robot_name), links)
}

pub fn scene_for(robot_name: &str) -> KinematicScene {
    KinematicScene::new(articulation_for(robot_name))
}

/// Scene calls observed by [`RecordingScene`]
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    LoadRobot(String),
    ConfigureRendering(bool, bool),
    RobotLinks,
    SetRobotQpos(Vec<f32>),
    SetDriveTarget(Vec<f32>),
    SetRobotPose(Pose),
    PassiveForce(PassiveForce),
    SetJointForce(Vec<f32>),
    ApplyAction(Vec<f32>),
    SetObjectPose(Pose),
    ResetEpisode,
    Step,
}

/// Delegates to a [`KinematicScene`] and logs every command it receives
pub struct RecordingScene {
    pub inner: KinematicScene,
    pub log: Rc<RefCell<Vec<Call>>>,
}

impl RecordingScene {
    pub fn new(inner: KinematicScene) -> (Self, Rc<RefCell<Vec<Call>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                inner,
                log: Rc::clone(&log),
            },
            log,
        )
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Scene for RecordingScene {
    fn load_robot(&mut self, robot_name: &str) -> Result<(), PhysicsError> {
        self.record(Call::LoadRobot(robot_name.to_string()));
        self.inner.load_robot(robot_name)
    }

    fn configure_rendering(&mut self, use_gui: bool, offscreen: bool) -> Result<(), PhysicsError> {
        self.record(Call::ConfigureRendering(use_gui, offscreen));
        self.inner.configure_rendering(use_gui, offscreen)
    }

    fn robot_links(&self) -> Vec<(String, LinkId)> {
        self.record(Call::RobotLinks);
        self.inner.robot_links()
    }

    fn robot_dof(&self) -> usize {
        self.inner.robot_dof()
    }

    fn robot_qpos(&self) -> Vec<f32> {
        self.inner.robot_qpos()
    }

    fn set_robot_qpos(&mut self, qpos: &[f32]) -> Result<(), PhysicsError> {
        self.record(Call::SetRobotQpos(qpos.to_vec()));
        self.inner.set_robot_qpos(qpos)
    }

    fn set_drive_target(&mut self, target: &[f32]) -> Result<(), PhysicsError> {
        self.record(Call::SetDriveTarget(target.to_vec()));
        self.inner.set_drive_target(target)
    }

    fn set_robot_pose(&mut self, pose: Pose) -> Result<(), PhysicsError> {
        self.record(Call::SetRobotPose(pose));
        self.inner.set_robot_pose(pose)
    }

    fn link_pose(&self, link: LinkId) -> Result<Pose, PhysicsError> {
        self.inner.link_pose(link)
    }

    fn passive_force(&self, terms: PassiveForce) -> Vec<f32> {
        self.record(Call::PassiveForce(terms));
        self.inner.passive_force(terms)
    }

    fn set_joint_force(&mut self, qf: &[f32]) -> Result<(), PhysicsError> {
        self.record(Call::SetJointForce(qf.to_vec()));
        self.inner.set_joint_force(qf)
    }

    fn action_dim(&self) -> usize {
        self.inner.action_dim()
    }

    fn apply_action(&mut self, action: &[f32]) -> Result<(), PhysicsError> {
        self.record(Call::ApplyAction(action.to_vec()));
        self.inner.apply_action(action)
    }

    fn object_pose(&self) -> Pose {
        self.inner.object_pose()
    }

    fn set_object_pose(&mut self, pose: Pose) {
        self.record(Call::SetObjectPose(pose));
        self.inner.set_object_pose(pose);
    }

    fn object_velocity(&self) -> Vec3 {
        self.inner.object_velocity()
    }

    fn object_angular_velocity(&self) -> Vec3 {
        self.inner.object_angular_velocity()
    }

    fn reset_episode(&mut self) {
        self.record(Call::ResetEpisode);
        self.inner.reset_episode();
    }

    fn step(&mut self) -> Result<(), PhysicsError> {
        self.record(Call::Step);
        self.inner.step()
    }
}
