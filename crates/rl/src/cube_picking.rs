//! Cube picking task
//!
//! [`CubePickingEnv`] turns a [`Scene`] holding a robot and a cube into an
//! episodic RL environment. Reset places the robot according to its
//! kinematic class, lets the scene settle under gravity compensation, then
//! places the cube from a recorded state or the configured placement policy.
//!
//! Recorded states replay the selected entry on every reset until the caller
//! moves on with [`CubePickingEnv::advance_init`].

use crate::config::EnvConfig;
use crate::env::Env;
use crate::error::EnvError;
use crate::links::LinkIndex;
use crate::observation::{ObservationEncoder, ObservationMode};
use crate::reward::RewardEvaluator;
use crate::robot::{resolve_profile, RobotVariantProfile};
use crate::termination::TerminationPolicy;
use physics::{LinkId, PassiveForce, Pose, Scene, Transform};
use tracing::{debug, info, warn};

/// Per-episode bookkeeping, replaced on every reset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EpisodeState {
    pub step_counter: u64,
    pub object_episode_init_pose: Pose,
}

/// Per-call reset overrides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetOptions {
    /// Object pose for this reset only, taking precedence over recorded states.
    pub init_state: Option<Transform>,
}

pub struct CubePickingEnv<S: Scene> {
    scene: S,
    config: EnvConfig,
    profile: &'static RobotVariantProfile,
    palm_link: LinkId,
    fingertip_links: Vec<LinkId>,
    encoder: ObservationEncoder,
    reward: RewardEvaluator,
    termination: TerminationPolicy,
    obs_dim: usize,
    episode: EpisodeState,
    recorded_init_states: Option<Vec<Transform>>,
    current_init: usize,
    rng: fastrand::Rng,
}

impl<S: Scene> CubePickingEnv<S> {
    /// Resolve the robot profile, load the robot and index its links.
    ///
    /// The profile is resolved before the scene is touched, so an unsupported
    /// robot name leaves the scene exactly as it was passed in.
    ///
    /// # Errors
    ///
    /// [`EnvError::UnsupportedRobot`] for an unknown `robot_name`,
    /// [`EnvError::LinkNotFound`] when the palm or a fingertip link is missing,
    /// and [`EnvError::Physics`] for scene failures.
    pub fn new(mut scene: S, config: EnvConfig) -> Result<Self, EnvError> {
        let profile = resolve_profile(&config.robot_name)?;

        scene.load_robot(profile.robot_name)?;
        scene.configure_rendering(config.use_gui, config.need_offscreen_render)?;

        let index = LinkIndex::build(scene.robot_links());
        let palm_link = index.get(profile.palm_link_name)?;
        let fingertip_links = index.resolve(profile.fingertip_link_names.iter().copied())?;

        let mode = ObservationMode::from_visual_flag(config.use_visual_obs);
        let encoder = ObservationEncoder::new(mode, palm_link);
        let obs_dim = match mode {
            ObservationMode::Oracle => ObservationEncoder::oracle_dim(scene.robot_dof()),
            ObservationMode::RobotState => encoder.robot_state(&scene)?.len(),
        };

        info!(
            robot = profile.robot_name,
            class = ?profile.kinematic_class,
            dof = scene.robot_dof(),
            obs_dim,
            "cube picking env constructed"
        );

        Ok(Self {
            reward: RewardEvaluator::new(&config.constants),
            termination: TerminationPolicy::new(config.constants.horizon),
            scene,
            profile,
            palm_link,
            fingertip_links,
            encoder,
            obs_dim,
            episode: EpisodeState::default(),
            recorded_init_states: None,
            current_init: 0,
            rng: fastrand::Rng::new(),
            config,
        })
    }

    /// Reset with no per-call overrides.
    ///
    /// # Errors
    ///
    /// Propagates scene failures and robot configuration mismatches.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f32>, EnvError> {
        self.reset_with(seed, &ResetOptions::default())
    }

    /// Start a new episode and return its first observation.
    ///
    /// # Errors
    ///
    /// Propagates scene failures and robot configuration mismatches.
    pub fn reset_with(&mut self, seed: Option<u64>, options: &ResetOptions) -> Result<Vec<f32>, EnvError> {
        if let Some(seed) = seed {
            self.rng.seed(seed);
        }

        let initial = self
            .profile
            .initial_state(self.scene.robot_dof(), &self.config.constants)?;
        if let Some(qpos) = &initial.qpos {
            self.scene.set_robot_qpos(qpos)?;
            self.scene.set_drive_target(qpos)?;
        }
        self.scene.set_robot_pose(initial.base_pose)?;
        info!(
            robot = self.profile.robot_name,
            class = ?self.profile.kinematic_class,
            base = ?initial.base_pose.p,
            "robot init pose set"
        );

        self.scene.reset_episode();
        self.episode = EpisodeState::default();

        self.stabilize()?;

        let object_pose = self.choose_object_pose(options);
        self.place_object(object_pose);

        self.get_observation()
    }

    fn place_object(&mut self, pose: Pose) {
        self.scene.set_object_pose(pose);
        self.episode.object_episode_init_pose = pose;
        debug!(position = ?pose.p, "object placed");
    }

    /// Settle contacts with gravity compensation as the only joint force.
    fn stabilize(&mut self) -> Result<(), EnvError> {
        let steps = self.config.constants.stabilization_steps;
        for _ in 0..steps {
            let qf = self.scene.passive_force(PassiveForce::GRAVITY_ONLY);
            self.scene.set_joint_force(&qf)?;
            self.scene.step()?;
        }
        debug!(steps, "stabilization finished");
        Ok(())
    }

    fn choose_object_pose(&mut self, options: &ResetOptions) -> Pose {
        if let Some(state) = &options.init_state {
            return Pose::from_transform(state);
        }
        if let Some(state) = self.current_init_state() {
            return Pose::from_transform(state);
        }
        self.config
            .placement
            .sample(&mut self.rng, self.config.randomness_scale, &self.config.constants)
    }

    fn current_init_state(&self) -> Option<&Transform> {
        self.recorded_init_states
            .as_ref()
            .and_then(|states| states.get(self.current_init))
    }

    /// Store recorded object init states and place the cube at the first one
    /// right away. Every later reset replays the selected entry.
    ///
    /// # Errors
    ///
    /// [`EnvError::EmptyInitStates`] when `recorded_states` is empty; the
    /// previous init states are kept in that case.
    pub fn set_init(&mut self, recorded_states: Vec<Transform>) -> Result<(), EnvError> {
        let first = recorded_states.first().ok_or(EnvError::EmptyInitStates)?;
        let pose = Pose::from_transform(first);
        info!(entries = recorded_states.len(), "recorded init states set");
        self.recorded_init_states = Some(recorded_states);
        self.current_init = 0;
        self.place_object(pose);
        Ok(())
    }

    /// Select the next recorded entry for the following resets. Returns
    /// `false`, keeping the current entry, when there is no next one.
    pub fn advance_init(&mut self) -> bool {
        let Some(states) = &self.recorded_init_states else {
            return false;
        };
        if self.current_init + 1 < states.len() {
            self.current_init += 1;
            debug!(entry = self.current_init, "recorded init state advanced");
            true
        } else {
            warn!(entries = states.len(), "no recorded init state left to advance to");
            false
        }
    }

    /// Index of the recorded entry replayed on reset, if any are set.
    #[must_use]
    pub fn current_init(&self) -> Option<usize> {
        self.recorded_init_states.as_ref().map(|_| self.current_init)
    }

    /// Drop recorded init states and return to the placement policy.
    pub fn clear_init(&mut self) {
        self.recorded_init_states = None;
        self.current_init = 0;
    }

    /// Apply `action`, advance `frame_skip` physics steps and score the result.
    ///
    /// # Errors
    ///
    /// Propagates scene failures, including action length mismatches.
    pub fn step(&mut self, action: &[f32]) -> Result<(Vec<f32>, f32, bool), EnvError> {
        self.scene.apply_action(action)?;
        for _ in 0..self.config.frame_skip.get() {
            self.scene.step()?;
        }
        self.episode.step_counter += 1;

        let obs = self.get_observation()?;
        let reward = self.get_reward(action)?;
        let done = self.is_done();
        Ok((obs, reward, done))
    }

    /// # Errors
    ///
    /// Propagates scene failures while reading the palm pose.
    pub fn get_observation(&self) -> Result<Vec<f32>, EnvError> {
        Ok(self.encoder.encode(&self.scene)?)
    }

    /// # Errors
    ///
    /// Propagates scene failures while reading the palm pose.
    pub fn get_oracle_state(&self) -> Result<Vec<f32>, EnvError> {
        Ok(self.encoder.oracle_state(&self.scene)?)
    }

    /// # Errors
    ///
    /// Propagates scene failures while reading the palm pose.
    pub fn get_robot_state(&self) -> Result<Vec<f32>, EnvError> {
        Ok(self.encoder.robot_state(&self.scene)?)
    }

    /// Sparse lift reward; the action does not contribute.
    ///
    /// # Errors
    ///
    /// Propagates scene failures while reading the palm pose.
    pub fn get_reward(&self, _action: &[f32]) -> Result<f32, EnvError> {
        let object = self.scene.object_pose();
        let palm = self.scene.link_pose(self.palm_link)?;
        Ok(self.reward.evaluate(&object, &palm))
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.termination.is_done(self.episode.step_counter)
    }

    #[must_use]
    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    #[must_use]
    pub fn horizon(&self) -> u64 {
        self.termination.horizon()
    }

    #[must_use]
    pub fn step_counter(&self) -> u64 {
        self.episode.step_counter
    }

    #[must_use]
    pub fn episode(&self) -> &EpisodeState {
        &self.episode
    }

    #[must_use]
    pub fn object_episode_init_pose(&self) -> Pose {
        self.episode.object_episode_init_pose
    }

    #[must_use]
    pub fn profile(&self) -> &'static RobotVariantProfile {
        self.profile
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn palm_link(&self) -> LinkId {
        self.palm_link
    }

    #[must_use]
    pub fn fingertip_links(&self) -> &[LinkId] {
        &self.fingertip_links
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

impl<S: Scene> Env for CubePickingEnv<S> {
    type Error = EnvError;

    fn step(&mut self, action: &[f32]) -> Result<(Vec<f32>, f32, bool), EnvError> {
        CubePickingEnv::step(self, action)
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f32>, EnvError> {
        CubePickingEnv::reset(self, seed)
    }

    fn obs_size(&self) -> usize {
        self.obs_dim
    }

    fn action_size(&self) -> usize {
        self.scene.action_dim()
    }
}
