/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns the new observation vector, a reward
/// signal, and whether the episode has terminated.
///
/// [`step`]: Env::step
pub trait Env {
    type Error;

    /// Advance the environment by one action.
    ///
    /// Returns `(obs, reward, done)` where `obs` is the new observation vector,
    /// `reward` is the scalar reward, and `done` indicates episode termination.
    ///
    /// # Errors
    ///
    /// Propagates failures from the underlying simulation.
    fn step(&mut self, action: &[f32]) -> Result<(Vec<f32>, f32, bool), Self::Error>;

    /// Reset the environment to its starting state and return the initial
    /// observation vector. A seed makes stochastic resets reproducible.
    ///
    /// # Errors
    ///
    /// Propagates failures from the underlying simulation.
    fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f32>, Self::Error>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}
