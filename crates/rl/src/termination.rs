/// Fixed-horizon termination. Episodes never end early on success or failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TerminationPolicy {
    horizon: u64,
}

impl TerminationPolicy {
    #[must_use]
    pub const fn new(horizon: u64) -> Self {
        Self { horizon }
    }

    #[must_use]
    pub const fn horizon(&self) -> u64 {
        self.horizon
    }

    #[must_use]
    pub const fn is_done(&self, step_counter: u64) -> bool {
        step_counter >= self.horizon
    }
}
