use crate::env::MultiAgentEnvironment;
use crate::policy::Policy;

/// Decides when the current episode is over.
///
/// The run loop evaluates it against the whole multi-agent policy, once
/// before the first move of an episode and once after every move.
pub trait ResetCondition<E: MultiAgentEnvironment> {
    fn should_reset(&mut self, policy: &dyn Policy<E>, env: &E) -> bool;
}

impl<E, F> ResetCondition<E> for F
where
    E: MultiAgentEnvironment,
    F: FnMut(&dyn Policy<E>, &E) -> bool,
{
    fn should_reset(&mut self, policy: &dyn Policy<E>, env: &E) -> bool {
        self(policy, env)
    }
}

/// Ends the episode when the environment reports a terminal state
#[derive(Clone, Copy, Debug, Default)]
pub struct ResetIfEnvTerminated;

impl<E: MultiAgentEnvironment> ResetCondition<E> for ResetIfEnvTerminated {
    fn should_reset(&mut self, _policy: &dyn Policy<E>, env: &E) -> bool {
        env.is_terminal()
    }
}

/// Ends the episode on termination or after `n` moves, whichever is first
#[derive(Clone, Debug)]
pub struct ResetAfterNSteps {
    n: usize,
    t: usize,
}

impl ResetAfterNSteps {
    /// `n` is clamped to at least one move per episode.
    pub fn new(n: usize) -> Self {
        ResetAfterNSteps { n: n.max(1), t: 0 }
    }
}

impl<E: MultiAgentEnvironment> ResetCondition<E> for ResetAfterNSteps {
    fn should_reset(&mut self, _policy: &dyn Policy<E>, env: &E) -> bool {
        // The check made before the first move accounts for that move.
        if env.is_terminal() || self.t >= self.n {
            self.t = 0;
            return true;
        }
        self.t += 1;
        false
    }
}
