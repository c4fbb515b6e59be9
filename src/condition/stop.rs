use std::time::{Duration, Instant};

use crate::env::MultiAgentEnvironment;
use crate::error::{AgoraError, Result};
use crate::policy::Policy;

/// Decides when the whole experiment halts.
///
/// Conditions are stateful; the run loop calls them exactly once per move
/// (sequential) or per joint move (simultaneous).
pub trait StopCondition<E: MultiAgentEnvironment> {
    fn should_stop(&mut self, policy: &dyn Policy<E>, env: &E) -> bool;
}

impl<E, F> StopCondition<E> for F
where
    E: MultiAgentEnvironment,
    F: FnMut(&dyn Policy<E>, &E) -> bool,
{
    fn should_stop(&mut self, policy: &dyn Policy<E>, env: &E) -> bool {
        self(policy, env)
    }
}

/// Stops after `n` calls, i.e. after `n` moves
#[derive(Clone, Debug)]
pub struct StopAfterNSteps {
    n: usize,
    step: usize,
}

impl StopAfterNSteps {
    pub fn new(n: usize) -> Self {
        StopAfterNSteps { n, step: 0 }
    }

    pub fn steps_taken(&self) -> usize {
        self.step
    }
}

impl<E: MultiAgentEnvironment> StopCondition<E> for StopAfterNSteps {
    fn should_stop(&mut self, _policy: &dyn Policy<E>, _env: &E) -> bool {
        self.step += 1;
        self.step >= self.n
    }
}

/// Stops once `n` calls have observed a terminal environment
#[derive(Clone, Debug)]
pub struct StopAfterNEpisodes {
    n: usize,
    episode: usize,
}

impl StopAfterNEpisodes {
    pub fn new(n: usize) -> Self {
        StopAfterNEpisodes { n, episode: 0 }
    }

    pub fn episodes_finished(&self) -> usize {
        self.episode
    }
}

impl<E: MultiAgentEnvironment> StopCondition<E> for StopAfterNEpisodes {
    fn should_stop(&mut self, _policy: &dyn Policy<E>, env: &E) -> bool {
        if env.is_terminal() {
            self.episode += 1;
        }
        self.episode >= self.n
    }
}

/// Stops as soon as the environment reports a terminal state
#[derive(Clone, Copy, Debug, Default)]
pub struct StopWhenDone;

impl<E: MultiAgentEnvironment> StopCondition<E> for StopWhenDone {
    fn should_stop(&mut self, _policy: &dyn Policy<E>, env: &E) -> bool {
        env.is_terminal()
    }
}

/// Stops once the wall-clock budget is spent, counted from the first call
#[derive(Clone, Debug)]
pub struct StopAfterNSeconds {
    budget: Duration,
    started: Option<Instant>,
}

impl StopAfterNSeconds {
    /// Fails when `seconds` is negative, not finite, or too large for a
    /// [`Duration`].
    pub fn new(seconds: f64) -> Result<Self> {
        let budget = Duration::try_from_secs_f64(seconds).map_err(|_| {
            AgoraError::invalid_parameter(
                "seconds".to_string(),
                format!("{} is not a representable duration", seconds),
            )
        })?;
        Ok(StopAfterNSeconds {
            budget,
            started: None,
        })
    }
}

impl<E: MultiAgentEnvironment> StopCondition<E> for StopAfterNSeconds {
    fn should_stop(&mut self, _policy: &dyn Policy<E>, _env: &E) -> bool {
        let started = *self.started.get_or_insert_with(Instant::now);
        started.elapsed() >= self.budget
    }
}

/// How a [`ComposedStopCondition`] combines its members
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combine {
    Any,
    All,
}

/// Combines several stop conditions.
///
/// Every member is evaluated on every call so that counting conditions keep
/// advancing even when another member already decided the outcome.
pub struct ComposedStopCondition<E: MultiAgentEnvironment> {
    conditions: Vec<Box<dyn StopCondition<E>>>,
    combine: Combine,
}

impl<E: MultiAgentEnvironment> ComposedStopCondition<E> {
    pub fn any(conditions: Vec<Box<dyn StopCondition<E>>>) -> Self {
        ComposedStopCondition {
            conditions,
            combine: Combine::Any,
        }
    }

    pub fn all(conditions: Vec<Box<dyn StopCondition<E>>>) -> Self {
        ComposedStopCondition {
            conditions,
            combine: Combine::All,
        }
    }
}

impl<E: MultiAgentEnvironment> StopCondition<E> for ComposedStopCondition<E> {
    fn should_stop(&mut self, policy: &dyn Policy<E>, env: &E) -> bool {
        let votes: Vec<bool> = self
            .conditions
            .iter_mut()
            .map(|c| c.should_stop(policy, env))
            .collect();
        match self.combine {
            Combine::Any => votes.iter().any(|&v| v),
            Combine::All => !votes.is_empty() && votes.iter().all(|&v| v),
        }
    }
}
