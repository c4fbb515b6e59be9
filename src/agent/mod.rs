//! # Agents
//!
//! An [`Agent`] bundles a policy with its own experience cache. Whenever the
//! run loop notifies the agent about a stage it records what happened to
//! *its* player:
//!
//! - `PreAct` stores the player's current observation
//! - `plan` stores the chosen action
//! - `PostAct` stores the player's reward and the termination flag
//!
//! In a sequential game only one player acts per environment step, yet every
//! agent still accumulates a consistent trace of its own turns because the
//! loop addresses each agent by its player identity.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use agora::agent::Agent;
//! use agora::env::{SimpleEnvironment, TurnBasedWrapper};
//! use agora::policy::RandomPolicy;
//!
//! fn wrap<E: SimpleEnvironment>(_: &TurnBasedWrapper<E>) -> Agent<RandomPolicy, TurnBasedWrapper<E>> {
//!     Agent::new(RandomPolicy::new(), 1000)
//! }
//! ```

pub mod trajectory;

pub use trajectory::{Trajectory, TrajectoryStep};

use crate::env::MultiAgentEnvironment;
use crate::error::Result;
use crate::policy::Policy;
use crate::types::{Player, Stage};

/// A policy bundled with an experience cache
pub struct Agent<P, E: MultiAgentEnvironment> {
    pub policy: P,
    pub trajectory: Trajectory<E::Observation, E::Action>,
}

impl<P, E: MultiAgentEnvironment> Agent<P, E> {
    pub fn new(policy: P, capacity: usize) -> Self {
        Agent {
            policy,
            trajectory: Trajectory::new(capacity),
        }
    }

    /// Deliver an observation into the cache
    pub fn push_observation(&mut self, observation: E::Observation) {
        self.trajectory.push_observation(observation);
    }

    /// Deliver the outcome of a move into the cache
    pub fn push_outcome(&mut self, reward: f32, terminal: bool) {
        self.trajectory.push_reward(reward);
        self.trajectory.push_terminal(terminal);
    }
}

impl<P, E> Policy<E> for Agent<P, E>
where
    E: MultiAgentEnvironment,
    E::Action: Clone,
    P: Policy<E>,
{
    fn plan(&mut self, env: &E, player: &Player) -> Result<E::Action> {
        let action = self.policy.plan(env, player)?;
        self.trajectory.push_action(action.clone());
        Ok(action)
    }

    fn notify(&mut self, stage: Stage, env: &E, player: &Player) {
        match stage {
            Stage::PreAct => self.push_observation(env.observation(player)),
            Stage::PostAct => self.push_outcome(env.reward(player), env.is_terminal()),
            _ => {}
        }
        self.policy.notify(stage, env, player);
    }

    fn optimise(&mut self, stage: Stage) {
        self.policy.learn(stage, &mut self.trajectory);
        self.policy.optimise(stage);
    }
}
