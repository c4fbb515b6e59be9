//! # Policies
//!
//! A policy is the decision-making half of a player. The run loop asks it to
//! `plan` an action, tells it about lifecycle [`Stage`]s through `notify`,
//! and requests training updates through `optimise`. How a policy learns is
//! its own business; the loop only decides *when* it is asked to.

pub mod random;

pub use random::RandomPolicy;

use crate::agent::Trajectory;
use crate::env::MultiAgentEnvironment;
use crate::error::Result;
use crate::types::{Player, Stage};

/// Decision-making component of a player
pub trait Policy<E: MultiAgentEnvironment> {
    /// Produce an action for `player` in the current state of `env`
    fn plan(&mut self, env: &E, player: &Player) -> Result<E::Action>;

    /// React to a lifecycle stage
    fn notify(&mut self, _stage: Stage, _env: &E, _player: &Player) {}

    /// Run whatever update the policy performs at `stage`
    fn optimise(&mut self, _stage: Stage) {}

    /// Update from an experience cache owned by an [`Agent`](crate::agent::Agent)
    fn learn(&mut self, _stage: Stage, _trajectory: &mut Trajectory<E::Observation, E::Action>) {}
}

impl<E, P> Policy<E> for Box<P>
where
    E: MultiAgentEnvironment,
    P: Policy<E> + ?Sized,
{
    fn plan(&mut self, env: &E, player: &Player) -> Result<E::Action> {
        (**self).plan(env, player)
    }

    fn notify(&mut self, stage: Stage, env: &E, player: &Player) {
        (**self).notify(stage, env, player)
    }

    fn optimise(&mut self, stage: Stage) {
        (**self).optimise(stage)
    }

    fn learn(&mut self, stage: Stage, trajectory: &mut Trajectory<E::Observation, E::Action>) {
        (**self).learn(stage, trajectory)
    }
}
