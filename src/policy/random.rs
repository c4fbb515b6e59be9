use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::env::MultiAgentEnvironment;
use crate::error::{AgoraError, Result};
use crate::policy::Policy;
use crate::types::Player;

/// Picks uniformly among the legal actions of the acting player.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible policy for tests and benchmarks
    pub fn seeded(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Policy<E> for RandomPolicy
where
    E: MultiAgentEnvironment,
{
    fn plan(&mut self, env: &E, player: &Player) -> Result<E::Action> {
        let mut actions = env.legal_actions(player);
        if actions.is_empty() {
            return Err(AgoraError::Policy(format!(
                "no legal action available for player {}",
                player
            )));
        }
        let index = self.rng.gen_range(0..actions.len());
        Ok(actions.swap_remove(index))
    }
}
