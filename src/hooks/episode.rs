use ndarray::Array1;

use crate::env::MultiAgentEnvironment;
use crate::hooks::Hook;
use crate::metrics::Statistics;
use crate::policy::Policy;
use crate::types::{Player, Stage};

/// Counts the player's own moves in each episode
#[derive(Clone, Debug, Default)]
pub struct StepsPerEpisode {
    steps: Vec<usize>,
    count: usize,
}

impl StepsPerEpisode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move counts of finished episodes
    pub fn steps(&self) -> &[usize] {
        &self.steps
    }
}

impl<E: MultiAgentEnvironment> Hook<E> for StepsPerEpisode {
    fn notify(&mut self, stage: Stage, _policy: &dyn Policy<E>, _env: &E, _player: &Player) {
        match stage {
            Stage::PreEpisode => self.count = 0,
            Stage::PostAct => self.count += 1,
            Stage::PostEpisode => self.steps.push(self.count),
            _ => {}
        }
    }
}

/// Records every reward the player received, grouped by episode
#[derive(Clone, Debug, Default)]
pub struct RewardsPerEpisode {
    rewards: Vec<Vec<f32>>,
}

impl RewardsPerEpisode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rewards(&self) -> &[Vec<f32>] {
        &self.rewards
    }
}

impl<E: MultiAgentEnvironment> Hook<E> for RewardsPerEpisode {
    fn notify(&mut self, stage: Stage, _policy: &dyn Policy<E>, env: &E, player: &Player) {
        match stage {
            Stage::PreEpisode => self.rewards.push(Vec::new()),
            Stage::PostAct => {
                if let Some(episode) = self.rewards.last_mut() {
                    episode.push(env.reward(player));
                }
            }
            _ => {}
        }
    }
}

/// Sums the player's rewards over each episode
#[derive(Clone, Debug, Default)]
pub struct TotalRewardPerEpisode {
    totals: Vec<f32>,
    reward: f32,
}

impl TotalRewardPerEpisode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals of finished episodes
    pub fn totals(&self) -> &[f32] {
        &self.totals
    }

    pub fn to_array(&self) -> Array1<f32> {
        Array1::from_vec(self.totals.clone())
    }

    /// Summary of the finished episodes' totals
    pub fn statistics(&self) -> Statistics {
        Statistics::from_array(self.to_array().view())
    }
}

impl<E: MultiAgentEnvironment> Hook<E> for TotalRewardPerEpisode {
    fn notify(&mut self, stage: Stage, _policy: &dyn Policy<E>, env: &E, player: &Player) {
        match stage {
            Stage::PreEpisode => self.reward = 0.0,
            Stage::PostAct => self.reward += env.reward(player),
            Stage::PostEpisode => self.totals.push(self.reward),
            _ => {}
        }
    }
}
