use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::env::MultiAgentEnvironment;
use crate::hooks::Hook;
use crate::policy::Policy;
use crate::types::{Player, Stage};

/// Measures the time between the player's `PreAct` and `PostAct`
/// notifications, keeping the most recent `history_size` measurements.
#[derive(Clone, Debug)]
pub struct TimePerStep {
    times: VecDeque<Duration>,
    history_size: usize,
    started: Option<Instant>,
}

impl TimePerStep {
    pub fn new(history_size: usize) -> Self {
        let history_size = history_size.max(1);
        TimePerStep {
            times: VecDeque::with_capacity(history_size),
            history_size,
            started: None,
        }
    }

    pub fn times(&self) -> &VecDeque<Duration> {
        &self.times
    }

    /// Mean of the recorded durations
    pub fn mean(&self) -> Option<Duration> {
        if self.times.is_empty() {
            return None;
        }
        let total: Duration = self.times.iter().sum();
        Some(total / self.times.len() as u32)
    }
}

impl Default for TimePerStep {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl<E: MultiAgentEnvironment> Hook<E> for TimePerStep {
    fn notify(&mut self, stage: Stage, _policy: &dyn Policy<E>, _env: &E, _player: &Player) {
        match stage {
            Stage::PreAct => self.started = Some(Instant::now()),
            Stage::PostAct => {
                if let Some(started) = self.started.take() {
                    if self.times.len() >= self.history_size {
                        self.times.pop_front();
                    }
                    self.times.push_back(started.elapsed());
                }
            }
            _ => {}
        }
    }
}
