use crate::env::MultiAgentEnvironment;
use crate::hooks::Hook;
use crate::policy::Policy;
use crate::types::{Player, Stage};

/// Calls `f(step, policy, env, player)` after every `n`-th move of the player
pub struct DoEveryNStep<F> {
    n: usize,
    t: usize,
    f: F,
}

impl<F> DoEveryNStep<F> {
    pub fn new(n: usize, f: F) -> Self {
        DoEveryNStep { n: n.max(1), t: 0, f }
    }
}

impl<E, F> Hook<E> for DoEveryNStep<F>
where
    E: MultiAgentEnvironment,
    F: FnMut(usize, &dyn Policy<E>, &E, &Player),
{
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<E>, env: &E, player: &Player) {
        if stage == Stage::PostAct {
            self.t += 1;
            if self.t % self.n == 0 {
                (self.f)(self.t, policy, env, player);
            }
        }
    }
}

/// Calls `f(episode, policy, env, player)` after every `n`-th episode
pub struct DoEveryNEpisode<F> {
    n: usize,
    t: usize,
    f: F,
}

impl<F> DoEveryNEpisode<F> {
    pub fn new(n: usize, f: F) -> Self {
        DoEveryNEpisode { n: n.max(1), t: 0, f }
    }
}

impl<E, F> Hook<E> for DoEveryNEpisode<F>
where
    E: MultiAgentEnvironment,
    F: FnMut(usize, &dyn Policy<E>, &E, &Player),
{
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<E>, env: &E, player: &Player) {
        if stage == Stage::PostEpisode {
            self.t += 1;
            if self.t % self.n == 0 {
                (self.f)(self.t, policy, env, player);
            }
        }
    }
}

/// Calls `f(policy, env, player)` once the experiment is over
pub struct DoOnExit<F> {
    f: F,
}

impl<F> DoOnExit<F> {
    pub fn new(f: F) -> Self {
        DoOnExit { f }
    }
}

impl<E, F> Hook<E> for DoOnExit<F>
where
    E: MultiAgentEnvironment,
    F: FnMut(&dyn Policy<E>, &E, &Player),
{
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<E>, env: &E, player: &Player) {
        if stage == Stage::PostExperiment {
            (self.f)(policy, env, player);
        }
    }
}
