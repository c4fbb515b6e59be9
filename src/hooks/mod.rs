//! # Hooks
//!
//! Hooks observe a run without influencing decisions. Each player owns one
//! hook; the run loop notifies it at every [`Stage`] together with that
//! player's policy, the environment and the player identity.
//!
//! ## Available Hooks
//!
//! - [`EmptyHook`]: does nothing
//! - [`ComposedHook`]: fans a notification out to sub-hooks in order
//! - [`StepsPerEpisode`], [`RewardsPerEpisode`], [`TotalRewardPerEpisode`]:
//!   per-episode recorders
//! - [`DoEveryNStep`], [`DoEveryNEpisode`], [`DoOnExit`]: user callbacks
//! - [`TimePerStep`]: wall-clock time between `PreAct` and `PostAct`

pub mod callback;
pub mod episode;
pub mod timing;

pub use callback::{DoEveryNEpisode, DoEveryNStep, DoOnExit};
pub use episode::{RewardsPerEpisode, StepsPerEpisode, TotalRewardPerEpisode};
pub use timing::TimePerStep;

use crate::env::MultiAgentEnvironment;
use crate::policy::Policy;
use crate::types::{Player, Stage};

/// Observer of one player's lifecycle
pub trait Hook<E: MultiAgentEnvironment> {
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<E>, env: &E, player: &Player);
}

impl<E, H> Hook<E> for Box<H>
where
    E: MultiAgentEnvironment,
    H: Hook<E> + ?Sized,
{
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<E>, env: &E, player: &Player) {
        (**self).notify(stage, policy, env, player)
    }
}

/// Hook that ignores every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyHook;

impl<E: MultiAgentEnvironment> Hook<E> for EmptyHook {
    fn notify(&mut self, _stage: Stage, _policy: &dyn Policy<E>, _env: &E, _player: &Player) {}
}

/// Ordered sequence of hooks notified one after another
pub struct ComposedHook<E: MultiAgentEnvironment> {
    hooks: Vec<Box<dyn Hook<E>>>,
}

impl<E: MultiAgentEnvironment> ComposedHook<E> {
    pub fn new() -> Self {
        ComposedHook { hooks: Vec::new() }
    }

    /// Append a hook; it is notified after every hook added before it
    pub fn with<H: Hook<E> + 'static>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn push(&mut self, hook: Box<dyn Hook<E>>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<E: MultiAgentEnvironment> Default for ComposedHook<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MultiAgentEnvironment> From<Vec<Box<dyn Hook<E>>>> for ComposedHook<E> {
    fn from(hooks: Vec<Box<dyn Hook<E>>>) -> Self {
        ComposedHook { hooks }
    }
}

impl<E: MultiAgentEnvironment> Hook<E> for ComposedHook<E> {
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<E>, env: &E, player: &Player) {
        for hook in self.hooks.iter_mut() {
            hook.notify(stage, policy, env, player);
        }
    }
}
