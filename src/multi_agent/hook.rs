use std::fmt;

use crate::env::MultiAgentEnvironment;
use crate::error::Result;
use crate::hooks::{EmptyHook, Hook};
use crate::multi_agent::players::PlayerMap;
use crate::multi_agent::policy::MultiAgentPolicy;
use crate::policy::Policy;
use crate::types::{Player, Stage};

/// One hook per player, addressed by player identity.
pub struct MultiAgentHook<E: MultiAgentEnvironment> {
    hooks: PlayerMap<Box<dyn Hook<E>>>,
}

impl<E: MultiAgentEnvironment> MultiAgentHook<E> {
    pub fn new(hooks: PlayerMap<Box<dyn Hook<E>>>) -> Self {
        MultiAgentHook { hooks }
    }

    /// Build from `(player, hook)` pairs. Fails on a repeated player.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Player, Box<dyn Hook<E>>)>,
    {
        Ok(Self::new(PlayerMap::new(entries)?))
    }

    /// An [`EmptyHook`] for each of `players`
    pub fn empty(players: &[Player]) -> Result<Self> {
        Self::from_entries(
            players
                .iter()
                .map(|p| (p.clone(), Box::new(EmptyHook) as Box<dyn Hook<E>>)),
        )
    }

    pub fn get(&self, player: &Player) -> Result<&Box<dyn Hook<E>>> {
        self.hooks.get(player)
    }

    pub fn get_mut(&mut self, player: &Player) -> Result<&mut Box<dyn Hook<E>>> {
        self.hooks.get_mut(player)
    }

    pub fn players(&self) -> &[Player] {
        self.hooks.players()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub(crate) fn container(&self) -> &PlayerMap<Box<dyn Hook<E>>> {
        &self.hooks
    }

    /// Whether this container addresses exactly the players of `policy`
    pub fn matches(&self, policy: &MultiAgentPolicy<E>) -> bool {
        policy.container().same_players(&self.hooks)
    }

    /// Notify every player's hook of `stage`, handing each its own player's
    /// policy.
    pub fn broadcast(&mut self, stage: Stage, policy: &MultiAgentPolicy<E>, env: &E) -> Result<()> {
        for (player, hook) in self.hooks.iter_mut() {
            let own: &dyn Policy<E> = policy.get(player)?;
            hook.notify(stage, own, env, player);
        }
        Ok(())
    }
}

impl<E: MultiAgentEnvironment> fmt::Debug for MultiAgentHook<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiAgentHook")
            .field("players", &self.players())
            .finish()
    }
}
