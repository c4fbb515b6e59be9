use std::fmt;

use log::warn;

use crate::env::MultiAgentEnvironment;
use crate::error::Result;
use crate::multi_agent::players::PlayerMap;
use crate::policy::Policy;
use crate::types::{Player, Stage};

/// One policy per player, addressed by player identity.
pub struct MultiAgentPolicy<E: MultiAgentEnvironment> {
    policies: PlayerMap<Box<dyn Policy<E>>>,
}

impl<E: MultiAgentEnvironment> MultiAgentPolicy<E> {
    pub fn new(policies: PlayerMap<Box<dyn Policy<E>>>) -> Self {
        MultiAgentPolicy { policies }
    }

    /// Build from `(player, policy)` pairs. Fails on a repeated player.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Player, Box<dyn Policy<E>>)>,
    {
        Ok(Self::new(PlayerMap::new(entries)?))
    }

    pub fn get(&self, player: &Player) -> Result<&dyn Policy<E>> {
        Ok(self.policies.get(player)?.as_ref())
    }

    pub fn get_mut(&mut self, player: &Player) -> Result<&mut Box<dyn Policy<E>>> {
        self.policies.get_mut(player)
    }

    pub fn players(&self) -> &[Player] {
        self.policies.players()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Player, &Box<dyn Policy<E>>)> {
        self.policies.iter()
    }

    pub(crate) fn container(&self) -> &PlayerMap<Box<dyn Policy<E>>> {
        &self.policies
    }

    /// Notify every player's policy of `stage`, in insertion order
    pub fn broadcast(&mut self, stage: Stage, env: &E) {
        for (player, policy) in self.policies.iter_mut() {
            policy.notify(stage, env, player);
        }
    }

    /// Notify one player's policy of `stage`.
    ///
    /// Fails with [`KeyNotFound`](crate::error::AgoraError::KeyNotFound) when `player` has no policy.
    pub fn try_notify(&mut self, stage: Stage, env: &E, player: &Player) -> Result<()> {
        self.policies.get_mut(player)?.notify(stage, env, player);
        Ok(())
    }

    /// Request the update every policy performs at `stage`
    pub fn optimise_all(&mut self, stage: Stage) {
        for policy in self.policies.values_mut() {
            policy.optimise(stage);
        }
    }

    /// Plan one action per player.
    ///
    /// The returned iterator is lazy: a player's policy is only asked when
    /// the iterator reaches that player.
    pub fn plan_all<'a>(
        &'a mut self,
        env: &'a E,
    ) -> impl Iterator<Item = Result<(Player, E::Action)>> + 'a {
        self.policies.iter_mut().map(move |(player, policy)| {
            let action = policy.plan(env, player)?;
            Ok((player.clone(), action))
        })
    }
}

impl<E: MultiAgentEnvironment> fmt::Debug for MultiAgentPolicy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiAgentPolicy")
            .field("players", &self.players())
            .finish()
    }
}

impl<E: MultiAgentEnvironment> Policy<E> for MultiAgentPolicy<E> {
    fn plan(&mut self, env: &E, player: &Player) -> Result<E::Action> {
        self.policies.get_mut(player)?.plan(env, player)
    }

    /// Forwards to the player's own policy.
    ///
    /// `Policy::notify` cannot fail, so a player without a policy is logged at
    /// `warn` and the notification is dropped. Use
    /// [`MultiAgentPolicy::try_notify`] to get the [`KeyNotFound`](crate::error::AgoraError::KeyNotFound).
    fn notify(&mut self, stage: Stage, env: &E, player: &Player) {
        if let Err(err) = self.try_notify(stage, env, player) {
            warn!("dropping {} notification: {}", stage, err);
        }
    }

    fn optimise(&mut self, stage: Stage) {
        self.optimise_all(stage);
    }
}
