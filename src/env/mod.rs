//! # Multi-Agent Environments
//!
//! The run loop never defines environment dynamics. It only relies on the
//! capabilities collected in [`MultiAgentEnvironment`]: who acts now, how to
//! hand the turn to the next player, per-player observations and rewards,
//! termination, and the [`DynamicStyle`] that selects the turn discipline.
//!
//! [`TurnBasedWrapper`] adapts a plain single-agent environment into a
//! round-robin sequential game.

pub mod turn_based;

pub use turn_based::{SimpleEnvironment, TurnBasedWrapper};

use crate::error::{AgoraError, Result};
use crate::types::{DynamicStyle, Player};

/// Environment hosting more than one decision-making player
pub trait MultiAgentEnvironment {
    type Observation;
    type Action;

    /// Every player taking part, in a stable order
    fn players(&self) -> Vec<Player>;

    /// Number of players
    fn num_players(&self) -> usize {
        self.players().len()
    }

    /// Player whose turn it is
    fn current_player(&self) -> Player;

    /// Move the turn cursor to the next player
    fn next_player(&mut self);

    /// Whether players move one at a time or all together
    fn dynamic_style(&self) -> DynamicStyle;

    /// What `player` currently observes
    fn observation(&self, player: &Player) -> Self::Observation;

    /// Actions `player` may take in the current state
    fn legal_actions(&self, player: &Player) -> Vec<Self::Action>;

    /// Reward `player` received from the last transition
    fn reward(&self, player: &Player) -> f32;

    /// Whether the current episode has ended
    fn is_terminal(&self) -> bool;

    /// Start a fresh episode. Resets the turn cursor as well.
    fn reset(&mut self) -> Result<()>;

    /// Apply the current player's action.
    fn step(&mut self, _action: Self::Action) -> Result<()> {
        Err(AgoraError::UnsupportedDynamics(
            "environment does not accept single-player moves".to_string(),
        ))
    }

    /// Apply one action per player as a single joint move.
    fn step_joint(&mut self, _actions: Vec<(Player, Self::Action)>) -> Result<()> {
        Err(AgoraError::UnsupportedDynamics(
            "environment does not accept joint moves".to_string(),
        ))
    }
}
