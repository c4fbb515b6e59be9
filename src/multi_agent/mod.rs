//! # Multi-Agent Run Loop
//!
//! This module decides, for an environment hosting several players, whose
//! turn it is, what each player is told, and when training updates fire.
//!
//! ## Core Concepts
//!
//! - **Per-player containers**: [`MultiAgentPolicy`] and [`MultiAgentHook`]
//!   map every player to its own policy or hook. Both must address the same
//!   players; [`run`] checks this before touching the environment.
//! - **Current player**: [`CurrentPlayerIterator`] reads and advances the
//!   environment's turn cursor for sequential games.
//! - **Disciplines**: the environment's [`DynamicStyle`](crate::types::DynamicStyle)
//!   selects the sequential (one player per step) or simultaneous (joint
//!   move) loop.
//!
//! ## Stage Order (sequential)
//!
//! ```text
//! PreExperiment
//! repeat until stopped:
//!     reset, PreEpisode (+ optimise)
//!     for each acting player:
//!         PreAct (+ optimise), plan, step, PostAct (+ optimise)
//!         stop?  -> PreAct to all players, plan for all players, end
//!         reset? -> end episode
//!     PostEpisode (+ optimise)
//! PostExperiment
//! ```

pub mod hook;
pub mod iterator;
pub mod players;
pub mod policy;
pub mod run;
mod sequential;
mod simultaneous;

pub use hook::MultiAgentHook;
pub use iterator::{CurrentPlayerIterator, PlayerTurns};
pub use players::PlayerMap;
pub use policy::MultiAgentPolicy;
pub use run::{run, run_with_reset};
