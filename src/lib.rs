//! # Agora - Turn Management for Multi-Agent Reinforcement Learning
//!
//! Agora orchestrates environments that host more than one decision-making
//! player. It decides whose turn it is, what each player observes and is
//! told, and when training updates fire, while keeping every player's own
//! bookkeeping in step with the environment.
//!
//! ## Key Features
//!
//! - **Per-player containers**: one policy and one hook per player, addressed
//!   by player identity
//! - **Two disciplines**: turn-based (sequential) and simultaneous-move games
//!   behind a single [`run`](multi_agent::run) entry point
//! - **Stage protocol**: experiment, episode and act stages delivered to
//!   policies and hooks in a fixed order
//! - **Conditions and hooks**: stock stop/reset conditions and recording
//!   hooks, configurable from JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agora::builders::Experiment;
//! use agora::condition::StopAfterNEpisodes;
//! use agora::env::{SimpleEnvironment, TurnBasedWrapper};
//! use agora::multi_agent::MultiAgentPolicy;
//! use agora::policy::{Policy, RandomPolicy};
//! use agora::types::Player;
//!
//! fn play<G: SimpleEnvironment + 'static>(game: G) -> agora::error::Result<()> {
//!     let players = vec![Player::from("cross"), Player::from("nought")];
//!     let mut env = TurnBasedWrapper::new(game, players.clone())?;
//!
//!     let policy = MultiAgentPolicy::from_entries(players.into_iter().map(|p| {
//!         (p, Box::new(RandomPolicy::new()) as Box<dyn Policy<TurnBasedWrapper<G>>>)
//!     }))?;
//!
//!     let mut experiment = Experiment::builder()
//!         .policy(policy)
//!         .stop_condition(StopAfterNEpisodes::new(100))
//!         .build()?;
//!     experiment.run(&mut env)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - Policies bundled with an experience cache
//! - [`builders`] - Experiment builder
//! - [`condition`] - Stop and reset conditions
//! - [`config`] - JSON experiment configuration
//! - [`env`] - Environment capabilities and adapters
//! - [`error`] - Error types and result handling
//! - [`hooks`] - Observers of a run
//! - [`metrics`] - Summary statistics
//! - [`multi_agent`] - Per-player containers and the run loop
//! - [`policy`] - Decision-making components
//! - [`types`] - Player identity, stages and dynamic styles

pub mod agent;
pub mod builders;
pub mod condition;
pub mod config;
pub mod env;
pub mod error;
pub mod hooks;
pub mod metrics;
pub mod multi_agent;
pub mod policy;
pub mod types;

#[cfg(test)]
mod tests;
