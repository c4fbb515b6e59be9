//! # Stop and Reset Conditions
//!
//! Predicates the run loop evaluates to decide when the experiment halts
//! ([`StopCondition`]) and when the current episode ends
//! ([`ResetCondition`]). Any `FnMut(&dyn Policy<E>, &E) -> bool` closure can
//! serve as either.

pub mod reset;
pub mod stop;

pub use reset::{ResetAfterNSteps, ResetCondition, ResetIfEnvTerminated};
pub use stop::{
    Combine, ComposedStopCondition, StopAfterNEpisodes, StopAfterNSeconds, StopAfterNSteps,
    StopCondition, StopWhenDone,
};
