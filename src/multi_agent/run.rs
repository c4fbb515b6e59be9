use log::{debug, info};

use crate::condition::{ResetCondition, ResetIfEnvTerminated, StopCondition};
use crate::env::MultiAgentEnvironment;
use crate::error::{AgoraError, Result};
use crate::multi_agent::hook::MultiAgentHook;
use crate::multi_agent::policy::MultiAgentPolicy;
use crate::multi_agent::sequential::run_sequential;
use crate::multi_agent::simultaneous::run_simultaneous;
use crate::types::{DynamicStyle, Stage};

/// Run an experiment, ending each episode when the environment terminates.
///
/// See [`run_with_reset`].
pub fn run<'p, E, S>(
    policy: &'p mut MultiAgentPolicy<E>,
    env: &mut E,
    stop: &mut S,
    hook: &mut MultiAgentHook<E>,
) -> Result<&'p mut MultiAgentPolicy<E>>
where
    E: MultiAgentEnvironment,
    S: StopCondition<E> + ?Sized,
{
    run_with_reset(policy, env, stop, hook, &mut ResetIfEnvTerminated)
}

/// Run an experiment until `stop` fires.
///
/// `policy` and `hook` must address the same set of players; otherwise
/// [`AgoraError::PlayerMismatch`] is returned before the environment is
/// touched. The environment's [`DynamicStyle`] then selects the sequential
/// or the simultaneous discipline. Errors raised by the environment or a
/// policy abort the run and are returned unchanged.
pub fn run_with_reset<'p, E, S, R>(
    policy: &'p mut MultiAgentPolicy<E>,
    env: &mut E,
    stop: &mut S,
    hook: &mut MultiAgentHook<E>,
    reset: &mut R,
) -> Result<&'p mut MultiAgentPolicy<E>>
where
    E: MultiAgentEnvironment,
    S: StopCondition<E> + ?Sized,
    R: ResetCondition<E> + ?Sized,
{
    if !hook.matches(policy) {
        return Err(AgoraError::PlayerMismatch {
            policy: policy.players().to_vec(),
            hook: hook.players().to_vec(),
        });
    }

    let style = env.dynamic_style();
    info!(
        "starting {} experiment with {} players",
        style,
        policy.len()
    );

    let summary = match style {
        DynamicStyle::Sequential => run_sequential(policy, env, stop, hook, reset)?,
        DynamicStyle::Simultaneous => run_simultaneous(policy, env, stop, hook, reset)?,
    };

    info!(
        "experiment finished after {} episodes and {} moves",
        summary.episodes, summary.moves
    );
    Ok(policy)
}

/// Counters a discipline reports back for logging
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub episodes: usize,
    pub moves: usize,
}

/// Notify every policy, then every hook
pub(crate) fn announce<E: MultiAgentEnvironment>(
    stage: Stage,
    policy: &mut MultiAgentPolicy<E>,
    hook: &mut MultiAgentHook<E>,
    env: &E,
) -> Result<()> {
    policy.broadcast(stage, env);
    hook.broadcast(stage, policy, env)
}

/// Notify every policy, request their update, then notify every hook
pub(crate) fn announce_and_optimise<E: MultiAgentEnvironment>(
    stage: Stage,
    policy: &mut MultiAgentPolicy<E>,
    hook: &mut MultiAgentHook<E>,
    env: &E,
) -> Result<()> {
    policy.broadcast(stage, env);
    policy.optimise_all(stage);
    hook.broadcast(stage, policy, env)
}

/// Let every player see the final state before teardown: broadcast
/// `PreAct` and plan once for every player.
///
/// Only the side effects of planning matter here. The actions are dropped.
/// A finished game commonly has no legal action left, so
/// [`AgoraError::Policy`] failures are dropped too. Any other error aborts
/// the run.
pub(crate) fn final_observation<E: MultiAgentEnvironment>(
    policy: &mut MultiAgentPolicy<E>,
    hook: &mut MultiAgentHook<E>,
    env: &E,
) -> Result<()> {
    announce(Stage::PreAct, policy, hook, env)?;
    for planned in policy.plan_all(env) {
        match planned {
            Ok(_) => {}
            Err(AgoraError::Policy(reason)) => {
                debug!("ignoring final plan failure: {}", reason);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
