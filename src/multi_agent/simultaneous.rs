use log::{debug, trace};

use crate::condition::{ResetCondition, StopCondition};
use crate::env::MultiAgentEnvironment;
use crate::error::Result;
use crate::multi_agent::hook::MultiAgentHook;
use crate::multi_agent::policy::MultiAgentPolicy;
use crate::multi_agent::run::{announce, announce_and_optimise, final_observation, RunSummary};
use crate::types::Stage;

/// Simultaneous-move discipline: every player plans, then the environment
/// applies all actions as one joint move.
///
/// Stage notifications always go to every player, and the stop condition
/// is evaluated against the whole multi-agent policy.
pub(crate) fn run_simultaneous<E, S, R>(
    policy: &mut MultiAgentPolicy<E>,
    env: &mut E,
    stop: &mut S,
    hook: &mut MultiAgentHook<E>,
    reset: &mut R,
) -> Result<RunSummary>
where
    E: MultiAgentEnvironment,
    S: StopCondition<E> + ?Sized,
    R: ResetCondition<E> + ?Sized,
{
    let mut summary = RunSummary::default();

    announce(Stage::PreExperiment, policy, hook, env)?;

    let mut is_stop = false;
    while !is_stop {
        env.reset()?;
        summary.episodes += 1;
        debug!("episode {} started", summary.episodes);

        announce_and_optimise(Stage::PreEpisode, policy, hook, env)?;

        while !reset.should_reset(&*policy, env) {
            announce_and_optimise(Stage::PreAct, policy, hook, env)?;

            let actions = policy.plan_all(env).collect::<Result<Vec<_>>>()?;
            trace!("episode {}: joint move of {} players", summary.episodes, actions.len());
            env.step_joint(actions)?;
            summary.moves += 1;

            announce_and_optimise(Stage::PostAct, policy, hook, env)?;

            if stop.should_stop(&*policy, env) {
                is_stop = true;
                debug!("stop condition met; final observation for all players");
                final_observation(policy, hook, env)?;
                break;
            }
        }

        announce_and_optimise(Stage::PostEpisode, policy, hook, env)?;
        debug!("episode {} finished", summary.episodes);
    }

    announce(Stage::PostExperiment, policy, hook, env)?;
    Ok(summary)
}
