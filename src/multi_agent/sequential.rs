use log::{debug, trace};

use crate::condition::{ResetCondition, StopCondition};
use crate::env::MultiAgentEnvironment;
use crate::error::Result;
use crate::multi_agent::hook::MultiAgentHook;
use crate::multi_agent::iterator::CurrentPlayerIterator;
use crate::multi_agent::policy::MultiAgentPolicy;
use crate::multi_agent::run::{announce, announce_and_optimise, final_observation, RunSummary};
use crate::types::Stage;

/// Turn-based discipline: one player moves per environment step.
///
/// Each turn runs `PreAct`, plan, step, `PostAct` for the acting player
/// only. When the stop condition fires, every player additionally gets a
/// `PreAct` notification and one more plan call so that all of them see
/// the final state; an ordinary episode end skips this because the next
/// episode's `PreEpisode` follows right away.
pub(crate) fn run_sequential<E, S, R>(
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

        if !reset.should_reset(&*policy, env) {
            let mut turns = CurrentPlayerIterator::new();
            loop {
                let player = turns.next_player(env);
                trace!("episode {}: {} to move", summary.episodes, player);

                let acting = policy.get_mut(&player)?;
                let observer = hook.get_mut(&player)?;

                acting.notify(Stage::PreAct, env, &player);
                acting.optimise(Stage::PreAct);
                observer.notify(Stage::PreAct, &**acting, env, &player);

                let action = acting.plan(env, &player)?;
                env.step(action)?;
                summary.moves += 1;

                acting.notify(Stage::PostAct, env, &player);
                acting.optimise(Stage::PostAct);
                observer.notify(Stage::PostAct, &**acting, env, &player);

                if stop.should_stop(&**acting, env) {
                    is_stop = true;
                    debug!(
                        "stop condition met on {}'s move; final observation for all players",
                        player
                    );
                    final_observation(policy, hook, env)?;
                    break;
                }

                if reset.should_reset(&*policy, env) {
                    break;
                }
            }
        }

        announce_and_optimise(Stage::PostEpisode, policy, hook, env)?;
        debug!("episode {} finished", summary.episodes);
    }

    announce(Stage::PostExperiment, policy, hook, env)?;
    Ok(summary)
}
