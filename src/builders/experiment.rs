use crate::condition::{ResetCondition, ResetIfEnvTerminated, StopCondition};
use crate::config::ExperimentConfig;
use crate::env::MultiAgentEnvironment;
use crate::error::{AgoraError, Result};
use crate::multi_agent::{run_with_reset, MultiAgentHook, MultiAgentPolicy};

/// A fully wired experiment: per-player policies and hooks together with
/// the conditions that end episodes and the whole run.
pub struct Experiment<E: MultiAgentEnvironment> {
    policy: MultiAgentPolicy<E>,
    hook: MultiAgentHook<E>,
    stop: Box<dyn StopCondition<E>>,
    reset: Box<dyn ResetCondition<E>>,
}

impl<E: MultiAgentEnvironment + 'static> Experiment<E> {
    pub fn builder() -> ExperimentBuilder<E> {
        ExperimentBuilder::new()
    }
}

impl<E: MultiAgentEnvironment> Experiment<E> {
    /// Drive `env` until the stop condition fires
    pub fn run(&mut self, env: &mut E) -> Result<&MultiAgentPolicy<E>> {
        let policy = run_with_reset(
            &mut self.policy,
            env,
            &mut *self.stop,
            &mut self.hook,
            &mut *self.reset,
        )?;
        Ok(&*policy)
    }

    pub fn policy(&self) -> &MultiAgentPolicy<E> {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut MultiAgentPolicy<E> {
        &mut self.policy
    }

    pub fn hook(&self) -> &MultiAgentHook<E> {
        &self.hook
    }

    pub fn into_parts(self) -> (MultiAgentPolicy<E>, MultiAgentHook<E>) {
        (self.policy, self.hook)
    }
}

/// Builder for [`Experiment`]
pub struct ExperimentBuilder<E: MultiAgentEnvironment> {
    policy: Option<MultiAgentPolicy<E>>,
    hook: Option<MultiAgentHook<E>>,
    stop: Option<Box<dyn StopCondition<E>>>,
    reset: Option<Box<dyn ResetCondition<E>>>,
    config: Option<ExperimentConfig>,
}

impl<E: MultiAgentEnvironment + 'static> ExperimentBuilder<E> {
    pub fn new() -> Self {
        ExperimentBuilder {
            policy: None,
            hook: None,
            stop: None,
            reset: None,
            config: None,
        }
    }

    pub fn policy(mut self, policy: MultiAgentPolicy<E>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Defaults to an [`EmptyHook`](crate::hooks::EmptyHook) per player
    pub fn hook(mut self, hook: MultiAgentHook<E>) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn stop_condition<S: StopCondition<E> + 'static>(mut self, stop: S) -> Self {
        self.stop = Some(Box::new(stop));
        self
    }

    /// Defaults to [`ResetIfEnvTerminated`]
    pub fn reset_condition<R: ResetCondition<E> + 'static>(mut self, reset: R) -> Self {
        self.reset = Some(Box::new(reset));
        self
    }

    /// Take stop and reset conditions from `config` unless set explicitly
    pub fn config(mut self, config: ExperimentConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<Experiment<E>> {
        let policy = self.policy.ok_or_else(|| {
            AgoraError::invalid_parameter("policy", "Policy not specified")
        })?;

        let hook = match self.hook {
            Some(hook) => hook,
            None => MultiAgentHook::empty(policy.players())?,
        };
        if !hook.matches(&policy) {
            return Err(AgoraError::PlayerMismatch {
                policy: policy.players().to_vec(),
                hook: hook.players().to_vec(),
            });
        }

        let stop: Box<dyn StopCondition<E>> = match (self.stop, &self.config) {
            (Some(stop), _) => stop,
            (None, Some(config)) => config.stop.build()?,
            (None, None) => {
                return Err(AgoraError::invalid_parameter(
                    "stop_condition",
                    "Stop condition not specified",
                ))
            }
        };

        let reset: Box<dyn ResetCondition<E>> = match (self.reset, &self.config) {
            (Some(reset), _) => reset,
            (None, Some(config)) => config.reset.build()?,
            (None, None) => Box::new(ResetIfEnvTerminated),
        };

        Ok(Experiment {
            policy,
            hook,
            stop,
            reset,
        })
    }
}

impl<E: MultiAgentEnvironment + 'static> Default for ExperimentBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
