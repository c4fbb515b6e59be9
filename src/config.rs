//! Declarative experiment configuration.
//!
//! Stop and reset conditions can be described in JSON and turned into
//! condition objects for a concrete environment type:
//!
//! ```rust
//! use agora::config::ExperimentConfig;
//!
//! let config = ExperimentConfig::from_json(r#"{
//!     "stop": { "type": "any", "conditions": [
//!         { "type": "after_steps", "steps": 10000 },
//!         { "type": "after_seconds", "seconds": 60.0 }
//!     ] },
//!     "reset": { "type": "after_steps", "steps": 200 }
//! }"#).unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::condition::{
    ComposedStopCondition, ResetAfterNSteps, ResetCondition, ResetIfEnvTerminated,
    StopAfterNEpisodes, StopAfterNSeconds, StopAfterNSteps, StopCondition, StopWhenDone,
};
use crate::env::MultiAgentEnvironment;
use crate::error::{AgoraError, Result};

/// Description of a stop condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StopConfig {
    AfterSteps { steps: usize },
    AfterEpisodes { episodes: usize },
    WhenDone,
    AfterSeconds { seconds: f64 },
    Any { conditions: Vec<StopConfig> },
    All { conditions: Vec<StopConfig> },
}

impl StopConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            StopConfig::AfterSteps { steps } if *steps == 0 => Err(AgoraError::invalid_parameter(
                "steps",
                "must be greater than 0",
            )),
            StopConfig::AfterEpisodes { episodes } if *episodes == 0 => Err(
                AgoraError::invalid_parameter("episodes", "must be greater than 0"),
            ),
            StopConfig::AfterSeconds { seconds } if seconds.is_nan() || *seconds <= 0.0 => Err(
                AgoraError::invalid_parameter("seconds", "must be greater than 0"),
            ),
            StopConfig::AfterSeconds { seconds } => StopAfterNSeconds::new(*seconds).map(|_| ()),
            StopConfig::Any { conditions } | StopConfig::All { conditions } => {
                if conditions.is_empty() {
                    return Err(AgoraError::invalid_parameter(
                        "conditions",
                        "at least one condition is required",
                    ));
                }
                conditions.iter().try_for_each(StopConfig::validate)
            }
            _ => Ok(()),
        }
    }

    pub fn build<E>(&self) -> Result<Box<dyn StopCondition<E>>>
    where
        E: MultiAgentEnvironment + 'static,
    {
        self.validate()?;
        self.build_unchecked()
    }

    fn build_unchecked<E>(&self) -> Result<Box<dyn StopCondition<E>>>
    where
        E: MultiAgentEnvironment + 'static,
    {
        let condition: Box<dyn StopCondition<E>> = match self {
            StopConfig::AfterSteps { steps } => Box::new(StopAfterNSteps::new(*steps)),
            StopConfig::AfterEpisodes { episodes } => Box::new(StopAfterNEpisodes::new(*episodes)),
            StopConfig::WhenDone => Box::new(StopWhenDone),
            StopConfig::AfterSeconds { seconds } => Box::new(StopAfterNSeconds::new(*seconds)?),
            StopConfig::Any { conditions } => Box::new(ComposedStopCondition::any(
                conditions
                    .iter()
                    .map(|c| c.build_unchecked())
                    .collect::<Result<Vec<_>>>()?,
            )),
            StopConfig::All { conditions } => Box::new(ComposedStopCondition::all(
                conditions
                    .iter()
                    .map(|c| c.build_unchecked())
                    .collect::<Result<Vec<_>>>()?,
            )),
        };
        Ok(condition)
    }
}

/// Description of an episode-boundary condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResetConfig {
    #[default]
    IfTerminated,
    AfterSteps { steps: usize },
}

impl ResetConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            ResetConfig::AfterSteps { steps } if *steps == 0 => Err(
                AgoraError::invalid_parameter("steps", "must be greater than 0"),
            ),
            _ => Ok(()),
        }
    }

    pub fn build<E>(&self) -> Result<Box<dyn ResetCondition<E>>>
    where
        E: MultiAgentEnvironment + 'static,
    {
        self.validate()?;
        match self {
            ResetConfig::IfTerminated => Ok(Box::new(ResetIfEnvTerminated)),
            ResetConfig::AfterSteps { steps } => Ok(Box::new(ResetAfterNSteps::new(*steps))),
        }
    }
}

/// Stop and reset conditions of an experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub stop: StopConfig,
    #[serde(default)]
    pub reset: ResetConfig,
}

impl ExperimentConfig {
    pub fn new(stop: StopConfig) -> Self {
        ExperimentConfig {
            stop,
            reset: ResetConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExperimentConfig = serde_json::from_str(json)?;
        config.stop.validate()?;
        config.reset.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
