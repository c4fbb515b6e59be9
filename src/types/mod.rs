use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AgoraError;

/// Identity of a single decision-making player.
///
/// Players are symbolic keys: two players are the same player exactly when
/// their names are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(String);

impl Player {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Player(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Player::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Player(name)
    }
}

/// Lifecycle markers that policies and hooks react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    PreExperiment,
    PreEpisode,
    PreAct,
    PostAct,
    PostEpisode,
    PostExperiment,
}

impl Stage {
    /// Every stage, in the order a run visits them
    pub const ALL: [Stage; 6] = [
        Stage::PreExperiment,
        Stage::PreEpisode,
        Stage::PreAct,
        Stage::PostAct,
        Stage::PostEpisode,
        Stage::PostExperiment,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::PreExperiment => "pre_experiment",
            Stage::PreEpisode => "pre_episode",
            Stage::PreAct => "pre_act",
            Stage::PostAct => "post_act",
            Stage::PostEpisode => "post_episode",
            Stage::PostExperiment => "post_experiment",
        };
        f.write_str(name)
    }
}

/// How players' moves are structured within one environment step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicStyle {
    /// One player acts at a time, the environment decides who
    Sequential,
    /// Every player acts once per environment step
    Simultaneous,
}

impl fmt::Display for DynamicStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicStyle::Sequential => f.write_str("sequential"),
            DynamicStyle::Simultaneous => f.write_str("simultaneous"),
        }
    }
}

impl FromStr for DynamicStyle {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(DynamicStyle::Sequential),
            "simultaneous" => Ok(DynamicStyle::Simultaneous),
            other => Err(AgoraError::UnsupportedDynamics(format!(
                "'{}' is neither sequential nor simultaneous",
                other
            ))),
        }
    }
}
