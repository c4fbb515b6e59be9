use std::fmt;

use crate::types::Player;

/// Result type for Agora operations
pub type Result<T> = std::result::Result<T, AgoraError>;

/// Main error type for the Agora library
#[derive(Debug, Clone, PartialEq)]
pub enum AgoraError {
    /// Policy and hook containers address different sets of players
    PlayerMismatch {
        policy: Vec<Player>,
        hook: Vec<Player>,
    },

    /// A container was addressed with a player it does not hold
    KeyNotFound {
        player: Player,
    },

    /// A container was built with the same player twice
    DuplicatePlayer {
        player: Player,
    },

    /// Dynamic style the run loop cannot dispatch on
    UnsupportedDynamics(String),

    /// Failure raised by an environment
    Environment(String),

    /// Failure raised by a policy
    Policy(String),

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for AgoraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgoraError::PlayerMismatch { policy, hook } => {
                write!(
                    f,
                    "Player mismatch: policy players {:?} differ from hook players {:?}",
                    policy, hook
                )
            }
            AgoraError::KeyNotFound { player } => write!(f, "Player not found: {}", player),
            AgoraError::DuplicatePlayer { player } => write!(f, "Duplicate player: {}", player),
            AgoraError::UnsupportedDynamics(msg) => write!(f, "Unsupported dynamics: {}", msg),
            AgoraError::Environment(msg) => write!(f, "Environment error: {}", msg),
            AgoraError::Policy(msg) => write!(f, "Policy error: {}", msg),
            AgoraError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            AgoraError::IoError(msg) => write!(f, "IO error: {}", msg),
            AgoraError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for AgoraError {}

impl From<std::io::Error> for AgoraError {
    fn from(err: std::io::Error) -> Self {
        AgoraError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AgoraError {
    fn from(err: serde_json::Error) -> Self {
        AgoraError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl AgoraError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        AgoraError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn key_not_found(player: &Player) -> Self {
        AgoraError::KeyNotFound {
            player: player.clone(),
        }
    }
}
