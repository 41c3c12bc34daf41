//! Error types for tree generation.

use thiserror::Error;

/// Main error type for treegen.
#[derive(Error, Debug)]
pub enum TreeGenError {
    /// The supplied options cannot be turned into a usable configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Every sampled key collided with an existing key.
    #[error("Key generation exhausted after {attempts} attempts")]
    KeyGenerationExhausted { attempts: usize },

    /// The example pattern used for complex values failed to compile.
    #[error("Pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

impl TreeGenError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        TreeGenError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result type for treegen operations.
pub type Result<T> = std::result::Result<T, TreeGenError>;
