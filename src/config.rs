//! Settings of the automated player.
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 4;

/// Errors raised while loading an [`AiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not a valid JSON configuration.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A search must look at least one ply ahead.
    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Search settings, readable from JSON such as `{"depth": 3, "seed": 42}`.
/// Missing fields take their default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Plies searched before falling back to the static evaluation.
    pub depth: u32,
    /// Seed handed to the player. Move selection does not depend on it.
    pub seed: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            depth: DEFAULT_DEPTH,
            seed: 0,
        }
    }
}

impl AiConfig {
    /// Read a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<AiConfig, ConfigError> {
        let config: AiConfig = serde_json::from_str(text)?;
        if config.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(config)
    }
}
