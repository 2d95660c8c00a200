use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::RuleSet;

/// Configuration of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Movement rules applied to every move. Default: standard.
    pub rules: RuleSet,
    /// Reject moves of the side not on turn. Default: true.
    pub enforce_turn: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { rules: RuleSet::Standard, enforce_turn: true }
    }
}

impl SessionConfig {
    /// Pawn-only rules and no turn check: any piece may be moved by either side.
    pub fn permissive() -> Self {
        Self { rules: RuleSet::Permissive, enforce_turn: false }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
