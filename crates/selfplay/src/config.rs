//! Self-play configuration, read from TOML.

use std::fmt;
use std::path::{Path, PathBuf};

use chess_core::{Engine, DEFAULT_DEPTH};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::SelfPlayError;

/// Which engine plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Classical,
    Random,
}

impl EngineKind {
    /// Builds the engine, seeded when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Engine> {
        match (self, seed) {
            (EngineKind::Classical, Some(seed)) => Box::new(ClassicalEngine::with_seed(seed)),
            (EngineKind::Classical, None) => Box::new(ClassicalEngine::new()),
            (EngineKind::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
            (EngineKind::Random, None) => Box::new(RandomEngine::new()),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Classical => write!(f, "classical"),
            EngineKind::Random => write!(f, "random"),
        }
    }
}

/// Configuration for a self-play match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Search depth for the classical engine, in plies
    pub depth: u8,
    /// Game is drawn once this many plies have been played
    pub max_plies: u32,
    /// Engine taking White in the first game
    pub white: EngineKind,
    /// Engine taking Black in the first game
    pub black: EngineKind,
    /// Whether to swap colors every game
    pub alternate_colors: bool,
    /// Seeds the engines and the fallback mover; random when absent
    pub seed: Option<u64>,
    /// Moves in coordinate notation played before the engines take over
    pub opening: Vec<String>,
    /// Where to write the match summary as JSON
    pub record_path: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 2,
            depth: DEFAULT_DEPTH,
            max_plies: 200,
            white: EngineKind::Classical,
            black: EngineKind::Random,
            alternate_colors: true,
            seed: None,
            opening: Vec::new(),
            record_path: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SelfPlayError> {
        let config: SelfPlayConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let text = std::fs::read_to_string(path).map_err(|e| SelfPlayError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), SelfPlayError> {
        if self.games == 0 {
            return Err(SelfPlayError::InvalidConfig("games must be at least 1".into()));
        }
        if self.depth == 0 {
            return Err(SelfPlayError::InvalidConfig("depth must be at least 1".into()));
        }
        if self.max_plies == 0 {
            return Err(SelfPlayError::InvalidConfig("max_plies must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
