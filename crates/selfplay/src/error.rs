use std::path::PathBuf;

use chess_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfPlayError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("game record serialization failed")]
    Json(#[from] serde_json::Error),

    /// A scripted opening move or an engine's move was rejected
    #[error(transparent)]
    Game(#[from] GameError),
}

impl SelfPlayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
