//! Startup failures, split by who is at fault.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::ConfigError;

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything that can stop the frame loop from starting.
#[derive(Error, Debug)]
pub enum StartupError {
    /// Map, camera or spawn values are unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The settings file could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Display or input initialisation failed.
    #[error("{what} initialisation failed: {source}")]
    Collaborator {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl StartupError {
    pub fn collaborator(what: &'static str, source: std::io::Error) -> Self {
        StartupError::Collaborator { what, source }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::Config(_) | StartupError::Settings(_) => 2,
            StartupError::Collaborator { .. } => 3,
        }
    }
}
