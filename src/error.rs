//! Top-level error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end the program with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no document given (usage: termslide <FILE>)")]
    MissingDocument,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("config file already exists: {} (use 'termslide config show' to view it)", .0.display())]
    ConfigExists(PathBuf),
    #[error("failed to write config file {}: {source}", .path.display())]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
