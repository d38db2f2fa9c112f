// src/error.rs
use ghost2hugo_rewrite::{LinkRuleError, RewriteError};
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid link replacement: {0}")]
    LinkRule(#[from] LinkRuleError),
}

/// Top-level error for the library API and the command-line tool.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to process html: {0}")]
    Rewrite(#[from] RewriteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
