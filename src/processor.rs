// src/processor.rs
use crate::config::{Config, GHOST_URL_PLACEHOLDER};
use crate::error::ConfigError;
use ghost2hugo_rewrite::{RewriteError, RewriteOptions, RewriteOutput, Rewriter};

/// Prepares stored post HTML for embedding in a generated page: resolves the
/// Ghost URL placeholder, then runs the rewriter.
///
/// Built once from a [`Config`] and shared by every post.
#[derive(Debug, Clone)]
pub struct PostProcessor {
    ghost_url: String,
    options: RewriteOptions,
}

impl PostProcessor {
    pub fn new(ghost_url: impl Into<String>, options: RewriteOptions) -> Self {
        Self {
            ghost_url: ghost_url.into(),
            options,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.ghost_url.clone(), config.rewrite_options()?))
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn process(&self, html: &str) -> Result<RewriteOutput, RewriteError> {
        let resolved = html.replace(GHOST_URL_PLACEHOLDER, &self.ghost_url);
        Rewriter::new(&self.options).rewrite(&resolved)
    }
}
