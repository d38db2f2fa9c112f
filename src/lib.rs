//! Prepares Ghost post HTML for Hugo.
//!
//! The heavy lifting lives in the workspace crates: [`ghost2hugo_markup`]
//! tokenizes and serializes, [`ghost2hugo_rewrite`] applies the element
//! rewrites. This crate adds the configuration file and the
//! [`PostProcessor`] that ties them together.

pub mod config;
pub mod error;
pub mod processor;

pub use config::{Config, GHOST_URL_PLACEHOLDER, LinkReplacements};
pub use error::{ConfigError, Error};
pub use processor::PostProcessor;

pub use ghost2hugo_markup as markup;
pub use ghost2hugo_rewrite::{
    DecodeFailure, Diagnostic, LinkRule, LinkRules, RewriteError, RewriteOptions, RewriteOutput,
    Rewriter, rewrite_html, substitute,
};
