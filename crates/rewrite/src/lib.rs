//! Normalizes post HTML before it is embedded in a generated page.
//!
//! Images lose their `height`/`width` and are closed explicitly; anchors can
//! have their `href` run through ordered literal [`LinkRules`]. Everything
//! else is passed through untouched, token by token.

pub mod diagnostics;
pub mod element;
pub mod error;
pub mod links;
pub mod options;
pub mod policy;
pub mod rewriter;

pub use diagnostics::{Diagnostic, RewriteOutput};
pub use error::RewriteError;
pub use links::{LinkRule, LinkRuleError, LinkRules, substitute};
pub use options::{DecodeFailure, RewriteOptions};
pub use policy::{ElementAction, PolicyTable};
pub use rewriter::{Rewriter, rewrite_html};
