pub mod fixtures;
pub mod html_assertions;

use ghost2hugo::{LinkRules, RewriteError, RewriteOptions, RewriteOutput, rewrite_html};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Options with link substitution enabled for `pairs`, in order.
pub fn with_links(pairs: &[(&str, &str)]) -> RewriteOptions {
    let rules = LinkRules::from_pairs(pairs.iter().copied())
        .expect("test link patterns are never empty");
    RewriteOptions::with_link_rules(rules)
}

/// Rewrites with default options: images normalized, links untouched.
pub fn rewrite(source: &str) -> Result<RewriteOutput, RewriteError> {
    rewrite_html(source, &RewriteOptions::default())
}
