use crate::links::LinkRules;

/// What to do with an `img` or `a` element whose attributes or content cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeFailure {
    /// Leave the element out of the output, log a warning and record a diagnostic.
    #[default]
    Drop,
    /// Abort the whole rewrite with [`crate::RewriteError::ElementDecode`].
    Strict,
}

/// Per-call rewrite settings. Read-only during a rewrite; share freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Rewrite anchor hrefs through `link_rules`.
    pub replace_links: bool,
    pub link_rules: LinkRules,
    pub on_decode_failure: DecodeFailure,
}

impl RewriteOptions {
    /// Options with link substitution enabled for `rules`.
    pub fn with_link_rules(rules: LinkRules) -> Self {
        Self {
            replace_links: true,
            link_rules: rules,
            ..Self::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.on_decode_failure = DecodeFailure::Strict;
        self
    }
}
