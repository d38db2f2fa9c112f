//! Ordered, literal link substitution.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkRuleError {
    #[error("link replacement pattern must not be empty (replacement was '{replacement}')")]
    EmptyPattern { replacement: String },
}

/// Replace every occurrence of `pattern` with `replacement`. Never holds an empty pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRule {
    pattern: String,
    replacement: String,
}

impl LinkRule {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, LinkRuleError> {
        let pattern = pattern.into();
        let replacement = replacement.into();
        if pattern.is_empty() {
            return Err(LinkRuleError::EmptyPattern { replacement });
        }
        Ok(Self {
            pattern,
            replacement,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Rules applied strictly in order, each one to the output of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRules(Vec<LinkRule>);

impl LinkRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule set from `(pattern, replacement)` pairs, keeping their order.
    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self, LinkRuleError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(pattern, replacement)| LinkRule::new(pattern, replacement))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn push(&mut self, rule: LinkRule) {
        self.0.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkRule> {
        self.0.iter()
    }

    pub fn apply(&self, href: &str) -> String {
        substitute(href, &self.0)
    }
}

impl FromIterator<LinkRule> for LinkRules {
    fn from_iter<I: IntoIterator<Item = LinkRule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Runs `input` through every rule in order. Later rules see earlier rules' output.
pub fn substitute(input: &str, rules: &[LinkRule]) -> String {
    rules.iter().fold(input.to_owned(), |current, rule| {
        if current.contains(&rule.pattern) {
            current.replace(&rule.pattern, &rule.replacement)
        } else {
            current
        }
    })
}
