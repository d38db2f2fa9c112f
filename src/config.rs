// src/config.rs
//! Loading of the exporter's JSON configuration file.
//!
//! Only the keys that drive HTML rewriting are read. The rest of the file
//! (database connection, template, front matter names, ...) belongs to other
//! stages and is ignored.
use crate::error::ConfigError;
use ghost2hugo_rewrite::{DecodeFailure, LinkRules, RewriteOptions};
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Placeholder Ghost writes into stored post HTML in place of the site URL.
pub const GHOST_URL_PLACEHOLDER: &str = "__GHOST_URL__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Substituted for every [`GHOST_URL_PLACEHOLDER`] before rewriting.
    pub ghost_url: String,
    pub link_replacements: LinkReplacements,
    /// Forces link substitution on or off. When unset it is on iff
    /// `link_replacements` is non-empty.
    pub replace_links: Option<bool>,
    /// Fail on undecodable `img`/`a` elements instead of dropping them.
    pub strict_elements: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&source)?;
        log::debug!(
            "loaded config from {} ({} link replacements)",
            path.display(),
            config.link_replacements.len()
        );
        Ok(config)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn replace_links_enabled(&self) -> bool {
        self.replace_links
            .unwrap_or(!self.link_replacements.is_empty())
    }

    pub fn rewrite_options(&self) -> Result<RewriteOptions, ConfigError> {
        let link_rules = LinkRules::from_pairs(self.link_replacements.iter().cloned())?;
        Ok(RewriteOptions {
            replace_links: self.replace_links_enabled(),
            link_rules,
            on_decode_failure: if self.strict_elements {
                DecodeFailure::Strict
            } else {
                DecodeFailure::Drop
            },
        })
    }
}

/// `(pattern, replacement)` pairs in the order they appear in the file.
///
/// Accepts a JSON object (`{"pattern": "replacement"}`) or an array of
/// `["pattern", "replacement"]` pairs or `{"pattern": .., "replacement": ..}`
/// objects. `null` is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReplacements(Vec<(String, String)>);

impl LinkReplacements {
    pub fn push(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.0.push((pattern.into(), replacement.into()));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>, R: Into<String>> FromIterator<(P, R)> for LinkReplacements {
    fn from_iter<I: IntoIterator<Item = (P, R)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(p, r)| (p.into(), r.into()))
                .collect(),
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReplacementEntry {
    Pair(String, String),
    Rule { pattern: String, replacement: String },
}

impl<'de> Deserialize<'de> for LinkReplacements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReplacementsVisitor;

        impl<'de> Visitor<'de> for ReplacementsVisitor {
            type Value = LinkReplacements;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of link replacements or a list of [pattern, replacement] pairs")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LinkReplacements::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LinkReplacements::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::new();
                while let Some((pattern, replacement)) = map.next_entry::<String, String>()? {
                    pairs.push((pattern, replacement));
                }
                Ok(LinkReplacements(pairs))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::new();
                while let Some(entry) = seq.next_element::<ReplacementEntry>()? {
                    pairs.push(match entry {
                        ReplacementEntry::Pair(pattern, replacement) => (pattern, replacement),
                        ReplacementEntry::Rule {
                            pattern,
                            replacement,
                        } => (pattern, replacement),
                    });
                }
                Ok(LinkReplacements(pairs))
            }
        }

        deserializer.deserialize_any(ReplacementsVisitor)
    }
}
