//! Single forward pass over the token stream.
use crate::diagnostics::{Diagnostic, RewriteOutput};
use crate::element::{AnchorElement, ImageElement};
use crate::error::RewriteError;
use crate::options::{DecodeFailure, RewriteOptions};
use crate::policy::{ElementAction, PolicyTable};
use ghost2hugo_markup::{MarkupError, Serializer, StartTag, Token, Tokenizer};
use std::io::Write;

/// Rewrites post HTML according to a set of [`RewriteOptions`].
///
/// Holds no state between calls; one instance can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Rewriter<'o> {
    options: &'o RewriteOptions,
    policy: PolicyTable,
}

impl<'o> Rewriter<'o> {
    pub fn new(options: &'o RewriteOptions) -> Self {
        Self {
            options,
            policy: PolicyTable::new(options.replace_links),
        }
    }

    pub fn rewrite(&self, source: &str) -> Result<RewriteOutput, RewriteError> {
        let mut serializer = Serializer::new(Vec::with_capacity(source.len()));
        let diagnostics = self.drive(source, &mut serializer)?;
        let html = serializer.into_string().map_err(RewriteError::Encode)?;
        Ok(RewriteOutput { html, diagnostics })
    }

    /// Streams the rewritten markup into `sink`. On error the sink holds
    /// partial output that must be discarded.
    pub fn rewrite_into<W: Write>(
        &self,
        source: &str,
        sink: W,
    ) -> Result<Vec<Diagnostic>, RewriteError> {
        let mut serializer = Serializer::new(sink);
        let diagnostics = self.drive(source, &mut serializer)?;
        serializer.finish().map_err(RewriteError::Encode)?;
        Ok(diagnostics)
    }

    fn drive<W: Write>(
        &self,
        source: &str,
        serializer: &mut Serializer<W>,
    ) -> Result<Vec<Diagnostic>, RewriteError> {
        let mut tokens = Tokenizer::new(source);
        let mut diagnostics = Vec::new();

        while let Some(token) = tokens.next_token().map_err(RewriteError::Tokenize)? {
            let tag = match token {
                Token::StartTag(tag) => tag,
                other => {
                    serializer.emit(other).map_err(RewriteError::Encode)?;
                    continue;
                }
            };

            let position = tokens.token_start();
            let action = self.policy.action_for(&tag);
            log::trace!("<{}> at byte {}: {:?}", tag.name(), position, action);

            let outcome = match action {
                ElementAction::PassThrough => {
                    serializer
                        .emit(Token::StartTag(tag))
                        .map_err(RewriteError::Encode)?;
                    continue;
                }
                ElementAction::ImageNormalize => ImageElement::decode(&tag, &mut tokens)
                    .map(|mut image| {
                        image.normalize();
                        image.emit(serializer)
                    }),
                ElementAction::AnchorRewrite => AnchorElement::decode(&tag, &mut tokens)
                    .map(|mut anchor| {
                        if anchor.rewrite_href(&self.options.link_rules) {
                            log::debug!("rewrote link to {}", anchor.href().unwrap_or_default());
                        }
                        anchor.emit(serializer)
                    }),
            };

            match outcome {
                Ok(emitted) => emitted.map_err(RewriteError::Encode)?,
                Err(err) => {
                    if let Some(diagnostic) = self.recover(&tag, position, err)? {
                        diagnostics.push(diagnostic);
                    }
                }
            }
        }

        Ok(diagnostics)
    }

    /// Turns an element decode failure into a diagnostic, or into a call-level
    /// error when the stream itself broke or the caller asked for strictness.
    fn recover(
        &self,
        tag: &StartTag<'_>,
        position: u64,
        err: MarkupError,
    ) -> Result<Option<Diagnostic>, RewriteError> {
        if err.is_stream_error() {
            return Err(RewriteError::Tokenize(err));
        }
        let element = tag.name().into_owned();
        match self.options.on_decode_failure {
            DecodeFailure::Strict => Err(RewriteError::ElementDecode {
                element,
                position,
                source: err,
            }),
            DecodeFailure::Drop => {
                log::warn!(
                    "failed to decode <{}> element at byte {}, dropping it: {}",
                    element,
                    position,
                    err
                );
                Ok(Some(Diagnostic {
                    element,
                    position,
                    message: err.to_string(),
                }))
            }
        }
    }
}

/// Rewrites `source` in one call. See [`Rewriter`].
pub fn rewrite_html(source: &str, options: &RewriteOptions) -> Result<RewriteOutput, RewriteError> {
    Rewriter::new(options).rewrite(source)
}
