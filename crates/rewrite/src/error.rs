use ghost2hugo_markup::MarkupError;
use thiserror::Error;

/// A rewrite that failed as a whole. No output is usable once one of these is returned.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("token parsing error: {0}")]
    Tokenize(#[source] MarkupError),

    #[error("failed to re-encode token: {0}")]
    Encode(#[source] MarkupError),

    /// Only raised under [`crate::DecodeFailure::Strict`].
    #[error("failed to decode <{element}> element at byte {position}: {source}")]
    ElementDecode {
        element: String,
        position: u64,
        source: MarkupError,
    },
}
