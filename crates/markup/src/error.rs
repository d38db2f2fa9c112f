//! Error type shared by the tokenizer, the attribute decoder and the serializer.
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkupError {
    /// The token stream itself is corrupt. Nothing after this point can be read.
    #[error("token parsing error at byte {position}: {source}")]
    Tokenize {
        source: quick_xml::Error,
        position: u64,
    },

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("failed to decode character data: {0}")]
    Escape(#[from] EscapeError),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("end of input reached before </{0}>")]
    UnclosedElement(String),

    #[error("failed to encode token: {0}")]
    Encode(String),
}

impl MarkupError {
    /// Wraps any writer failure; quick-xml and `io::Write` report different error types.
    pub fn encode(err: impl std::fmt::Display) -> Self {
        MarkupError::Encode(err.to_string())
    }

    /// `true` when the error came from the underlying reader rather than from
    /// decoding a single, already tokenized element.
    pub fn is_stream_error(&self) -> bool {
        matches!(self, MarkupError::Tokenize { .. })
    }
}
