//! Re-encodes tokens through quick-xml's writer.
use crate::error::MarkupError;
use crate::token::Token;
use quick_xml::Writer;
use std::io::Write;

/// Writes tokens to any `io::Write` sink, without indentation.
///
/// Pass-through tokens are written from their raw source bytes. Rebuilt start
/// tags and plain character data were escaped when they were constructed.
pub struct Serializer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> Serializer<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new(inner),
        }
    }

    pub fn emit(&mut self, token: Token<'_>) -> Result<(), MarkupError> {
        match &token {
            Token::StartTag(tag) if tag.name().is_empty() => {
                return Err(MarkupError::Encode("start tag with no name".into()));
            }
            Token::EndTag(tag) if tag.name().is_empty() => {
                return Err(MarkupError::Encode("end tag with no name".into()));
            }
            _ => {}
        }
        self.writer
            .write_event(token.into_event())
            .map_err(MarkupError::encode)
    }

    /// Flushes the sink and hands it back.
    pub fn finish(mut self) -> Result<W, MarkupError> {
        self.writer.get_mut().flush().map_err(MarkupError::encode)?;
        Ok(self.writer.into_inner())
    }
}

impl Serializer<Vec<u8>> {
    pub fn into_string(self) -> Result<String, MarkupError> {
        let bytes = self.finish()?;
        String::from_utf8(bytes).map_err(MarkupError::encode)
    }
}
