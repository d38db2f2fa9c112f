//! A lenient pull tokenizer for post HTML, driven by quick-xml's reader.
use crate::error::MarkupError;
use crate::token::Token;
use quick_xml::Reader;

/// Yields [`Token`]s borrowed from the source text, with one token of lookahead.
///
/// The reader is configured to tolerate what real post HTML contains: unclosed
/// and mismatched elements, stray end tags, bare ampersands, uppercase tags.
/// Attribute syntax is not inspected here at all; that happens only when a
/// caller decodes a [`crate::StartTag`].
pub struct Tokenizer<'a> {
    reader: Reader<&'a [u8]>,
    peeked: Option<(u64, Option<Token<'a>>)>,
    token_start: u64,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.check_comments = false;
        config.allow_dangling_amp = true;
        config.expand_empty_elements = false;

        Self {
            reader,
            peeked: None,
            token_start: 0,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, MarkupError> {
        let (start, token) = match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.read_token()?,
        };
        self.token_start = start;
        Ok(token)
    }

    /// Looks at the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<Option<&Token<'a>>, MarkupError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.read_token()?);
        }
        Ok(self.peeked.as_ref().and_then(|(_, token)| token.as_ref()))
    }

    /// Byte offset in the source where the most recently returned token starts.
    pub fn token_start(&self) -> u64 {
        self.token_start
    }

    fn read_token(&mut self) -> Result<(u64, Option<Token<'a>>), MarkupError> {
        let start = self.reader.buffer_position() as u64;
        match self.reader.read_event() {
            Ok(event) => Ok((start, Token::from_event(event))),
            Err(source) => Err(MarkupError::Tokenize {
                position: self.reader.error_position() as u64,
                source,
            }),
        }
    }
}
