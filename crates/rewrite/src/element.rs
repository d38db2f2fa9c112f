//! Typed records for the two element kinds the rewriter mutates.
//!
//! Decoding consumes the element from the token stream. When it fails, the
//! element is already gone from the stream, which is what lets the rewriter
//! drop it and carry on with the next sibling.
use crate::links::LinkRules;
use ghost2hugo_markup::{
    AttributeList, CharData, EndTag, MarkupError, Serializer, StartTag, Token, Tokenizer,
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    pub name: String,
    pub attributes: AttributeList,
}

impl ImageElement {
    /// Decodes an image start tag. An end tag for the same name immediately
    /// following it belongs to the element and is consumed too.
    pub fn decode(tag: &StartTag<'_>, tokens: &mut Tokenizer<'_>) -> Result<Self, MarkupError> {
        if !tag.is_self_closing() {
            let name = tag.local_name();
            if matches!(tokens.peek_token()?, Some(Token::EndTag(end)) if end.is_named(&name)) {
                tokens.next_token()?;
            }
        }
        Ok(Self {
            name: tag.name().into_owned(),
            attributes: tag.decode_attributes()?,
        })
    }

    /// Removes every `height` and `width` attribute.
    pub fn normalize(&mut self) {
        self.attributes.remove_all("height");
        self.attributes.remove_all("width");
    }

    /// Writes the start tag and an explicit end tag.
    pub fn emit<W: Write>(&self, serializer: &mut Serializer<W>) -> Result<(), MarkupError> {
        serializer.emit(Token::StartTag(StartTag::new(&self.name, &self.attributes)))?;
        serializer.emit(Token::EndTag(EndTag::new(&self.name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorElement {
    pub name: String,
    pub attributes: AttributeList,
    /// All character data inside the element, nested markup stripped.
    pub text: String,
}

impl AnchorElement {
    /// Consumes the anchor's content up to its matching end tag.
    ///
    /// Nested anchors are depth-counted. Tags and comments inside are
    /// discarded. A content decode error is only reported once the whole
    /// element has been consumed, so nothing of it leaks into the output.
    pub fn decode(tag: &StartTag<'_>, tokens: &mut Tokenizer<'_>) -> Result<Self, MarkupError> {
        let name = tag.name().into_owned();
        let local_name = tag.local_name().into_owned();
        let mut text = String::new();
        let mut first_error = None;

        if !tag.is_self_closing() {
            let mut depth = 0usize;
            loop {
                match tokens.next_token()? {
                    None => return Err(MarkupError::UnclosedElement(name)),
                    Some(Token::StartTag(inner)) => {
                        if !inner.is_self_closing() && inner.is_named(&local_name) {
                            depth += 1;
                        }
                    }
                    Some(Token::EndTag(end)) if end.is_named(&local_name) => {
                        if depth == 0 {
                            break;
                        }
                        depth -= 1;
                    }
                    Some(Token::CharData(data)) => match data.decode() {
                        Ok(decoded) => text.push_str(&decoded),
                        Err(err) => {
                            first_error.get_or_insert(err);
                        }
                    },
                    Some(_) => {}
                }
            }
        }

        if let Some(err) = first_error {
            return Err(err);
        }
        Ok(Self {
            name,
            attributes: tag.decode_attributes()?,
            text,
        })
    }

    /// Runs the first `href` through `rules`. Returns whether it changed.
    pub fn rewrite_href(&mut self, rules: &LinkRules) -> bool {
        match self.attributes.get_mut("href") {
            Some(href) => {
                let rewritten = rules.apply(&href.value);
                let changed = rewritten != href.value;
                href.value = rewritten;
                changed
            }
            None => false,
        }
    }

    /// Writes the start tag, the flattened text and an explicit end tag.
    pub fn emit<W: Write>(&self, serializer: &mut Serializer<W>) -> Result<(), MarkupError> {
        serializer.emit(Token::StartTag(StartTag::new(&self.name, &self.attributes)))?;
        if !self.text.is_empty() {
            serializer.emit(Token::CharData(CharData::plain(&self.text)))?;
        }
        serializer.emit(Token::EndTag(EndTag::new(&self.name)))
    }

    pub fn href(&self) -> Option<&str> {
        self.attributes.get("href").map(|a| a.value.as_str())
    }
}
