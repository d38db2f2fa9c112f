//! The token model handed from the tokenizer to a rewriter and on to the serializer.
//!
//! Tokens borrow the source text. Attributes and character data stay in their
//! raw, escaped form until a caller asks for them to be decoded, so a token that
//! is passed through is re-emitted byte for byte.
use crate::attributes::{Attribute, AttributeList};
use crate::entities::decode_text;
use crate::error::MarkupError;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesCData, BytesEnd, BytesRef, BytesStart, BytesText, Event};
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub enum Token<'a> {
    StartTag(StartTag<'a>),
    EndTag(EndTag<'a>),
    CharData(CharData<'a>),
    Comment(BytesText<'a>),
    /// Declarations, processing instructions and doctypes.
    Other(Event<'a>),
}

impl<'a> Token<'a> {
    pub(crate) fn from_event(event: Event<'a>) -> Option<Self> {
        let token = match event {
            Event::Start(raw) if raw.name().as_ref().is_empty() => literal("<", &raw, ">"),
            Event::Empty(raw) if raw.name().as_ref().is_empty() => literal("<", &raw, "/>"),
            Event::End(raw) if raw.name().as_ref().is_empty() => literal("</", &raw, ">"),
            Event::Start(raw) => Token::StartTag(StartTag::from_raw(raw, false)),
            Event::Empty(raw) => Token::StartTag(StartTag::from_raw(raw, true)),
            Event::End(raw) => Token::EndTag(EndTag { raw }),
            Event::Text(raw) => Token::CharData(CharData::Text(raw)),
            Event::GeneralRef(raw) => Token::CharData(CharData::Reference(raw)),
            Event::CData(raw) => Token::CharData(CharData::CData(raw)),
            Event::Comment(raw) => Token::Comment(raw),
            Event::Eof => return None,
            other => Token::Other(other),
        };
        Some(token)
    }

    pub(crate) fn into_event(self) -> Event<'a> {
        match self {
            Token::StartTag(tag) if tag.self_closing => Event::Empty(tag.raw),
            Token::StartTag(tag) => Event::Start(tag.raw),
            Token::EndTag(tag) => Event::End(tag.raw),
            Token::CharData(CharData::Text(raw)) => Event::Text(raw),
            Token::CharData(CharData::Reference(raw)) => Event::GeneralRef(raw),
            Token::CharData(CharData::CData(raw)) => Event::CData(raw),
            Token::Comment(raw) => Event::Comment(raw),
            Token::Other(event) => event,
        }
    }
}

/// A `<` with no tag name after it (`a < b`) is prose, not markup. The reader
/// still hands it over as a tag, so it is turned back into the text it was.
fn literal<'a>(open: &str, content: &[u8], close: &str) -> Token<'a> {
    let text = format!("{open}{}{close}", String::from_utf8_lossy(content));
    Token::CharData(CharData::Text(BytesText::from_escaped(text)))
}

/// An opening tag. `self_closing` records whether the source wrote `<x/>`.
#[derive(Debug, Clone)]
pub struct StartTag<'a> {
    raw: BytesStart<'a>,
    self_closing: bool,
}

impl<'a> StartTag<'a> {
    fn from_raw(raw: BytesStart<'a>, self_closing: bool) -> Self {
        Self { raw, self_closing }
    }

    /// Builds a fresh, non-self-closing tag. Attribute values are escaped.
    pub fn new(name: &str, attributes: &AttributeList) -> StartTag<'static> {
        let mut raw = BytesStart::new(name.to_owned());
        for attribute in attributes {
            raw.push_attribute((attribute.name.as_str(), attribute.value.as_str()));
        }
        StartTag {
            raw,
            self_closing: false,
        }
    }

    /// Qualified name as written in the source, prefix and casing included.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.raw.name().into_inner())
    }

    pub fn local_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.raw.local_name().into_inner())
    }

    /// ASCII case-insensitive comparison against the local name.
    pub fn is_named(&self, local_name: &str) -> bool {
        self.raw
            .local_name()
            .into_inner()
            .eq_ignore_ascii_case(local_name.as_bytes())
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Whether anything other than whitespace follows the tag name.
    pub fn has_attributes(&self) -> bool {
        self.raw
            .attributes_raw()
            .iter()
            .any(|b| !b.is_ascii_whitespace())
    }

    /// Decodes every attribute, in order, duplicates included.
    ///
    /// Unquoted and valueless attributes are accepted. Fails on attribute
    /// syntax errors and on values holding unknown character references.
    pub fn decode_attributes(&self) -> Result<AttributeList, MarkupError> {
        let mut attributes = self.raw.html_attributes();
        attributes.with_checks(false);

        let mut decoded = AttributeList::new();
        for attribute in attributes {
            let attribute = attribute?;
            let name = std::str::from_utf8(attribute.key.as_ref())?;
            let raw_value = std::str::from_utf8(&attribute.value)?;
            let value = decode_text(raw_value)?;
            decoded.push(Attribute::new(name, value.into_owned()));
        }
        Ok(decoded)
    }
}

#[derive(Debug, Clone)]
pub struct EndTag<'a> {
    raw: BytesEnd<'a>,
}

impl<'a> EndTag<'a> {
    pub fn new(name: &str) -> EndTag<'static> {
        EndTag {
            raw: BytesEnd::new(name.to_owned()),
        }
    }

    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.raw.name().into_inner())
    }

    pub fn is_named(&self, local_name: &str) -> bool {
        self.raw
            .local_name()
            .into_inner()
            .eq_ignore_ascii_case(local_name.as_bytes())
    }
}

/// Character data in any of the three shapes the reader produces.
#[derive(Debug, Clone)]
pub enum CharData<'a> {
    /// A text run, still escaped.
    Text(BytesText<'a>),
    /// A `&name;` or `&#N;` reference, holding only the part between `&` and `;`.
    Reference(BytesRef<'a>),
    /// A `<![CDATA[...]]>` section, holding its literal content.
    CData(BytesCData<'a>),
}

impl CharData<'_> {
    /// Plain text that will be escaped on output.
    pub fn plain(text: &str) -> CharData<'static> {
        CharData::Text(BytesText::from_escaped(partial_escape(text).into_owned()))
    }

    /// Resolves the character data to the text it stands for.
    pub fn decode(&self) -> Result<Cow<'_, str>, MarkupError> {
        match self {
            CharData::Text(raw) => {
                let raw = std::str::from_utf8(raw)?;
                Ok(decode_text(raw)?)
            }
            CharData::Reference(raw) => {
                let name = std::str::from_utf8(raw)?;
                let reference = format!("&{name};");
                Ok(Cow::Owned(decode_text(&reference)?.into_owned()))
            }
            CharData::CData(raw) => Ok(Cow::Borrowed(std::str::from_utf8(raw)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    fn first_start_tag(source: &str) -> StartTag<'_> {
        let mut tokens = Tokenizer::new(source);
        match tokens.next_token().unwrap() {
            Some(Token::StartTag(tag)) => tag,
            other => panic!("expected a start tag, got {other:?}"),
        }
    }

    #[test]
    fn decodes_attributes_in_authoring_order() {
        let tag = first_start_tag(r#"<img src="a.png" alt="Tom &amp; Jerry" width=200 hidden>"#);
        let attrs = tag.decode_attributes().unwrap();
        let pairs: Vec<_> = attrs
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("src", "a.png"),
                ("alt", "Tom & Jerry"),
                ("width", "200"),
                ("hidden", "")
            ]
        );
    }

    #[test]
    fn keeps_duplicate_attributes() {
        let tag = first_start_tag(r#"<a href="one" href="two">"#);
        let attrs = tag.decode_attributes().unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("href").unwrap().value, "one");
    }

    #[test]
    fn malformed_numeric_reference_in_value_fails_to_decode() {
        let tag = first_start_tag(r#"<img src="a.png" alt="&#xZZ;">"#);
        assert!(matches!(
            tag.decode_attributes(),
            Err(MarkupError::Escape(_))
        ));
    }

    #[test]
    fn nameless_tag_is_text() {
        let mut tokens = Tokenizer::new("a < b</p>");
        let mut text = String::new();
        while let Some(token) = tokens.next_token().unwrap() {
            match token {
                Token::CharData(data) => text.push_str(&data.decode().unwrap()),
                other => panic!("expected only character data, got {other:?}"),
            }
        }
        assert_eq!(text, "a < b</p>");
    }

    #[test]
    fn names_match_case_insensitively() {
        let tag = first_start_tag(r#"<IMG SRC="a.png">"#);
        assert!(tag.is_named("img"));
        assert_eq!(tag.name(), "IMG");
    }

    #[test]
    fn detects_attribute_presence() {
        assert!(!first_start_tag("<a>").has_attributes());
        assert!(!first_start_tag("<a >").has_attributes());
        assert!(first_start_tag("<a rel=x>").has_attributes());
    }

    #[test]
    fn rebuilt_tag_escapes_values() {
        let attrs: AttributeList = [Attribute::new("title", "a < b")].into_iter().collect();
        let tag = StartTag::new("span", &attrs);
        assert_eq!(tag.name(), "span");
        assert_eq!(tag.decode_attributes().unwrap(), attrs);
    }
}
