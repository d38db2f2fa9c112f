//! Lenient HTML token stream for post content.
//!
//! [`Tokenizer`] turns source text into borrowed [`Token`]s, [`Serializer`]
//! writes them back out. Neither ever builds a tree: memory use is bounded by
//! the token in hand.

pub mod attributes;
pub mod entities;
pub mod error;
pub mod serializer;
pub mod token;
pub mod tokenizer;

pub use attributes::{Attribute, AttributeList};
pub use error::MarkupError;
pub use serializer::Serializer;
pub use token::{CharData, EndTag, StartTag, Token};
pub use tokenizer::Tokenizer;
