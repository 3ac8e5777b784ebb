//! The token alphabet the tokenizer emits.
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal text that produced it
//! (already unescaped for strings, left verbatim for numbers) and the
//! 0-based code-point offset where it started.

use std::fmt;

/// The syntactic category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    /// A property name; always immediately followed by exactly one value
    /// token (or the start of one).
    PropertyName,
    String,
    Number,
    True,
    False,
    Null,
    /// A comment (hash, line, block, or nestable block). Emitted so callers
    /// that want to preserve comments can see them; [`crate::parse_node`]
    /// skips them.
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::StartObject => "start of object",
            TokenKind::EndObject => "end of object",
            TokenKind::StartArray => "start of array",
            TokenKind::EndArray => "end of array",
            TokenKind::PropertyName => "property name",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Comment => "comment",
        };
        f.write_str(s)
    }
}

/// One lexical unit produced by [`crate::tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The token's logical text: the property/string content already
    /// unescaped, the number's literal digits, or empty for structural and
    /// literal-keyword tokens.
    pub value: String,
    /// 0-based code-point offset of the first character of this token.
    pub position: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
        }
    }
}
