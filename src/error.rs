//! Error types produced while tokenizing or building JSONH.
//!
//! ## Error categories
//!
//! - **Lexical errors**: bad escapes, malformed numbers, unterminated
//!   strings/comments/containers.
//! - **Structural errors**: depth exceeded, missing `:`, nested braceless
//!   objects inside `[ … ]`.
//! - **Conversion errors**: the number parser rejecting an (already
//!   lexically valid) literal.
//!
//! Every error carries a byte offset and a 1-based line/column pair so a
//! caller can point at the offending character without re-scanning the
//! input.

use std::fmt;
use thiserror::Error;

/// What the tokenizer or builder was doing when it hit end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    String,
    MultiQuotedString,
    QuotelessString,
    BlockComment,
    NestedBlockComment,
    Object,
    Array,
    Number,
    Escape,
    Property,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Context::String => "a quoted string",
            Context::MultiQuotedString => "a multi-quoted string",
            Context::QuotelessString => "a quoteless string",
            Context::BlockComment => "a block comment",
            Context::NestedBlockComment => "a nestable block comment",
            Context::Object => "an object",
            Context::Array => "an array",
            Context::Number => "a number",
            Context::Escape => "an escape sequence",
            Context::Property => "a property",
        };
        f.write_str(s)
    }
}

/// All errors this crate can produce while tokenizing or building a [`Node`](crate::Node).
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// End of input was reached while inside `context`.
    #[error("unexpected end of input at line {line}, column {col} while reading {context}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        context: Context,
    },

    /// A character appeared where the grammar forbids it.
    #[error("unexpected character {found:?} at line {line}, column {col}: {msg}")]
    UnexpectedCharacter {
        line: usize,
        col: usize,
        found: Option<char>,
        msg: String,
    },

    /// Opening a container would exceed `max_depth`.
    #[error("maximum nesting depth {max_depth} exceeded at line {line}, column {col}")]
    DepthExceeded {
        line: usize,
        col: usize,
        max_depth: usize,
    },

    /// Wrong hex-digit count (or invalid code point) in `\x`/`\u`/`\U`.
    #[error("malformed escape sequence at line {line}, column {col}: {msg}")]
    MalformedEscape { line: usize, col: usize, msg: String },

    /// Digit separators or a missing exponent sign broke the number grammar.
    #[error("malformed number at line {line}, column {col}: {msg}")]
    MalformedNumber { line: usize, col: usize, msg: String },

    /// `options.parse_single_element` is set and trailing content followed the root element.
    #[error(
        "expected a single element, but trailing content remained at line {line}, column {col}"
    )]
    ExpectedSingleElement { line: usize, col: usize },

    /// A bare `name: value` braceless property appeared inside `[ … ]`.
    #[error(
        "braceless objects are only legal at the document root (found inside an array at line {line}, column {col})"
    )]
    NestedBracelessObject { line: usize, col: usize },

    /// The number parser could not convert an already-lexically-valid literal.
    #[error("could not convert number literal {literal:?}: {msg}")]
    NumberConversion { literal: String, msg: String },

    /// Any other error, carrying only a message (used sparingly).
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn unexpected_eof(line: usize, col: usize, context: Context) -> Self {
        Error::UnexpectedEof { line, col, context }
    }

    pub fn unexpected_character(
        line: usize,
        col: usize,
        found: Option<char>,
        msg: impl Into<String>,
    ) -> Self {
        Error::UnexpectedCharacter {
            line,
            col,
            found,
            msg: msg.into(),
        }
    }

    pub fn depth_exceeded(line: usize, col: usize, max_depth: usize) -> Self {
        Error::DepthExceeded {
            line,
            col,
            max_depth,
        }
    }

    pub fn malformed_escape(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::MalformedEscape {
            line,
            col,
            msg: msg.into(),
        }
    }

    pub fn malformed_number(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::MalformedNumber {
            line,
            col,
            msg: msg.into(),
        }
    }

    pub fn expected_single_element(line: usize, col: usize) -> Self {
        Error::ExpectedSingleElement { line, col }
    }

    pub fn nested_braceless_object(line: usize, col: usize) -> Self {
        Error::NestedBracelessObject { line, col }
    }

    pub fn number_conversion(literal: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::NumberConversion {
            literal: literal.into(),
            msg: msg.into(),
        }
    }

    pub fn custom(msg: impl fmt::Display) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = Error::unexpected_character(3, 7, Some('@'), "not valid here");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("column 7"));
    }

    #[test]
    fn test_depth_exceeded_message() {
        let err = Error::depth_exceeded(1, 1, 64);
        assert!(err.to_string().contains("64"));
    }
}
