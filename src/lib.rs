//! # jsonh
//!
//! A tokenizer and value-tree builder for JSONH (JSON for Humans) — a superset
//! of JSON that relaxes its syntax for documents people write by hand:
//! quoteless strings, braceless root objects, trailing-comma-free comments,
//! multi-quoted heredoc strings, and non-decimal number literals.
//!
//! ## Key Features
//!
//! - **Streaming tokenizer**: [`tokenize`] returns a lazy `Iterator` of
//!   tokens, so a caller can stop reading as soon as it has what it needs.
//! - **Exact numbers on request**: [`JsonhOptions::big_numbers`] delivers
//!   arbitrary-precision [`Number::Exact`] values instead of lossy `f64`.
//! - **No derive macro required**: [`FromNode`] is a small hand-written seam
//!   for converting a [`Node`] into your own types.
//! - **Property lookup without building a tree**: [`find_property_value`]
//!   answers "does the root object have property X" without materializing
//!   the rest of the document.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jsonh = "0.1"
//! ```
//!
//! ### Parsing into a dynamic tree
//!
//! ```rust
//! use jsonh::{parse_node, Node};
//!
//! let doc = "name: Alice\nage: 30\ntags: [admin, user]";
//! let node = parse_node(doc, Default::default()).unwrap();
//! let obj = node.as_object().unwrap();
//! assert_eq!(obj.get("name").and_then(Node::as_str), Some("Alice"));
//! ```
//!
//! ### Parsing into your own type
//!
//! ```rust
//! use jsonh::{parse_element, FromNode, Node, Error};
//!
//! struct Point { x: f64, y: f64 }
//!
//! impl FromNode for Point {
//!     fn from_node(node: &Node) -> Result<Self, Error> {
//!         let obj = node.as_object().ok_or_else(|| Error::custom("expected an object"))?;
//!         let x = obj.get("x").and_then(Node::as_f64).ok_or_else(|| Error::custom("missing x"))?;
//!         let y = obj.get("y").and_then(Node::as_f64).ok_or_else(|| Error::custom("missing y"))?;
//!         Ok(Point { x, y })
//!     }
//! }
//!
//! let point: Point = parse_element("{ x: 1, y: 2 }", Default::default()).unwrap();
//! assert_eq!(point.x, 1.0);
//! ```
//!
//! ### Tokenizing directly
//!
//! ```rust
//! use jsonh::{tokenize, JsonhOptions, TokenKind};
//!
//! let tokens: Vec<_> = tokenize("[1, 2, 3]", JsonhOptions::new())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::StartArray);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks.
//! - All array/string indexing goes through [`crate::cursor::CharCursor`]'s
//!   bounds-checked `peek`/`read`, never raw slicing by byte offset.
//! - Proper error propagation with [`Result`] types; no panics on malformed
//!   input (panics inside the builder indicate a tokenizer/builder framing
//!   bug, not bad input).
//!
//! ## Format Specification
//!
//! See the [`spec`] module for a description of the grammar this crate
//! implements.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** — parsing a document into a [`Node`] tree.
//! - **`dynamic_values.rs`** — walking a [`Node`] tree generically.
//! - **`custom_options.rs`** — selecting a grammar version and numeric mode.
//! - **`property_lookup.rs`** — finding one property without a full parse.
//!
//! Run any example with: `cargo run --example <name>`

pub mod builder;
pub mod cursor;
pub mod error;
pub mod macros;
pub mod map;
pub mod number;
pub mod options;
pub mod property_finder;
pub mod spec;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use cursor::CharCursor;
pub use error::{Error, Result};
pub use map::NodeMap;
pub use options::{JsonhOptions, JsonhVersion};
pub use property_finder::find_property_value;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, tokenize_iter, Tokenizer};
pub use value::{FromNode, Node, Number};

/// Parses `source` into a dynamically-typed [`Node`] tree.
///
/// # Examples
///
/// ```rust
/// use jsonh::{parse_node, JsonhOptions};
///
/// let node = parse_node("[1, 2, 3]", JsonhOptions::new()).unwrap();
/// assert_eq!(node.as_array().unwrap().len(), 3);
/// ```
///
/// # Errors
///
/// Returns an error if `source` is not valid JSONH under `options`.
pub fn parse_node(source: &str, options: JsonhOptions) -> Result<Node> {
    builder::build(tokenize(source, options.clone()), &options)
}

/// Parses `source` directly into a caller-defined type via [`FromNode`].
///
/// # Examples
///
/// ```rust
/// use jsonh::{parse_element, JsonhOptions};
///
/// let names: Vec<String> = parse_element("[Alice, Bob]", JsonhOptions::new()).unwrap();
/// assert_eq!(names, vec!["Alice", "Bob"]);
/// ```
///
/// # Errors
///
/// Returns an error if `source` is not valid JSONH, or if the parsed tree
/// does not match the shape `T::from_node` expects.
pub fn parse_element<T: FromNode>(source: &str, options: JsonhOptions) -> Result<T> {
    let node = parse_node(source, options)?;
    T::from_node(&node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_object() {
        let node = parse_node("{ a: 1, b: [2, 3] }", JsonhOptions::new()).unwrap();
        let obj = node.as_object().unwrap();
        assert_eq!(obj.get("a").and_then(Node::as_i64), Some(1));
        assert_eq!(obj.get("b").and_then(Node::as_array).map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_element_into_vec() {
        let names: Vec<String> = parse_element("[Alice, Bob, \"Carol Jones\"]", JsonhOptions::new()).unwrap();
        assert_eq!(names, vec!["Alice", "Bob", "Carol Jones"]);
    }

    #[test]
    fn test_braceless_root_round_trip() {
        let node = parse_node("name: Alice\nage: 30", JsonhOptions::new()).unwrap();
        assert_eq!(node.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_find_property_without_full_parse() {
        let found =
            find_property_value("{ id: 1, name: Alice }", "name", JsonhOptions::new()).unwrap();
        assert!(found);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let err = parse_node("{ a: ", JsonhOptions::new().with_incomplete_inputs(false));
        assert!(err.is_err());
    }

    #[test]
    fn test_incomplete_inputs_option_recovers() {
        let node = parse_node("{ a: 1", JsonhOptions::new().with_incomplete_inputs(true)).unwrap();
        assert_eq!(node.as_object().unwrap().get("a").and_then(Node::as_i64), Some(1));
    }
}
