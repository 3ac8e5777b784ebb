//! Checking whether a top-level property exists, without building a
//! [`crate::Node`] tree.
//!
//! [`find_property_value`] retokenizes the input (tokenizing is cheap and
//! lazy — nothing is materialized beyond the token currently in hand) and
//! walks only as far as it has to: once the requested top-level property
//! name is found it stops and reports success, skipping every other
//! property's value along the way without ever collecting it.

use crate::error::Error;
use crate::options::JsonhOptions;
use crate::token::{Token, TokenKind};
use crate::tokenizer::tokenize;

/// Reports whether the document has a top-level property named `name`,
/// without building a full [`crate::Node`] tree for the rest of the
/// document.
///
/// Returns `Ok(false)` if the root is not an object (braced or braceless) or
/// has no property with that name.
pub fn find_property_value(source: &str, name: &str, options: JsonhOptions) -> Result<bool, Error> {
    let mut tokens = tokenize(source, options);

    let Some(first) = tokens.next() else {
        return Ok(false);
    };
    let first = first?;
    if first.kind != TokenKind::StartObject && first.kind != TokenKind::PropertyName {
        return Ok(false);
    }

    // A braceless root already consumed its first PropertyName; replay it.
    let mut pending_name = if first.kind == TokenKind::PropertyName {
        Some(first.value)
    } else {
        None
    };

    loop {
        let prop_name = match pending_name.take() {
            Some(n) => n,
            None => {
                let Some(next) = tokens.next() else { return Ok(false) };
                match next? {
                    Token { kind: TokenKind::PropertyName, value, .. } => value,
                    _ => return Ok(false),
                }
            }
        };

        if prop_name == name {
            return Ok(true);
        }
        skip_value(&mut tokens)?;
    }
}

/// Advances past one complete value (scalar, or balanced container) starting
/// at the tokenizer's current position, without retaining any of its tokens.
fn skip_value<I: Iterator<Item = char>>(tokens: &mut crate::tokenizer::Tokenizer<I>) -> Result<(), Error> {
    let Some(first) = tokens.next() else {
        return Err(Error::custom("expected a value but found end of input"));
    };
    let mut depth = match first?.kind {
        TokenKind::StartObject | TokenKind::StartArray => 1i32,
        _ => 0,
    };
    while depth > 0 {
        let Some(next) = tokens.next() else {
            return Err(Error::custom("unbalanced container while skipping a value"));
        };
        match next?.kind {
            TokenKind::StartObject | TokenKind::StartArray => depth += 1,
            TokenKind::EndObject | TokenKind::EndArray => depth -= 1,
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_braced_object() {
        assert!(find_property_value("{ a: 1, b: 2 }", "b", JsonhOptions::new()).unwrap());
    }

    #[test]
    fn test_find_missing_property() {
        assert!(!find_property_value("{ a: 1 }", "z", JsonhOptions::new()).unwrap());
    }

    #[test]
    fn test_find_in_braceless_root() {
        assert!(find_property_value("name: Alice\nage: 30", "age", JsonhOptions::new()).unwrap());
    }

    #[test]
    fn test_find_skips_nested_object_value() {
        assert!(find_property_value("{ a: { x: 1, y: 2 }, b: 3 }", "b", JsonhOptions::new()).unwrap());
    }

    #[test]
    fn test_non_object_root_returns_false() {
        assert!(!find_property_value("[1, 2, 3]", "a", JsonhOptions::new()).unwrap());
    }
}
