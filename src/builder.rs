//! Builds a [`Node`] tree by driving a [`Tokenizer`] to completion.
//!
//! The builder owns a stack of in-progress containers (a [`BuildFrame`] per
//! open `{…}`/`[…]`) and folds each incoming token into whichever frame is on
//! top, the same way the tokenizer itself tracks open containers with a
//! frame stack rather than recursion.

use crate::error::Error;
use crate::map::NodeMap;
use crate::number;
use crate::options::JsonhOptions;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use crate::value::{Node, Number};
use num_traits::ToPrimitive;

enum BuildFrame {
    Object {
        map: NodeMap,
        pending_key: Option<String>,
    },
    Array {
        items: Vec<Node>,
    },
}

/// Default rounding used when a number's exponent is itself fractional.
const DEFAULT_DECIMALS: u32 = 15;

fn place(stack: &mut [BuildFrame], root: &mut Option<Node>, node: Node) -> Result<(), Error> {
    match stack.last_mut() {
        Some(BuildFrame::Array { items }) => {
            items.push(node);
            Ok(())
        }
        Some(BuildFrame::Object { map, pending_key }) => {
            let key = pending_key
                .take()
                .ok_or_else(|| Error::custom("value without a preceding property name"))?;
            map.insert(key, node);
            Ok(())
        }
        None => {
            *root = Some(node);
            Ok(())
        }
    }
}

fn number_node(literal: &str, options: &JsonhOptions) -> Result<Node, Error> {
    let decimal = number::parse(literal, DEFAULT_DECIMALS)
        .map_err(|msg| Error::number_conversion(literal, msg))?;
    let number = if options.big_numbers {
        Number::Exact(decimal)
    } else {
        Number::Double(decimal.to_f64().unwrap_or(f64::INFINITY))
    };
    Ok(Node::Number(number))
}

fn fold_token(
    token: Token,
    stack: &mut Vec<BuildFrame>,
    root: &mut Option<Node>,
    options: &JsonhOptions,
) -> Result<(), Error> {
    match token.kind {
        TokenKind::Comment => Ok(()),
        TokenKind::StartObject => {
            stack.push(BuildFrame::Object {
                map: NodeMap::new(),
                pending_key: None,
            });
            Ok(())
        }
        TokenKind::StartArray => {
            stack.push(BuildFrame::Array { items: Vec::new() });
            Ok(())
        }
        TokenKind::EndObject => {
            let frame = stack
                .pop()
                .expect("the tokenizer only emits EndObject for a frame it pushed");
            let BuildFrame::Object { map, .. } = frame else {
                unreachable!("EndObject always closes an Object frame")
            };
            place(stack, root, Node::Object(map))
        }
        TokenKind::EndArray => {
            let frame = stack
                .pop()
                .expect("the tokenizer only emits EndArray for a frame it pushed");
            let BuildFrame::Array { items } = frame else {
                unreachable!("EndArray always closes an Array frame")
            };
            place(stack, root, Node::Array(items))
        }
        TokenKind::PropertyName => match stack.last_mut() {
            Some(BuildFrame::Object { pending_key, .. }) => {
                *pending_key = Some(token.value);
                Ok(())
            }
            _ => Err(Error::custom("a property name appeared outside an object")),
        },
        TokenKind::Null => place(stack, root, Node::Null),
        TokenKind::True => place(stack, root, Node::Bool(true)),
        TokenKind::False => place(stack, root, Node::Bool(false)),
        TokenKind::String => place(stack, root, Node::String(token.value)),
        TokenKind::Number => {
            let node = number_node(&token.value, options)?;
            place(stack, root, node)
        }
    }
}

/// Consumes every token from `tokens`, folding it into a [`Node`] tree.
///
/// Used by [`crate::parse_node`]; exposed so a caller who already owns a
/// [`Tokenizer`] (for instance to inspect leading comments first) can hand it
/// off here instead of retokenizing.
pub fn build<I: Iterator<Item = char>>(
    tokens: Tokenizer<I>,
    options: &JsonhOptions,
) -> Result<Node, Error> {
    let mut stack: Vec<BuildFrame> = Vec::new();
    let mut root: Option<Node> = None;
    for token in tokens {
        let token = token?;
        fold_token(token, &mut stack, &mut root, options)?;
    }
    root.ok_or_else(|| Error::custom("no element found in input"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn parse(src: &str) -> Node {
        let options = JsonhOptions::new();
        build(tokenize(src, options.clone()), &options).unwrap()
    }

    #[test]
    fn test_build_object() {
        let node = parse("{ a: 1, b: [2, 3], c: null }");
        let obj = node.as_object().unwrap();
        assert_eq!(obj.get("a").and_then(Node::as_i64), Some(1));
        assert_eq!(
            obj.get("b").and_then(Node::as_array).map(Vec::len),
            Some(2)
        );
        assert!(obj.get("c").unwrap().is_null());
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let node = parse("{ a: 1, a: 2 }");
        let obj = node.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("a").and_then(Node::as_i64), Some(2));
    }

    #[test]
    fn test_big_numbers_option_keeps_exact_value() {
        let options = JsonhOptions::new().with_big_numbers(true);
        let node = build(tokenize("1.23456789012345678901234", options.clone()), &options).unwrap();
        match node {
            Node::Number(n) => assert!(n.is_exact()),
            _ => panic!("expected a number"),
        }
    }

    #[test]
    fn test_braceless_root_object() {
        let node = parse("name: Alice\nage: 30");
        let obj = node.as_object().unwrap();
        assert_eq!(obj.get("name").and_then(Node::as_str), Some("Alice"));
        assert_eq!(obj.get("age").and_then(Node::as_i64), Some(30));
    }

    #[test]
    fn test_root_scalar() {
        let node = parse("42");
        assert_eq!(node.as_i64(), Some(42));
    }
}
