//! Property-based tests over generated JSONH documents.
//!
//! Rather than generating arbitrary byte strings (which would mostly
//! exercise error paths), these tests generate well-formed [`Node`] trees,
//! render them into valid JSONH source, and check that parsing recovers an
//! equivalent tree and that the token stream that produced it obeys the
//! tokenizer's structural invariants.

use jsonh::{parse_node, tokenize, JsonhOptions, Node, NodeMap, Number, TokenKind};
use proptest::prelude::*;

fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn render(node: &Node) -> String {
    match node {
        Node::Null => "null".to_string(),
        Node::Bool(b) => b.to_string(),
        Node::Number(Number::Double(f)) => format!("{f}"),
        Node::Number(Number::Exact(d)) => d.to_string(),
        Node::String(s) => quote(s),
        Node::Array(items) => {
            let body = items.iter().map(render).collect::<Vec<_>>().join(", ");
            format!("[{body}]")
        }
        Node::Object(map) => {
            let body = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), render(v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{body}}}")
        }
    }
}

fn arb_leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        (-1e12f64..1e12f64).prop_map(|f| Node::Number(Number::Double(f))),
        "[a-zA-Z][a-zA-Z0-9 ]{0,12}".prop_map(Node::String),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = arb_leaf();
    leaf.prop_recursive(3, 24, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Node::Array),
            prop::collection::vec(("[a-zA-Z][a-zA-Z0-9_]{0,8}", inner), 0..5).prop_map(|pairs| {
                let mut map = NodeMap::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Node::Object(map)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_node_round_trips_through_jsonh_source(node in arb_node()) {
        let source = render(&node);
        let parsed = parse_node(&source, JsonhOptions::new()).unwrap();
        prop_assert_eq!(parsed, node);
    }

    #[test]
    fn prop_token_stream_has_balanced_containers(node in arb_node()) {
        let source = render(&node);
        let mut depth: i64 = 0;
        for token in tokenize(&source, JsonhOptions::new()) {
            let token = token.unwrap();
            match token.kind {
                TokenKind::StartObject | TokenKind::StartArray => depth += 1,
                TokenKind::EndObject | TokenKind::EndArray => depth -= 1,
                _ => {}
            }
            prop_assert!(depth >= 0);
        }
        prop_assert_eq!(depth, 0);
    }

    #[test]
    fn prop_property_name_is_always_followed_by_a_value_start(node in arb_node()) {
        let source = render(&node);
        let tokens: Vec<_> = tokenize(&source, JsonhOptions::new())
            .collect::<Result<_, _>>()
            .unwrap();
        for (i, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::PropertyName {
                let next = tokens.get(i + 1).expect("a property name is never the last token");
                prop_assert_ne!(next.kind, TokenKind::PropertyName);
                prop_assert_ne!(next.kind, TokenKind::EndObject);
                prop_assert_ne!(next.kind, TokenKind::EndArray);
            }
        }
    }
}
