//! Parsing a JSONH document into your own type.
//!
//! Run with: cargo run --example simple

use jsonh::{parse_element, parse_node, Error, FromNode, JsonhOptions, Node};

#[derive(Debug, PartialEq)]
struct User {
    id: i64,
    name: String,
    email: String,
}

impl FromNode for User {
    fn from_node(node: &Node) -> Result<Self, Error> {
        let obj = node
            .as_object()
            .ok_or_else(|| Error::custom("expected a user object"))?;
        Ok(User {
            id: obj
                .get("id")
                .and_then(Node::as_i64)
                .ok_or_else(|| Error::custom("missing field: id"))?,
            name: obj
                .get("name")
                .and_then(Node::as_str)
                .ok_or_else(|| Error::custom("missing field: name"))?
                .to_string(),
            email: obj
                .get("email")
                .and_then(Node::as_str)
                .ok_or_else(|| Error::custom("missing field: email"))?
                .to_string(),
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let doc = r#"
        id: 42
        name: Alice Johnson
        email: alice@example.com
    "#;

    let user: User = parse_element(doc, JsonhOptions::new())?;
    println!("Parsed user: {:?}", user);

    let node = parse_node(doc, JsonhOptions::new())?;
    println!("Generic tree has {} properties", node.as_object().unwrap().len());

    Ok(())
}
