//! Walking a parsed JSONH document without a target type.
//!
//! Run with: cargo run --example dynamic_values

use jsonh::{node, parse_node, JsonhOptions, Node};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let doc = r#"
        host: localhost
        port: 8080
        features: [auth, logging, metrics]
        debug: true
    "#;

    let config = parse_node(doc, JsonhOptions::new())?;

    if let Node::Object(obj) = &config {
        if let Some(Node::String(host)) = obj.get("host") {
            println!("Accessing field 'host': {host}");
        }
        if let Some(port) = obj.get("port").and_then(Node::as_i64) {
            println!("Accessing field 'port': {port}");
        }
        if let Some(Node::Array(features)) = obj.get("features") {
            println!("Accessing field 'features': {} items", features.len());
        }
    }

    // The node! macro builds a tree by hand for comparison or test fixtures.
    let expected = node!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });
    println!("Hand-built tree equals parsed tree: {}", config == expected);

    println!("Type checks:");
    println!("  is_object: {}", config.is_object());
    println!("  is_array:  {}", config.is_array());
    println!("  is_string: {}", config.is_string());

    Ok(())
}
