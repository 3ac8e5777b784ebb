//! Selecting a grammar version and numeric precision with JsonhOptions.
//!
//! Run with: cargo run --example custom_options

use jsonh::{parse_node, JsonhOptions, JsonhVersion, Node};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default options: grammar V2, f64 numbers, strict containers.
    let doc = "{ name: widget, price: 19.99 }";
    let node = parse_node(doc, JsonhOptions::new())?;
    println!("Default options: {node}");

    // Grammar V1 rejects V2-only syntax like nestable block comments.
    let v1_doc = "{ name: widget } /* a plain block comment still works */";
    let node = parse_node(v1_doc, JsonhOptions::new().with_version(JsonhVersion::V1))?;
    println!("V1 grammar: {node}");

    // big_numbers keeps full precision instead of folding into f64.
    let precise_doc = "total: 1.234567890123456789012345";
    let node = parse_node(precise_doc, JsonhOptions::new().with_big_numbers(true))?;
    match node.as_object().and_then(|obj| obj.get("total")) {
        Some(Node::Number(n)) => println!("Exact total: {n} (is_exact: {})", n.is_exact()),
        _ => unreachable!(),
    }

    // incomplete_inputs tolerates a truncated stream by implicitly closing
    // any still-open containers at end of input.
    let truncated = r#"{ a: 1, b: [2, 3"#;
    let node = parse_node(truncated, JsonhOptions::new().with_incomplete_inputs(true))?;
    println!("Recovered from truncation: {node}");

    // parse_single_element rejects trailing content after the root value.
    let trailing = r#""a" "b""#;
    let err = parse_node(trailing, JsonhOptions::new().with_parse_single_element(true))
        .unwrap_err();
    println!("Trailing content rejected: {err}");

    Ok(())
}
