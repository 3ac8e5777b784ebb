use jsonh::{node, Node, Number};

#[test]
fn test_node_macro_null() {
    assert_eq!(node!(null), Node::Null);
}

#[test]
fn test_node_macro_booleans() {
    assert_eq!(node!(true), Node::Bool(true));
    assert_eq!(node!(false), Node::Bool(false));
}

#[test]
fn test_node_macro_numbers() {
    assert_eq!(node!(42), Node::Number(Number::Double(42.0)));
    assert_eq!(node!(3.5), Node::Number(Number::Double(3.5)));
    assert_eq!(node!(-123), Node::Number(Number::Double(-123.0)));
}

#[test]
fn test_node_macro_strings() {
    assert_eq!(node!("hello world"), Node::String("hello world".to_string()));
    assert_eq!(node!(""), Node::String(String::new()));
}

#[test]
fn test_node_macro_arrays() {
    assert_eq!(node!([]), Node::Array(vec![]));

    let mixed = node!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Node::Array(vec![
            Node::Number(Number::Double(1.0)),
            Node::String("hello".to_string()),
            Node::Bool(true),
            Node::Null,
        ])
    );
}

#[test]
fn test_node_macro_objects() {
    assert_eq!(node!({}), jsonh::Node::Object(jsonh::NodeMap::new()));

    let simple = node!({
        "name": "Alice",
        "age": 30
    });

    let obj = simple.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("name"), Some(&Node::String("Alice".to_string())));
    assert_eq!(obj.get("age"), Some(&Node::Number(Number::Double(30.0))));
}

#[test]
fn test_node_macro_nested() {
    let nested = node!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let obj = nested.as_object().unwrap();
    assert_eq!(obj.len(), 3);

    let user = obj.get("user").and_then(Node::as_object).unwrap();
    assert_eq!(user.get("id").and_then(Node::as_i64), Some(123));
    assert_eq!(user.get("name").and_then(Node::as_str), Some("Bob"));
    assert_eq!(user.get("active").and_then(Node::as_bool), Some(true));

    let tags = obj.get("tags").and_then(Node::as_array).unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].as_str(), Some("admin"));

    assert_eq!(obj.get("count").and_then(Node::as_i64), Some(42));
}

#[test]
fn test_node_macro_equals_parsed_document() {
    let built = node!({
        "name": "Alice",
        "tags": ["vip", "early_access"]
    });

    let parsed = jsonh::parse_node(
        "{ name: Alice, tags: [vip, early_access] }",
        jsonh::JsonhOptions::new(),
    )
    .unwrap();

    assert_eq!(built, parsed);
}
