//! Checking for a property without parsing the whole document.
//!
//! Run with: cargo run --example property_lookup

use jsonh::{find_property_value, JsonhOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let doc = r#"
        id: 42
        name: Alice Johnson
        profile: {
            bio: "Likes long walks on short beaches"
            tags: [rust, systems, parsers]
        }
    "#;

    if find_property_value(doc, "name", JsonhOptions::new())? {
        println!("name is present");
    } else {
        println!("name not found");
    }

    if find_property_value(doc, "profile", JsonhOptions::new())? {
        println!("profile is present");
    } else {
        println!("profile not found");
    }

    if find_property_value(doc, "missing", JsonhOptions::new())? {
        unreachable!();
    } else {
        println!("missing is correctly absent");
    }

    Ok(())
}
