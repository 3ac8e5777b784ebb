//! The value tree produced by the element builder.
//!
//! This module provides [`Node`], an enum representing any JSONH value once
//! it has been fully parsed. It exists for callers who want to walk a
//! document generically rather than deserialize it into a concrete type.
//!
//! ## Core Types
//!
//! - [`Node`]: any JSONH value (null, bool, number, string, array, object).
//! - [`Number`]: a numeric value, either an approximate `f64` or an exact
//!   arbitrary-precision decimal, depending on [`JsonhOptions::big_numbers`](crate::JsonhOptions::big_numbers).
//! - [`FromNode`]: the conversion seam callers implement to deserialize a
//!   [`Node`] into their own types, in place of a derive macro.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jsonh::Node;
//!
//! let null = Node::Null;
//! let boolean = Node::from(true);
//! let number = Node::from(42);
//! let text = Node::from("hello");
//!
//! use jsonh::node;
//! let obj = node!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use jsonh::Node;
//!
//! let value = Node::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use jsonh::Node;
//!
//! let value = Node::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::NodeMap;
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use std::fmt;

/// A dynamically-typed representation of any parsed JSONH value.
///
/// # Examples
///
/// ```rust
/// use jsonh::{Node, Number};
///
/// let null = Node::Null;
/// let num = Node::Number(Number::Double(42.0));
/// let text = Node::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(NodeMap),
}

/// A parsed JSONH number.
///
/// Every numeric literal is computed exactly in base 10 first (see the
/// number-parsing algorithm); this type then decides how to hold that exact
/// value:
///
/// - [`Number::Double`]: the exact value folded into `f64`, the default.
///   Overflow saturates to `±infinity` rather than erroring, matching how
///   `f64::from_str` behaves on oversized literals.
/// - [`Number::Exact`]: the arbitrary-precision `BigDecimal` itself, kept
///   when [`JsonhOptions::big_numbers`](crate::JsonhOptions::big_numbers) is set.
///
/// # Examples
///
/// ```rust
/// use jsonh::Number;
///
/// let n = Number::Double(3.5);
/// assert_eq!(n.as_f64(), 3.5);
/// assert!(!n.is_exact());
/// ```
#[derive(Clone, Debug)]
pub enum Number {
    Double(f64),
    Exact(BigDecimal),
}

impl Number {
    /// Returns `true` if this number carries full precision.
    #[inline]
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Number::Exact(_))
    }

    /// Converts this number to an `i64` if it is an integer value that fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonh::Number;
    ///
    /// assert_eq!(Number::Double(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Double(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Double(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Number::Exact(d) => {
                if d.is_integer() {
                    d.to_i64()
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`, approximating if it was exact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonh::Number;
    ///
    /// assert_eq!(Number::Double(3.5).as_f64(), 3.5);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Double(f) => *f,
            Number::Exact(d) => d.to_f64().unwrap_or(f64::INFINITY),
        }
    }

    /// Returns the exact decimal value, computing it from `f64` if needed.
    #[must_use]
    pub fn to_big_decimal(&self) -> BigDecimal {
        match self {
            Number::Double(f) => BigDecimal::try_from(*f).unwrap_or_default(),
            Number::Exact(d) => d.clone(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Double(a), Number::Double(b)) => a == b,
            (Number::Exact(a), Number::Exact(b)) => a == b,
            _ => self.to_big_decimal() == other.to_big_decimal(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Double(d) => write!(f, "{}", d),
            Number::Exact(d) => write!(f, "{}", d),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Double(value as f64)
    }
}
impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Double(value as f64)
    }
}
impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Double(value as f64)
    }
}
impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Double(value as f64)
    }
}
impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Double(value as f64)
    }
}
impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Double(value as f64)
    }
}
impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Double(value as f64)
    }
}
impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Double(value as f64)
    }
}
impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}
impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Number::Exact(value)
    }
}

impl Node {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonh::Node;
    ///
    /// assert_eq!(Node::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Node::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integral number, returns it as `i64`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&NodeMap> {
        match self {
            Node::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Number(n) => write!(f, "{}", n),
            Node::String(s) => write!(f, "{:?}", s),
            Node::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Node::Object(_) => write!(f, "{{object}}"),
        }
    }
}

/// Converts a [`Node`] into a caller-defined type.
///
/// This is the seam [`parse_element`](crate::parse_element) uses instead of
/// a generic `serde::Deserialize` implementation: rather than deriving a
/// visitor for every user type, a caller writes one `from_node` that matches
/// on the shape it expects and returns a [`crate::Error`] for anything else.
///
/// # Examples
///
/// ```rust
/// use jsonh::{FromNode, Node, Error};
///
/// struct Point { x: f64, y: f64 }
///
/// impl FromNode for Point {
///     fn from_node(node: &Node) -> Result<Self, Error> {
///         let obj = node.as_object().ok_or_else(|| Error::custom("expected an object"))?;
///         let x = obj.get("x").and_then(Node::as_f64).ok_or_else(|| Error::custom("missing x"))?;
///         let y = obj.get("y").and_then(Node::as_f64).ok_or_else(|| Error::custom("missing y"))?;
///         Ok(Point { x, y })
///     }
/// }
/// ```
pub trait FromNode: Sized {
    /// Attempts to build `Self` from an already-parsed [`Node`].
    fn from_node(node: &Node) -> Result<Self, crate::Error>;
}

impl FromNode for Node {
    fn from_node(node: &Node) -> Result<Self, crate::Error> {
        Ok(node.clone())
    }
}

impl FromNode for bool {
    fn from_node(node: &Node) -> Result<Self, crate::Error> {
        node.as_bool()
            .ok_or_else(|| crate::Error::custom(format!("expected bool, found {:?}", node)))
    }
}

impl FromNode for i64 {
    fn from_node(node: &Node) -> Result<Self, crate::Error> {
        node.as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {:?}", node)))
    }
}

impl FromNode for f64 {
    fn from_node(node: &Node) -> Result<Self, crate::Error> {
        node.as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {:?}", node)))
    }
}

impl FromNode for String {
    fn from_node(node: &Node) -> Result<Self, crate::Error> {
        node.as_str()
            .map(str::to_string)
            .ok_or_else(|| crate::Error::custom(format!("expected string, found {:?}", node)))
    }
}

impl<T: FromNode> FromNode for Vec<T> {
    fn from_node(node: &Node) -> Result<Self, crate::Error> {
        let arr = node
            .as_array()
            .ok_or_else(|| crate::Error::custom(format!("expected array, found {:?}", node)))?;
        arr.iter().map(T::from_node).collect()
    }
}

impl<T: FromNode> FromNode for Option<T> {
    fn from_node(node: &Node) -> Result<Self, crate::Error> {
        if node.is_null() {
            Ok(None)
        } else {
            T::from_node(node).map(Some)
        }
    }
}

// TryFrom implementations for extracting values from Node.
impl TryFrom<Node> for i64 {
    type Error = crate::Error;

    fn try_from(value: Node) -> crate::Result<Self> {
        i64::from_node(&value)
    }
}

impl TryFrom<Node> for f64 {
    type Error = crate::Error;

    fn try_from(value: Node) -> crate::Result<Self> {
        f64::from_node(&value)
    }
}

impl TryFrom<Node> for bool {
    type Error = crate::Error;

    fn try_from(value: Node) -> crate::Result<Self> {
        bool::from_node(&value)
    }
}

impl TryFrom<Node> for String {
    type Error = crate::Error;

    fn try_from(value: Node) -> crate::Result<Self> {
        String::from_node(&value)
    }
}

// From implementations for creating a Node from primitives.
impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}
impl From<i8> for Node {
    fn from(value: i8) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<i16> for Node {
    fn from(value: i16) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<u8> for Node {
    fn from(value: u8) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<u16> for Node {
    fn from(value: u16) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(Number::from(value))
    }
}
impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}
impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}
impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(value)
    }
}
impl From<NodeMap> for Node {
    fn from(value: NodeMap) -> Self {
        Node::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let value = Node::Number(Number::Double(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = Node::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = Node::Number(Number::Double(3.5));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);
    }

    #[test]
    fn test_tryfrom_bool() {
        let value = Node::Bool(true);
        let result: bool = TryFrom::try_from(value).unwrap();
        assert!(result);

        let value = Node::Number(Number::Double(1.0));
        assert!(bool::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_string() {
        let value = Node::String("hello".to_string());
        let result: String = TryFrom::try_from(value).unwrap();
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Node::from(true), Node::Bool(true));
        assert_eq!(Node::from(42i32), Node::Number(Number::Double(42.0)));
        assert_eq!(Node::from("test"), Node::String("test".to_string()));
    }

    #[test]
    fn test_from_collections() {
        let vec = vec![Node::from(1i32), Node::from(2i32)];
        let value = Node::from(vec.clone());
        assert_eq!(value, Node::Array(vec));

        let mut map = NodeMap::new();
        map.insert("key".to_string(), Node::from(42i32));
        let value = Node::from(map.clone());
        assert_eq!(value, Node::Object(map));
    }

    #[test]
    fn test_from_node_vec_and_option() {
        let arr = Node::Array(vec![Node::from(1i64), Node::from(2i64)]);
        let v: Vec<i64> = Vec::from_node(&arr).unwrap();
        assert_eq!(v, vec![1, 2]);

        let opt: Option<i64> = Option::from_node(&Node::Null).unwrap();
        assert_eq!(opt, None);
        let opt: Option<i64> = Option::from_node(&Node::from(5i64)).unwrap();
        assert_eq!(opt, Some(5));
    }

    #[test]
    fn test_exact_number_roundtrip() {
        let exact: BigDecimal = "1.5".parse().unwrap();
        let n = Number::Exact(exact.clone());
        assert!(n.is_exact());
        assert_eq!(n.as_f64(), 1.5);
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &Node) -> bool {
            v.is_null()
        }

        assert!(check_null(&Node::Null));
    }
}
