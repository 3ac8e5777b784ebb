//! Configuration consumed by both the tokenizer and the element builder.
//!
//! ## Examples
//!
//! ```rust
//! use jsonh::{JsonhOptions, JsonhVersion};
//!
//! let options = JsonhOptions::new()
//!     .with_version(JsonhVersion::V1)
//!     .with_max_depth(16);
//! assert_eq!(options.version, JsonhVersion::V1);
//! ```

/// Which revision of the JSONH grammar to accept.
///
/// V2 adds the `@` verbatim-string prefix, `/=…*…*=/` nestable block
/// comments, and reserves `@` as a string terminator in addition to V1's
/// reserved set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum JsonhVersion {
    V1,
    #[default]
    V2,
}

impl JsonhVersion {
    /// `true` iff `self` is at least as new as `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonh::JsonhVersion;
    ///
    /// assert!(JsonhVersion::V2.supports(JsonhVersion::V1));
    /// assert!(!JsonhVersion::V1.supports(JsonhVersion::V2));
    /// ```
    #[must_use]
    pub fn supports(self, other: JsonhVersion) -> bool {
        self >= other
    }
}

/// Configuration for [`tokenize`](crate::tokenize), [`parse_node`](crate::parse_node),
/// and [`find_property_value`](crate::find_property_value).
///
/// # Examples
///
/// ```rust
/// use jsonh::JsonhOptions;
///
/// // Default: latest grammar, 64-deep containers, double-precision numbers.
/// let options = JsonhOptions::new();
/// assert_eq!(options.max_depth, 64);
///
/// // A permissive reader for streamed/truncated documents.
/// let options = JsonhOptions::new().with_incomplete_inputs(true);
/// assert!(options.incomplete_inputs);
/// ```
#[derive(Clone, Debug)]
pub struct JsonhOptions {
    /// Selects which syntactic features are recognized.
    pub version: JsonhVersion,
    /// After the root element, require the remaining input (minus trailing
    /// comments/whitespace) to be empty.
    pub parse_single_element: bool,
    /// Hard limit on nested `{…}`/`[…]` containers.
    pub max_depth: usize,
    /// Treat end-of-input inside an open container as an implicit close
    /// rather than an error.
    pub incomplete_inputs: bool,
    /// Deliver numbers as exact arbitrary-precision reals instead of `f64`.
    pub big_numbers: bool,
}

impl Default for JsonhOptions {
    fn default() -> Self {
        JsonhOptions {
            version: JsonhVersion::default(),
            parse_single_element: false,
            max_depth: 64,
            incomplete_inputs: false,
            big_numbers: false,
        }
    }
}

impl JsonhOptions {
    /// Creates default options: latest grammar version, 64-deep containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the grammar version.
    #[must_use]
    pub fn with_version(mut self, version: JsonhVersion) -> Self {
        self.version = version;
        self
    }

    /// Requires the input to contain exactly one element (plus trailing
    /// comments/whitespace).
    #[must_use]
    pub fn with_parse_single_element(mut self, value: bool) -> Self {
        self.parse_single_element = value;
        self
    }

    /// Sets the maximum container nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Allows end-of-input inside an open container to implicitly close it.
    #[must_use]
    pub fn with_incomplete_inputs(mut self, value: bool) -> Self {
        self.incomplete_inputs = value;
        self
    }

    /// Requests exact arbitrary-precision numbers instead of `f64`.
    #[must_use]
    pub fn with_big_numbers(mut self, value: bool) -> Self {
        self.big_numbers = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = JsonhOptions::new();
        assert_eq!(options.version, JsonhVersion::V2);
        assert!(!options.parse_single_element);
        assert_eq!(options.max_depth, 64);
        assert!(!options.incomplete_inputs);
        assert!(!options.big_numbers);
    }

    #[test]
    fn test_builder_chain() {
        let options = JsonhOptions::new()
            .with_version(JsonhVersion::V1)
            .with_max_depth(8)
            .with_incomplete_inputs(true)
            .with_big_numbers(true)
            .with_parse_single_element(true);

        assert_eq!(options.version, JsonhVersion::V1);
        assert_eq!(options.max_depth, 8);
        assert!(options.incomplete_inputs);
        assert!(options.big_numbers);
        assert!(options.parse_single_element);
    }

    #[test]
    fn test_version_ordering() {
        assert!(JsonhVersion::V2.supports(JsonhVersion::V1));
        assert!(JsonhVersion::V2.supports(JsonhVersion::V2));
        assert!(!JsonhVersion::V1.supports(JsonhVersion::V2));
    }
}
