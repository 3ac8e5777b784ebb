//! JSONH Format Specification
//!
//! This module documents the JSONH ("JSON for Humans") grammar as implemented
//! by this library. JSONH is a strict superset of JSON: every valid JSON
//! document is also valid JSONH, but JSONH relaxes the syntax in ways aimed
//! at documents people write and edit by hand rather than machines alone.
//!
//! # Overview
//!
//! - **Quoteless strings**: bare words are strings unless they parse as a
//!   number or match a reserved literal (`true`, `false`, `null`).
//! - **Braceless root objects**: a top-level `name: value` pair needs no
//!   enclosing `{ }`.
//! - **Comments**: `#`, `//`, `/* */`, and (grammar version 2 only) a
//!   nestable `/=...*...*=...*=/` block form.
//! - **Multi-quoted strings**: `"""like this"""`, with leading/trailing
//!   indentation stripped the way a heredoc would.
//! - **Flexible numbers**: digit separators (`1_000`), hex/octal/binary
//!   bases, and fractional exponents.
//! - **Verbatim strings** (version 2 only): `@"no \escapes processed"`.
//!
//! # Objects
//!
//! ```text
//! {
//!   name: Alice
//!   age: 30
//!   active: true
//! }
//! ```
//!
//! A root-level object may omit its braces entirely:
//!
//! ```text
//! name: Alice
//! age: 30
//! ```
//!
//! Property names follow the same lexical rules as string values — quoted,
//! quoteless, or multi-quoted — so `"2nd place": gold` and `2nd\ place: gold`
//! are both legal. A name is immediately followed by `:` and exactly one
//! value token (or the start of one, for containers). Commas between
//! properties are optional; a newline or `}` also separates them.
//!
//! # Arrays
//!
//! ```text
//! [1, 2, 3]
//! [
//!   Alice
//!   Bob
//! ]
//! ```
//!
//! As in objects, the comma between elements is optional when elements are
//! separated by whitespace or a newline. A bare `name: value` pair is
//! *illegal* directly inside `[ ... ]` — braceless objects are a root-only
//! shorthand, not a general array-element shorthand — and is rejected rather
//! than silently reinterpreted.
//!
//! # Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` | `value: null` |
//! | Boolean | `true` or `false` | `active: true` |
//! | Number | Decimal, hex, octal, or binary | `count: 42`, `flags: 0b101` |
//! | String | Unquoted, quoted, or multi-quoted | `name: Alice`, `name: "Al Ice"` |
//!
//! # Strings
//!
//! A string is quoteless by default. Quoting (`"..."`, `'...'`) is needed
//! when the text would otherwise be ambiguous with another token: it starts
//! with a reserved character, it would parse as a number, or it matches a
//! reserved literal keyword.
//!
//! Reserved characters that end a quoteless string (version 1):
//! `\ , : [ ] { } / # " '` — version 2 adds `@` to this set (it introduces a
//! verbatim string).
//!
//! **Escape sequences** (quoted and quoteless strings, but not verbatim
//! strings):
//!
//! ```text
//! \\  \b  \f  \n  \r  \t  \v  \0  \a  \e
//! \xHH        - one byte, two hex digits
//! \uHHHH      - one UTF-16 code unit, four hex digits (surrogate pairs combine)
//! \UHHHHHHHH  - one code point, eight hex digits
//! \<newline>  - line continuation; removed entirely
//! ```
//!
//! ## Multi-quoted strings
//!
//! Three or more of the same quote character open a multi-quoted string,
//! closed by the same count of that character:
//!
//! ```text
//! description: """
//!   This text's leading and trailing
//!   indentation is stripped.
//!   """
//! ```
//!
//! If the body starts with a newline (after only whitespace) and ends with a
//! newline followed by only whitespace, both the leading line and the
//! trailing whitespace are removed, and that trailing whitespace's width is
//! then stripped from the start of every remaining line. A body that doesn't
//! match this shape is used exactly as written.
//!
//! ## Verbatim strings (version 2)
//!
//! `@"..."` and `@'''...'''` read their body with no escape processing at
//! all — a backslash is just a backslash.
//!
//! # Numbers
//!
//! ```text
//! 42          -42         3.14
//! 1_000_000   0x1A        0o17        0b101
//! 1.5e10      1.5e-3      0x5e+3
//! ```
//!
//! - `_` may separate digits anywhere in the mantissa or exponent; it carries
//!   no value and is stripped before parsing.
//! - `0x`/`0o`/`0b` select hexadecimal, octal, or binary digits for the
//!   mantissa. In hexadecimal, `e`/`E` is an ordinary digit unless
//!   immediately followed by `+` or `-`, in which case it starts an exponent
//!   (`0x5e3` is 1507; `0x5e+3` is 5000).
//! - An exponent (`e`/`E` followed by optional sign and digits) multiplies
//!   the mantissa by a power of ten. An exponent with a fractional part
//!   (`1.2e3.4`) is evaluated approximately rather than exactly.
//! - A literal that starts parsing as a number but turns out malformed (a
//!   bare `.`, a digit-less exponent) is not an error: the text collected so
//!   far continues as a quoteless string instead. Conversely, a
//!   successfully-parsed number immediately followed by more same-line
//!   quoteless content is absorbed into that content rather than treated as
//!   two adjacent tokens — `1 apple` is the single string `"1 apple"`, not
//!   a number followed by a string.
//!
//! # Comments
//!
//! ```text
//! # hash comment, to end of line
//! // line comment, to end of line
//! /* block comment, cannot nest */
//! /=*  nestable block comment (version 2)  *=/
//! ```
//!
//! The nestable form opens with `/`, some number `k` of `=` (possibly zero,
//! which makes it the ordinary non-nestable block comment), then `*`; it
//! closes on a `*` immediately followed by that same count of `=` and a `/`.
//! Any other `*` inside the comment is just content.
//!
//! # Grammar Versions
//!
//! | Feature | V1 | V2 |
//! |---|---|---|
//! | Quoteless strings, braceless objects, numbers, line/hash/block comments | yes | yes |
//! | Nestable block comments | no | yes |
//! | Verbatim strings (`@`) | no | yes |
//! | `@` reserved in quoteless strings | no | yes |
//!
//! V2 is the default; a caller reading documents written against the
//! original JSONH grammar should request V1 explicitly.
//!
//! # Edge Cases
//!
//! - An empty document is an error unless the caller is prepared to treat
//!   "no element found" as a distinct case.
//! - [`JsonhOptions::incomplete_inputs`](crate::JsonhOptions::incomplete_inputs)
//!   treats end-of-input inside an open `{`/`[` as an implicit close rather
//!   than an error, for reading a document that may have been truncated
//!   mid-stream.
//! - [`JsonhOptions::parse_single_element`](crate::JsonhOptions::parse_single_element)
//!   rejects any non-whitespace, non-comment content left over after the
//!   root element.
//! - Duplicate property names keep the *last* value, but the property's
//!   position in iteration order is wherever it was *first* written.
//!
//! # Conformance
//!
//! This implementation follows the JSONH grammar as commonly specified for
//! the format: a superset of JSON adding quoteless strings, braceless root
//! objects, comments, multi-quoted strings, and relaxed number literals.

// This module contains only documentation; no implementation code
