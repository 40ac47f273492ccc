//! Field encoding for the lookup endpoint.
//!
//! The endpoint's query parser is picky in an asymmetric way: every field is
//! percent-encoded like a normal URI component, except that `Street` must
//! carry *literal* spaces. A `%20` (or `+`) in `Street` is treated as part
//! of the street name and silently matches nothing, so space handling is
//! selected per field rather than applied uniformly.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape set matching JS `encodeURIComponent`: everything except
/// `[A-Za-z0-9]` and `-_.!~*'()` is percent-encoded. Non-ASCII (Hebrew)
/// text is UTF-8 percent-encoded byte by byte.
const COMPONENT: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Same set with U+0020 passed through unescaped. Used only for `Street`.
const COMPONENT_KEEP_SPACES: AsciiSet = COMPONENT.remove(b' ');

/// How a field value is escaped for the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Percent-encode every character outside the component-safe set.
    Strict,
    /// Like [`EncodeMode::Strict`], but the space character is emitted
    /// as-is. Required for the `Street` parameter, where the service
    /// treats a literal space as a token separator.
    SpacePreserving,
}

/// Encodes one field value for the query string.
#[must_use]
pub fn encode_field(value: &str, mode: EncodeMode) -> String {
    let set = match mode {
        EncodeMode::Strict => &COMPONENT,
        EncodeMode::SpacePreserving => &COMPONENT_KEEP_SPACES,
    };
    utf8_percent_encode(value, set).to_string()
}

#[cfg(test)]
#[path = "encode_test.rs"]
mod tests;
