//! Query-string assembly for the `SearchZip` endpoint.
//!
//! The endpoint is a legacy Domino agent and its parameter handling is
//! position-sensitive: `House` and `Entrance` must appear before `Street`,
//! and `POB` is always present but empty. The string is assembled by hand
//! here because any generic query-pair builder would re-encode the literal
//! spaces in `Street` and could reorder parameters. Do not "normalize" the
//! parameter order.

use crate::address::AddressQuery;
use crate::encode::{encode_field, EncodeMode};

/// Builds the full request URL for one address.
///
/// Fields are trimmed, then `city`, `house`, and `entrance` are encoded
/// strictly while `street` keeps its literal spaces. An absent entrance is
/// sent as an empty parameter.
#[must_use]
pub fn build_query_url(base: &str, query: &AddressQuery) -> String {
    let city = encode_field(query.city.trim(), EncodeMode::Strict);
    let street = encode_field(query.street.trim(), EncodeMode::SpacePreserving);
    let house = encode_field(query.house.trim(), EncodeMode::Strict);
    let entrance = encode_field(
        query.entrance.as_deref().unwrap_or("").trim(),
        EncodeMode::Strict,
    );

    format!("{base}?OpenAgent&Location={city}&POB=&House={house}&Entrance={entrance}&Street={street}")
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
