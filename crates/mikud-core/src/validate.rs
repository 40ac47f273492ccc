//! Pre-flight validation of address fields.
//!
//! Rejecting a malformed query here means no request is ever issued for it.
//! Limits are deliberately loose (the service does the real address
//! matching); they only guard against empty or absurdly long input.

use thiserror::Error;

use crate::address::AddressQuery;

/// A query failed validation. Carries one entry per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address: {}", fields.join(", "))]
pub struct InvalidAddress {
    pub fields: Vec<String>,
}

/// Trimmed length in UTF-16 code units, matching the sibling client's
/// `String.length`. Identical to a char count for Hebrew and ASCII;
/// astral-plane characters count as two, as they do there.
fn trimmed_len(s: &str) -> usize {
    s.trim().encode_utf16().count()
}

/// City must trim to 2..=100 characters.
#[must_use]
pub fn validate_city(city: &str) -> bool {
    (2..=100).contains(&trimmed_len(city))
}

/// Street must trim to 2..=100 characters.
#[must_use]
pub fn validate_street(street: &str) -> bool {
    (2..=100).contains(&trimmed_len(street))
}

/// House number must trim to 1..=20 characters.
#[must_use]
pub fn validate_house(house: &str) -> bool {
    (1..=20).contains(&trimmed_len(house))
}

/// Entrance is optional: absent or blank is valid, otherwise it must trim
/// to at most 20 characters.
#[must_use]
pub fn validate_entrance(entrance: Option<&str>) -> bool {
    match entrance {
        None => true,
        Some(e) => trimmed_len(e) <= 20,
    }
}

/// Checks all four fields; a query is admissible only when every predicate
/// holds. The returned error lists each failing field by name.
///
/// # Errors
///
/// Returns [`InvalidAddress`] naming every field that failed.
pub fn validate_query(query: &AddressQuery) -> Result<(), InvalidAddress> {
    let mut fields = Vec::new();

    if !validate_city(&query.city) {
        fields.push("city".to_owned());
    }
    if !validate_street(&query.street) {
        fields.push("street".to_owned());
    }
    if !validate_house(&query.house) {
        fields.push("house".to_owned());
    }
    if !validate_entrance(query.entrance.as_deref()) {
        fields.push("entrance".to_owned());
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(InvalidAddress { fields })
    }
}
