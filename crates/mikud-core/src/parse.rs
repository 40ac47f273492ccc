//! Extraction of postal-code candidates from the response body.
//!
//! The endpoint answers with plain text in a handful of shapes: a tagged
//! `RES<digits>` line, free text with a zip code buried in it, a bare digit
//! run, or text with no code at all. Parsing runs three ordered tiers; the
//! first tier that yields anything wins and later tiers are not consulted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static RES_FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RES[0-9]{5,}$").expect("valid RES regex"));
static EXACT_ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,7}$").expect("valid zip regex"));
// ASCII word boundaries: the sibling client's JS `\b` treats Hebrew letters
// as non-word characters, so a zip code glued to Hebrew text still matches.
// A Unicode-aware `\b` would silently drop those.
static EMBEDDED_ZIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{5,7}(?-u:\b)").expect("valid embedded zip regex")
});

/// One postal-code candidate extracted from a response body.
///
/// `zip_code` is a 5–7 digit string; `raw` is the trimmed body it was
/// extracted from, kept so callers can disambiguate multi-candidate
/// responses or log what the service actually said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub zip_code: String,
    pub raw: String,
}

/// Parses a response body into zero or more candidates.
///
/// Tiers, in order:
/// 1. The whole trimmed body is `RES` + digits: drop the first four
///    characters (the `RES` tag plus one leading digit that is not part of
///    the code — an observed server quirk, preserved as-is) and accept the
///    remainder if it is 5–7 digits.
/// 2. Every word-bounded 5–7 digit run in the body, in order of appearance.
/// 3. The whole trimmed body is itself a 5–7 digit run.
///
/// An empty result means "no postal code found for this address" and is not
/// an error; transport failures never reach this function.
#[must_use]
pub fn parse_response(text: &str) -> Vec<Candidate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if RES_FORMAT_RE.is_match(trimmed) {
        let zip = &trimmed[4..];
        if EXACT_ZIP_RE.is_match(zip) {
            return vec![Candidate {
                zip_code: zip.to_owned(),
                raw: trimmed.to_owned(),
            }];
        }
    }

    let candidates: Vec<Candidate> = EMBEDDED_ZIP_RE
        .find_iter(trimmed)
        .map(|m| Candidate {
            zip_code: m.as_str().to_owned(),
            raw: trimmed.to_owned(),
        })
        .collect();
    if !candidates.is_empty() {
        return candidates;
    }

    if EXACT_ZIP_RE.is_match(trimmed) {
        return vec![Candidate {
            zip_code: trimmed.to_owned(),
            raw: trimmed.to_owned(),
        }];
    }

    Vec::new()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
