//! Terminal value returned to callers for one lookup attempt.

use serde::Serialize;

use crate::parse::{parse_response, Candidate};

/// Outcome of one lookup: a match with a primary zip code, a clean
/// no-match, or a transport failure reported by the caller's HTTP layer.
///
/// "No match" and "transport failure" are deliberately distinct: the first
/// has `error: None` (the service answered, there is just no code for the
/// address), the second carries the failure description and never went
/// through the parser. The core never retries; retry policy belongs to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub matched: bool,
    /// Primary result: the first candidate the parser produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// All candidates, for callers that want to disambiguate a
    /// multi-candidate response themselves.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,
    /// Trimmed response body the result was derived from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    /// Builds a result from a response body by running the parser.
    /// The first candidate becomes the primary zip code.
    #[must_use]
    pub fn from_response(text: &str) -> Self {
        let candidates = parse_response(text);
        match candidates.first() {
            Some(first) => Self {
                matched: true,
                zip_code: Some(first.zip_code.clone()),
                raw: Some(first.raw.clone()),
                candidates,
                error: None,
            },
            None => Self {
                matched: false,
                zip_code: None,
                candidates,
                raw: Some(text.trim().to_owned()),
                error: None,
            },
        }
    }

    /// Builds the result for a failed network step. The parser is never
    /// consulted; the failure is normalized here so it cannot leak past the
    /// collaborator boundary as a panic or a stray `Err`.
    #[must_use]
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            matched: false,
            zip_code: None,
            candidates: Vec::new(),
            raw: None,
            error: Some(message.into()),
        }
    }
}
