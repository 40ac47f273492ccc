//! HTTP client for the `SearchZip` Domino agent.

use std::time::Duration;

use reqwest::Client;

use mikud_core::{build_query_url, validate_query, AddressQuery, LookupResult};

use crate::error::PostClientError;

const DEFAULT_BASE_URL: &str = "https://services.israelpost.co.il/zip_data.nsf/SearchZip";

/// Client for the legacy zip-code lookup endpoint.
///
/// Validates and encodes through `mikud-core`, issues the GET with an
/// `Accept-Language: he` header, and triages the response: non-2xx statuses
/// and bot-block interstitials become typed errors, everything else is
/// handed to the parser. Use [`PostClient::new`] for production or
/// [`PostClient::with_base_url`] to point at a mock server in tests.
///
/// Note on spaces: `build_query_url` produces the canonical request string
/// with literal spaces in `Street`. The URL layer underneath `reqwest`
/// re-encodes that space as `%20` on the wire, the same normalization the
/// sibling browser client goes through; the core string remains the
/// byte-exact form used for logging and comparison.
pub struct PostClient {
    client: Client,
    base_url: String,
}

impl PostClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PostClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, PostClientError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PostClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, PostClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mikud/0.1 (zip-lookup)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Validates the query, issues the GET, and returns the raw response
    /// body. No request is sent for an inadmissible query.
    ///
    /// # Errors
    ///
    /// - [`PostClientError::InvalidAddress`] — a field failed validation;
    ///   nothing was sent.
    /// - [`PostClientError::Http`] — network failure or timeout.
    /// - [`PostClientError::UnexpectedStatus`] — any non-2xx status.
    /// - [`PostClientError::Blocked`] — the body is a CAPTCHA / bot-block
    ///   interstitial rather than a lookup result.
    pub async fn fetch_response_text(
        &self,
        query: &AddressQuery,
    ) -> Result<String, PostClientError> {
        validate_query(query)?;

        let url = build_query_url(&self.base_url, query);
        tracing::debug!(%url, "sending zip lookup request");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "he")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        if let Some(reason) = block_reason(&body) {
            return Err(PostClientError::Blocked { reason });
        }

        Ok(body)
    }

    /// Performs one complete lookup and always yields a [`LookupResult`].
    ///
    /// Transport failures (and pre-flight validation failures) are folded
    /// into `LookupResult { matched: false, error }` without consulting the
    /// parser; a clean response goes through the full three-tier parse.
    pub async fn lookup(&self, query: &AddressQuery) -> LookupResult {
        match self.fetch_response_text(query).await {
            Ok(body) => LookupResult::from_response(&body),
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed before parsing");
                LookupResult::transport_failure(err.to_string())
            }
        }
    }
}

/// Detects bot-mitigation interstitials in a response body.
///
/// Heuristics observed on the live service: ShieldSquare CAPTCHA pages,
/// generic "bot … blocked" notices, and "access denied" stubs.
fn block_reason(body: &str) -> Option<&'static str> {
    let lower = body.to_lowercase();
    if lower.contains("captcha") {
        Some("captcha challenge")
    } else if lower.contains("shieldsquare") {
        Some("shieldsquare interstitial")
    } else if lower.contains("bot") && lower.contains("blocked") {
        Some("bot traffic blocked")
    } else if lower.contains("access denied") {
        Some("access denied")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_reason_detects_captcha() {
        assert_eq!(
            block_reason("<html>Please solve this CAPTCHA</html>"),
            Some("captcha challenge")
        );
    }

    #[test]
    fn block_reason_detects_shieldsquare() {
        assert!(block_reason("validate.perfdrive.com ShieldSquare").is_some());
    }

    #[test]
    fn block_reason_requires_both_bot_and_blocked() {
        assert!(block_reason("robots.txt disallows bots").is_none());
        assert!(block_reason("bot traffic has been blocked").is_some());
    }

    #[test]
    fn block_reason_ignores_normal_responses() {
        assert!(block_reason("RES73327233").is_none());
        assert!(block_reason("לא נמצא מיקוד").is_none());
    }
}
