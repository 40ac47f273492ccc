//! Probe loop: try address combinations against the live endpoint and keep
//! the ones that resolve to a zip code.
//!
//! Per-address failures are logged and skipped so one dead address does not
//! abort a long run; a block-page response aborts immediately, since
//! continuing to hammer a service that has flagged us only makes it worse.

use std::path::Path;
use std::time::Duration;

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use mikud_client::{Pacer, PostClient, PostClientError};
use mikud_core::{AddressQuery, LookupResult};

/// Cities with good coverage in the lookup database.
const CITIES: &[&str] = &[
    "תל אביב",
    "ירושלים",
    "חיפה",
    "באר שבע",
    "נתניה",
    "אשדוד",
    "רמת גן",
    "פתח תקווה",
    "אשקלון",
    "רחובות",
    "בני ברק",
    "בת ים",
    "כפר סבא",
    "הרצליה",
    "רעננה",
];

/// Street names common enough to exist in most of the cities above.
const STREETS: &[&str] = &[
    "הרצל",
    "בן גוריון",
    "ויצמן",
    "רוטשילד",
    "דיזנגוף",
    "אלנבי",
    "שדרות העצמאות",
    "הכרמל",
    "הנביאים",
    "המלך ג'ורג'",
];

const ENTRANCES: &[&str] = &["", "א", "ב", "1", "2"];

/// One confirmed address, serialized into the result file.
#[derive(Debug, Serialize)]
pub(crate) struct FoundAddress {
    city: String,
    street: String,
    house: String,
    entrance: String,
    #[serde(rename = "zipCode")]
    zip_code: String,
}

/// Draws `count` random city/street/house/entrance combinations.
pub(crate) fn random_queries(count: u32) -> Vec<AddressQuery> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let city = CITIES.choose(&mut rng).copied().unwrap_or(CITIES[0]);
            let street = STREETS.choose(&mut rng).copied().unwrap_or(STREETS[0]);
            let house = rng.random_range(1..=200).to_string();
            let entrance = ENTRANCES.choose(&mut rng).copied().unwrap_or("");
            AddressQuery::new(
                city,
                street,
                &house,
                if entrance.is_empty() {
                    None
                } else {
                    Some(entrance)
                },
            )
        })
        .collect()
}

/// Reads a JSON array of `{city, street, house, entrance?}` objects.
pub(crate) fn load_queries(input: &Path) -> anyhow::Result<Vec<AddressQuery>> {
    let text = std::fs::read_to_string(input)?;
    let queries: Vec<AddressQuery> = serde_json::from_str(&text)?;
    Ok(queries)
}

/// Runs the probe loop: paced sequential lookups, hits accumulated and
/// written to `output` as a pretty-printed UTF-8 JSON array (Hebrew stays
/// unescaped).
pub(crate) async fn run(
    client: &PostClient,
    queries: &[AddressQuery],
    delay_secs: u64,
    output: &Path,
) -> anyhow::Result<()> {
    let pacer = Pacer::new(Duration::from_secs(delay_secs));
    let mut found = Vec::new();
    let total = queries.len();

    for (i, query) in queries.iter().enumerate() {
        pacer.wait().await;
        tracing::info!(
            probe = i + 1,
            total,
            city = %query.city,
            street = %query.street,
            house = %query.house,
            "probing address"
        );

        let result = match client.fetch_response_text(query).await {
            Ok(body) => LookupResult::from_response(&body),
            Err(err @ PostClientError::Blocked { .. }) => {
                tracing::error!(error = %err, "service is blocking us; aborting the run");
                anyhow::bail!("probe run aborted: {err}");
            }
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed; skipping address");
                continue;
            }
        };

        match result.zip_code {
            Some(zip_code) => {
                tracing::info!(%zip_code, "address resolved");
                found.push(FoundAddress {
                    city: query.city.clone(),
                    street: query.street.clone(),
                    house: query.house.clone(),
                    entrance: query.entrance.clone().unwrap_or_default(),
                    zip_code,
                });
            }
            None => tracing::info!("no zip code for this address"),
        }
    }

    write_results(&found, output)?;
    tracing::info!(
        found = found.len(),
        total,
        output = %output.display(),
        "probe run finished"
    );
    Ok(())
}

fn write_results(found: &[FoundAddress], output: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(found)?;
    std::fs::write(output, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mikud_core::validate_query;

    #[test]
    fn random_queries_are_always_admissible() {
        for query in random_queries(200) {
            assert!(validate_query(&query).is_ok(), "generated: {query:?}");
        }
    }

    #[test]
    fn random_queries_respect_count() {
        assert_eq!(random_queries(7).len(), 7);
    }

    #[test]
    fn found_address_serializes_with_camel_case_zip() {
        let found = FoundAddress {
            city: "חיפה".to_owned(),
            street: "כנרת".to_owned(),
            house: "7".to_owned(),
            entrance: "א".to_owned(),
            zip_code: "3327233".to_owned(),
        };
        let json = serde_json::to_string(&found).expect("serializable");
        assert!(json.contains(r#""zipCode":"3327233""#));
        // serde_json writes Hebrew as-is, not as \u escapes.
        assert!(json.contains("חיפה"));
    }

    #[test]
    fn load_queries_accepts_optional_entrance() {
        let dir = std::env::temp_dir().join("mikud-probe-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let file = dir.join("queries.json");
        std::fs::write(
            &file,
            r#"[
                {"city": "חיפה", "street": "כנרת", "house": "7", "entrance": "א"},
                {"city": "תל אביב", "street": "דיזנגוף", "house": "50"}
            ]"#,
        )
        .expect("write fixture");

        let queries = load_queries(&file).expect("parse fixture");
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].entrance.as_deref(), Some("א"));
        assert!(queries[1].entrance.is_none());
    }
}
