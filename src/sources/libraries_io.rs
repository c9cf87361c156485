use anyhow::Result;
use reqwest::Client;

use crate::models::{Coordinate, LookupOutcome, ECOSYSTEM};

const LIBRARIES_IO_BASE: &str = "https://libraries.io/api";

/// Fetch the declared license for a package from the Libraries.io metadata API.
///
/// A missing API key short-circuits to [`LookupOutcome::NotConfigured`] without
/// touching the network. Non-200 responses degrade to
/// [`LookupOutcome::TransportError`]; request-level failures (timeout,
/// connectivity) propagate to the caller.
pub async fn fetch_license(
    client: &Client,
    api_key: Option<&str>,
    coordinate: &Coordinate,
) -> Result<LookupOutcome> {
    let api_key = match api_key {
        Some(key) => key,
        None => {
            tracing::warn!("Libraries.io API key is not set");
            return Ok(LookupOutcome::NotConfigured);
        }
    };

    fetch_license_at(client, api_key, LIBRARIES_IO_BASE, coordinate).await
}

async fn fetch_license_at(
    client: &Client,
    api_key: &str,
    base: &str,
    coordinate: &Coordinate,
) -> Result<LookupOutcome> {
    let url = format!(
        "{}/{}/{}:{}/{}?api_key={}",
        base, ECOSYSTEM, coordinate.group, coordinate.artifact, coordinate.version, api_key
    );

    let response = client
        .get(&url)
        .header("User-Agent", "license-scout/0.1.0")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Libraries.io request failed: {}", status.as_u16());
        return Ok(LookupOutcome::TransportError(status.as_u16()));
    }

    let data: serde_json::Value = response.json().await?;
    Ok(extract_license(&data))
}

/// Pull the license out of a Libraries.io package payload.
///
/// `normalized_licenses` wins when present and non-empty (the API returns it
/// as an array; multiple entries are joined with `, `), then the raw
/// `licenses` field, then [`LookupOutcome::NotFound`].
fn extract_license(data: &serde_json::Value) -> LookupOutcome {
    if let Some(license) = license_field(data.get("normalized_licenses")) {
        return LookupOutcome::Found(license);
    }
    if let Some(license) = license_field(data.get("licenses")) {
        return LookupOutcome::Found(license);
    }
    LookupOutcome::NotFound
}

/// Normalize a license field that may be a string or an array of strings.
fn license_field(value: Option<&serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(serde_json::Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coordinate() -> Coordinate {
        Coordinate {
            group: "org.example".into(),
            artifact: "widget".into(),
            version: "1.0.0".into(),
        }
    }

    #[test]
    fn test_normalized_licenses_string() {
        let data = json!({ "normalized_licenses": "MIT" });
        assert_eq!(extract_license(&data), LookupOutcome::Found("MIT".into()));
    }

    #[test]
    fn test_normalized_licenses_array() {
        let data = json!({ "normalized_licenses": ["MIT", "Apache-2.0"] });
        assert_eq!(
            extract_license(&data),
            LookupOutcome::Found("MIT, Apache-2.0".into())
        );
    }

    #[test]
    fn test_falls_back_to_raw_licenses() {
        let data = json!({ "normalized_licenses": [], "licenses": "Apache-2.0" });
        assert_eq!(
            extract_license(&data),
            LookupOutcome::Found("Apache-2.0".into())
        );
    }

    #[test]
    fn test_neither_field_present() {
        let data = json!({ "name": "commons-lang3" });
        assert_eq!(extract_license(&data), LookupOutcome::NotFound);
    }

    #[test]
    fn test_empty_string_treated_as_absent() {
        let data = json!({ "normalized_licenses": "", "licenses": "" });
        assert_eq!(extract_license(&data), LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let client = Client::new();
        let outcome = fetch_license(&client, None, &coordinate()).await.unwrap();
        assert_eq!(outcome, LookupOutcome::NotConfigured);
    }

    #[tokio::test]
    async fn test_non_200_degrades_to_unknown() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", mockito::Matcher::Any)
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = Client::new();
        let outcome = fetch_license_at(&client, "key", &server.url(), &coordinate())
            .await
            .unwrap();
        assert_eq!(outcome, LookupOutcome::TransportError(500));
        assert_eq!(outcome.to_string(), "Unknown");
    }

    #[tokio::test]
    async fn test_success_returns_found_license() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", mockito::Matcher::Any)
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{ "normalized_licenses": ["MIT"] }"#)
            .create_async()
            .await;

        let client = Client::new();
        let outcome = fetch_license_at(&client, "key", &server.url(), &coordinate())
            .await
            .unwrap();
        assert_eq!(outcome, LookupOutcome::Found("MIT".into()));
    }
}
