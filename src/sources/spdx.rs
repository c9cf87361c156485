use anyhow::Result;
use reqwest::Client;

/// Raw-text corpus serving the canonical license texts, keyed by SPDX id.
const SPDX_TEXT_BASE: &str = "https://raw.githubusercontent.com/spdx/license-list-data/main/text";

fn text_url(base: &str, license_name: &str) -> String {
    // The identifier is used as the filename component verbatim; the corpus
    // answers 404 for anything it does not know.
    format!("{}/{}.txt", base, license_name)
}

/// Fetch the canonical text of a license from the SPDX license-list corpus.
///
/// Returns the body verbatim on 200 and an empty string on any other status.
/// Request-level failures propagate to the caller.
pub async fn fetch_text(client: &Client, license_name: &str) -> Result<String> {
    fetch_text_at(client, SPDX_TEXT_BASE, license_name).await
}

async fn fetch_text_at(client: &Client, base: &str, license_name: &str) -> Result<String> {
    let response = client
        .get(text_url(base, license_name))
        .header("User-Agent", "license-scout/0.1.0")
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!("Could not fetch SPDX text for {}", license_name);
        return Ok(String::new());
    }

    Ok(response.text().await?)
}
