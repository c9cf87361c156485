use reqwest::Client;

/// Download raw text from a caller-supplied URL, treated as a license file.
///
/// The most forgiving of the fetchers: an empty URL returns an empty string
/// without a request, a non-200 response returns an empty string silently, and
/// every request-level failure (malformed URL, connectivity, timeout) is
/// caught and logged rather than surfaced. Callers always get a string.
pub async fn fetch(client: &Client, url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    match request_text(client, url).await {
        Ok(Some(body)) => body,
        Ok(None) => String::new(),
        Err(err) => {
            tracing::error!("Failed to fetch license from {}: {}", url, err);
            String::new()
        }
    }
}

async fn request_text(client: &Client, url: &str) -> Result<Option<String>, reqwest::Error> {
    let response = client
        .get(url)
        .header("User-Agent", "license-scout/0.1.0")
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    Ok(Some(response.text().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_url_short_circuits() {
        let client = Client::new();
        assert_eq!(fetch(&client, "").await, "");
    }

    #[tokio::test]
    async fn test_malformed_url_is_swallowed() {
        let client = Client::new();
        assert_eq!(fetch(&client, "not a url").await, "");
    }

    #[tokio::test]
    async fn test_non_200_degrades_silently_to_empty() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/LICENSE")
            .with_status(404)
            .create_async()
            .await;

        let client = Client::new();
        let url = format!("{}/LICENSE", server.url());
        assert_eq!(fetch(&client, &url).await, "");
    }
}
