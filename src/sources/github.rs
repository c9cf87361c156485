use reqwest::Client;
use serde::Deserialize;

use crate::models::SearchOutcome;

const API_BASE: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Rendered when the host recognizes a license file but cannot map it to an
/// SPDX identifier (`"spdx_id": null`).
const NO_SPDX_ID: &str = "NOASSERTION";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RepoEntry>,
}

#[derive(Debug, Deserialize)]
struct RepoEntry {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct LicenseResponse {
    license: LicenseInfo,
}

#[derive(Debug, Deserialize)]
struct LicenseInfo {
    spdx_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
}

/// Search GitHub for a package and try to identify its license.
///
/// Fallback chain, strictly sequential:
/// 1. repository search by package name (the host's own relevance ranking
///    decides which repository is inspected);
/// 2. the dedicated license endpoint of the top hit;
/// 3. a top-level contents listing filtered for license-looking filenames.
///
/// Any HTTP error status or connectivity failure in the chain folds into
/// [`SearchOutcome::SearchFailed`]; nothing propagates as an error.
pub async fn search(client: &Client, token: Option<&str>, package_name: &str) -> SearchOutcome {
    let token = match token {
        Some(token) => token,
        None => {
            tracing::warn!("GitHub token is not set");
            return SearchOutcome::NotConfigured;
        }
    };

    search_at(client, token, API_BASE, package_name).await
}

async fn search_at(
    client: &Client,
    token: &str,
    base: &str,
    package_name: &str,
) -> SearchOutcome {
    match search_inner(client, token, base, package_name).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("GitHub API request failed: {}", err);
            SearchOutcome::SearchFailed {
                detail: err.to_string(),
            }
        }
    }
}

async fn search_inner(
    client: &Client,
    token: &str,
    base: &str,
    package_name: &str,
) -> Result<SearchOutcome, reqwest::Error> {
    let search_url = format!("{}/search/repositories?q={}", base, package_name);
    let search: SearchResponse = get(client, token, &search_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let repo = match search.items.into_iter().next() {
        Some(repo) => repo.full_name,
        None => {
            return Ok(SearchOutcome::NoRepositories {
                query: package_name.to_string(),
            })
        }
    };

    // Most relevant hit first, per the host's own ranking.
    let license_url = format!("{}/repos/{}/license", base, repo);
    let license_resp = get(client, token, &license_url).send().await?;

    if license_resp.status().is_success() {
        let info: LicenseResponse = license_resp.json().await?;
        return Ok(SearchOutcome::Found {
            repo,
            license: info
                .license
                .spdx_id
                .unwrap_or_else(|| NO_SPDX_ID.to_string()),
        });
    }

    // License endpoint came up empty; fall back to scanning the top-level
    // file listing for license-looking names.
    let contents_url = format!("{}/repos/{}/contents", base, repo);
    let contents_resp = get(client, token, &contents_url).send().await?;

    if contents_resp.status().is_success() {
        let entries: Vec<ContentEntry> = contents_resp.json().await?;
        let names: Vec<String> = entries.into_iter().map(|e| e.name).collect();
        let candidates = license_file_candidates(&names);
        if !candidates.is_empty() {
            return Ok(SearchOutcome::LicenseFiles {
                repo,
                files: candidates,
            });
        }
    }

    Ok(SearchOutcome::NoLicenseInfo { repo })
}

fn get(client: &Client, token: &str, url: &str) -> reqwest::RequestBuilder {
    client
        .get(url)
        .header("Authorization", format!("token {}", token))
        .header("Accept", ACCEPT)
        .header("User-Agent", "license-scout/0.1.0")
}

/// Filter filenames for license-looking candidates, case-insensitively.
fn license_file_candidates(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.to_lowercase())
        .filter(|n| n.contains("license") || n.contains("copying"))
        .collect()
}
