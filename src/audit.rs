//! LLM-assisted clause audit: classify license text as standard-permissive or
//! containing unusual/restrictive language.

use reqwest::Client;
use serde::Deserialize;

use crate::models::AuditVerdict;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Longest license text interpolated into the prompt. Anything beyond this is
/// truncated at a char boundary before the model sees it; the tail of an
/// overlong license is not analyzed.
pub const MAX_LICENSE_CHARS: usize = 20_000;

/// Response shape of the Gemini `generateContent` endpoint, reduced to the
/// fields we read.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Submit license text to the model and return its verdict.
///
/// The model is instructed to answer `OK` or `Unusual clause detected: ...`;
/// its trimmed output is returned verbatim without enforcing that convention.
/// Every failure mode (HTTP status, connectivity, malformed body) is caught
/// and folded into [`AuditVerdict::Failed`].
pub async fn analyze(client: &Client, api_key: Option<&str>, license_text: &str) -> AuditVerdict {
    let api_key = match api_key {
        Some(key) => key,
        None => {
            tracing::warn!("Gemini API key is not set");
            return AuditVerdict::NotConfigured;
        }
    };

    let prompt = build_prompt(license_text);

    match call_model(client, api_key, &prompt).await {
        Ok(text) => AuditVerdict::Response(text.trim().to_string()),
        Err(detail) => {
            tracing::error!("License analysis failed: {}", detail);
            AuditVerdict::Failed(detail)
        }
    }
}

async fn call_model(client: &Client, api_key: &str, prompt: &str) -> Result<String, String> {
    let body = serde_json::json!({
        "contents": [
            {
                "parts": [
                    { "text": prompt }
                ]
            }
        ]
    });

    let response = client
        .post(format!("{}?key={}", GEMINI_ENDPOINT, api_key))
        .header("content-type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("model request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(format!(
            "model API error {}: {}",
            status,
            truncate_chars(&error_body, 200)
        ));
    }

    let resp: GenerateResponse = response
        .json()
        .await
        .map_err(|e| format!("failed to parse model response: {}", e))?;

    extract_text(resp).ok_or_else(|| "empty model response".to_string())
}

/// Pull the first candidate's text out of a `generateContent` response.
fn extract_text(resp: GenerateResponse) -> Option<String> {
    resp.candidates?
        .into_iter()
        .next()?
        .content?
        .parts?
        .into_iter()
        .next()?
        .text
}

/// Build the fixed instructional prompt, capping the interpolated license text
/// at [`MAX_LICENSE_CHARS`].
fn build_prompt(license_text: &str) -> String {
    let capped = truncate_chars(license_text, MAX_LICENSE_CHARS);
    format!(
        "You are an expert license auditor analyzing software licenses. \
         Review the following license text carefully. \
         If it contains only standard permissive clauses commonly found in software licenses, respond with exactly 'OK'. \
         If you find any unusual, restrictive, or concerning clauses, respond with 'Unusual clause detected:' \
         followed by a brief explanation of the concerning clauses.\n\n\
         Consider:\n\
         1. Usage restrictions\n\
         2. Distribution limitations\n\
         3. Patent claims\n\
         4. Attribution requirements\n\
         5. Warranty and liability terms\n\n\
         License text to analyze:\n{}",
        capped
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_license_text() {
        let prompt = build_prompt("Permission is hereby granted...");
        assert!(prompt.contains("Permission is hereby granted..."));
        assert!(prompt.starts_with("You are an expert license auditor"));
    }

    #[test]
    fn test_prompt_caps_overlong_text() {
        let long = "a".repeat(MAX_LICENSE_CHARS + 500);
        let prompt = build_prompt(&long);
        let embedded = prompt.rsplit('\n').next().unwrap();
        assert_eq!(embedded.chars().count(), MAX_LICENSE_CHARS);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "äöü".repeat(10);
        assert_eq!(truncate_chars(&text, 5).chars().count(), 5);
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_extract_text_from_response() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "OK" } ] } }
            ]
        }"#;
        let resp: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(resp), Some("OK".to_string()));
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        let resp: GenerateResponse = serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();
        assert_eq!(extract_text(resp), None);
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let client = Client::new();
        let verdict = analyze(&client, None, "MIT License").await;
        assert_eq!(verdict, AuditVerdict::NotConfigured);
    }
}
