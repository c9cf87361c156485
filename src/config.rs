use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Environment variable holding the Libraries.io API key.
pub const LIBRARIES_IO_KEY_VAR: &str = "LIBRARIES_IO_API_KEY";
/// Environment variable holding the GitHub access token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Environment variable holding the Gemini API key.
pub const GEMINI_KEY_VAR: &str = "GOOGLE_API_KEY";

/// API credentials for the upstream services, all optional.
///
/// Built once at startup and passed into each operation explicitly, so tests
/// can supply fakes without mutating the process environment. A missing
/// credential degrades the owning operation to its sentinel outcome; it never
/// fails the process.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub libraries_io_key: Option<String>,
    pub github_token: Option<String>,
    pub gemini_key: Option<String>,
}

impl Credentials {
    /// Read all credentials from the environment. Empty values count as unset.
    pub fn from_env() -> Self {
        Credentials {
            libraries_io_key: non_empty_var(LIBRARIES_IO_KEY_VAR),
            github_token: non_empty_var(GITHUB_TOKEN_VAR),
            gemini_key: non_empty_var(GEMINI_KEY_VAR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Root configuration structure, deserialized from `.license-scout/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// License approval policy.
    pub policy: PolicyConfig,
}

/// The approved-license allow-list consulted by `lookup --check-policy`.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// SPDX identifiers considered approved for use.
    #[serde(default)]
    pub approved: Vec<String>,
}

impl Default for Config {
    /// Built-in allow-list used when no config file is found.
    fn default() -> Self {
        Config {
            policy: PolicyConfig {
                approved: [
                    "MIT",
                    "ISC",
                    "BSD-2-Clause",
                    "BSD-3-Clause",
                    "Apache-2.0",
                    "MPL-2.0",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
        }
    }
}

impl Config {
    /// Whether a license identifier is on the approved list (exact match after
    /// trimming).
    pub fn is_approved(&self, license: &str) -> bool {
        let trimmed = license.trim();
        self.policy.approved.iter().any(|l| l == trimmed)
    }
}

/// Load the policy configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_path>/.license-scout/config.toml`
/// 3. `~/.config/license-scout/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = base_path.join(".license-scout").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-scout")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
