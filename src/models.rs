/// The only ecosystem the metadata lookup currently queries.
pub const ECOSYSTEM: &str = "Maven";

/// Identifies a published package version for the metadata lookup.
///
/// Pure request-formatting input; fields are not validated beyond presence.
#[derive(Debug, Clone)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.group, self.artifact, self.version)
    }
}

/// Outcome of a metadata license lookup.
///
/// The upstream contract is "always a best-effort string, never absence":
/// every non-`Found` variant renders as the literal `Unknown`. Callers that
/// need to tell the cases apart match on the variant instead of the string.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Declared license as reported by the metadata service.
    Found(String),
    /// No API key was configured; no request was made.
    NotConfigured,
    /// The service answered 200 but carried no license fields.
    NotFound,
    /// The service answered with a non-200 status.
    TransportError(u16),
}

impl std::fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupOutcome::Found(license) => write!(f, "{}", license),
            _ => write!(f, "Unknown"),
        }
    }
}

/// Outcome of the repository license search fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// No access token was configured; no request was made.
    NotConfigured,
    /// The search returned zero repositories for the query.
    NoRepositories { query: String },
    /// The host's license endpoint identified the license.
    Found { repo: String, license: String },
    /// License endpoint failed but a directory listing surfaced candidates.
    LicenseFiles { repo: String, files: Vec<String> },
    /// Both fallback strategies came up empty.
    NoLicenseInfo { repo: String },
    /// A request in the chain failed (HTTP error or connectivity).
    SearchFailed { detail: String },
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::NotConfigured => {
                write!(f, "Could not search: GitHub token not configured")
            }
            SearchOutcome::NoRepositories { query } => {
                write!(f, "No repositories found for {}", query)
            }
            SearchOutcome::Found { repo, license } => {
                write!(f, "Found license for {}: {}", repo, license)
            }
            SearchOutcome::LicenseFiles { repo, files } => {
                write!(
                    f,
                    "Found potential license file(s) in {}: {}",
                    repo,
                    files.join(", ")
                )
            }
            SearchOutcome::NoLicenseInfo { repo } => {
                write!(f, "No license information found for {}", repo)
            }
            SearchOutcome::SearchFailed { detail } => {
                write!(f, "Error searching for license: {}", detail)
            }
        }
    }
}

/// Outcome of a clause audit.
///
/// `Response` carries the model's trimmed output verbatim — the convention is
/// `OK` for a standard license or text starting with `Unusual clause
/// detected:`, but the model is not forced to honor it and whatever it said is
/// passed through unexamined.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditVerdict {
    Response(String),
    /// No model API key was configured; no request was made.
    NotConfigured,
    /// The model call failed (HTTP error, connectivity, malformed body).
    Failed(String),
}

impl AuditVerdict {
    /// True when the model followed the convention and reported a clean license.
    pub fn is_clean(&self) -> bool {
        matches!(self, AuditVerdict::Response(text) if text == "OK")
    }
}

impl std::fmt::Display for AuditVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditVerdict::Response(text) => write!(f, "{}", text),
            AuditVerdict::NotConfigured => {
                write!(f, "Could not analyze: model API key not configured")
            }
            AuditVerdict::Failed(detail) => {
                write!(f, "Error analyzing license: {}", detail)
            }
        }
    }
}
