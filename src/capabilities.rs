//! Declared capability surface for external orchestrators.
//!
//! Each operation is an independently invocable tool with a name, a free-text
//! description, and a typed parameter/return contract. The orchestrator that
//! sequences these tools (e.g. piping a fetched license into the auditor) is
//! an external collaborator; only the declarations live here.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub returns: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// The full tool catalog, one entry per operation.
pub const CATALOG: &[ToolSpec] = &[
    ToolSpec {
        name: "libraries_io_license",
        description: "Look up a dependency license using the Libraries.io API",
        params: &[
            ParamSpec {
                name: "group",
                description: "Group ID of the Maven artifact (e.g. org.apache.commons)",
            },
            ParamSpec {
                name: "artifact",
                description: "Artifact ID of the Maven package (e.g. commons-lang3)",
            },
            ParamSpec {
                name: "version",
                description: "Version of the artifact to check (e.g. 3.12.0)",
            },
        ],
        returns: "Normalized license name (e.g. MIT, Apache-2.0), or Unknown if it \
                  cannot be determined",
    },
    ToolSpec {
        name: "lookup_license_text",
        description: "Retrieve the full text of a license from the SPDX license list",
        params: &[ParamSpec {
            name: "license",
            description: "SPDX identifier of the license (e.g. MIT, Apache-2.0)",
        }],
        returns: "Full license text, or empty string if not found",
    },
    ToolSpec {
        name: "fetch_repo_license",
        description: "Download the content of a LICENSE file from a direct URL",
        params: &[ParamSpec {
            name: "url",
            description: "Direct URL to the license file (e.g. a raw content URL)",
        }],
        returns: "Content of the license file, or empty string if download fails",
    },
    ToolSpec {
        name: "search_license_issues",
        description: "Search GitHub for a package and attempt to find its license, \
                      falling back from the license API to a license-file listing",
        params: &[ParamSpec {
            name: "package",
            description: "Name of the package to search for",
        }],
        returns: "Human-readable message: the found license, a list of candidate \
                  license files, or an error explanation",
    },
    ToolSpec {
        name: "analyze_license_text",
        description: "Audit license text with a language model and flag unusual or \
                      restrictive clauses",
        params: &[ParamSpec {
            name: "text",
            description: "Complete text of the license to analyze",
        }],
        returns: "'OK' for a standard permissive license, 'Unusual clause detected: \
                  <explanation>' otherwise, or an error message if analysis fails",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_five_operations() {
        let names: Vec<&str> = CATALOG.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "libraries_io_license",
                "lookup_license_text",
                "fetch_repo_license",
                "search_license_issues",
                "analyze_license_text",
            ]
        );
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_string(CATALOG).unwrap();
        assert!(json.contains("libraries_io_license"));
        assert!(json.contains("\"params\""));
    }
}
