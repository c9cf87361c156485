use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "license-scout",
    about = "Discover and audit dependency licenses via registry, SPDX and repository fallbacks",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Policy config file [default: ./.license-scout/config.toml, fallback ~/.config/license-scout/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only print the result, no decoration
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a Maven artifact's declared license via Libraries.io
    Lookup {
        /// Group ID (e.g. org.apache.commons)
        group: String,
        /// Artifact ID (e.g. commons-lang3)
        artifact: String,
        /// Version (e.g. 3.12.0)
        version: String,
        /// Check the result against the approved-license policy; exit 1 if
        /// the license is not on the list
        #[arg(long)]
        check_policy: bool,
    },
    /// Fetch canonical license text from the SPDX license list
    SpdxText {
        /// SPDX identifier (e.g. MIT, Apache-2.0)
        license: String,
    },
    /// Download raw license text from a direct URL
    FetchUrl {
        /// Direct URL to the license file
        url: String,
    },
    /// Search GitHub for a package and try to identify its license
    RepoSearch {
        /// Package name to search for
        package: String,
    },
    /// Audit license text for unusual clauses with a language model
    Audit {
        /// File containing the license text; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the tool catalog for external orchestrators as JSON
    Capabilities,
}
