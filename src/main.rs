//! `license-scout` — license discovery and auditing for software dependencies.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Read credentials from the environment once ([`config::Credentials`]).
//! 3. Dispatch to one of the five stateless operations:
//!    - metadata lookup ([`sources::libraries_io`])
//!    - SPDX text retrieval ([`sources::spdx`])
//!    - direct file fetch ([`sources::raw_url`])
//!    - repository license search ([`sources::github`])
//!    - clause audit ([`audit`])
//! 4. Print the outcome; exit `1` only when `lookup --check-policy` finds a
//!    license outside the approved set.
//!
//! The operations are independent; chaining (e.g. fetching a license and
//! piping it into the auditor) is the caller's business.

mod audit;
mod capabilities;
mod cli;
mod config;
mod models;
mod sources;

use std::io::Read;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Command};
use config::{load_config, Credentials};
use models::{Coordinate, LookupOutcome};

/// Fixed per-request timeout for the three bounded operations.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("license_scout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let credentials = Credentials::from_env();

    // Bounded client for the lookup/fetch operations; the repository search
    // and the model call run without an explicit timeout.
    let bounded = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let unbounded = reqwest::Client::new();

    match cli.command {
        Command::Lookup {
            group,
            artifact,
            version,
            check_policy,
        } => {
            let coordinate = Coordinate {
                group,
                artifact,
                version,
            };
            let outcome = sources::libraries_io::fetch_license(
                &bounded,
                credentials.libraries_io_key.as_deref(),
                &coordinate,
            )
            .await?;

            if cli.quiet {
                println!("{}", outcome);
            } else {
                println!("{} {}", coordinate.to_string().bold(), outcome);
            }

            if check_policy {
                let policy = load_config(&std::env::current_dir()?, cli.config.as_deref())?;
                return check_against_policy(&policy, &outcome, cli.quiet);
            }
        }
        Command::SpdxText { license } => {
            let text = sources::spdx::fetch_text(&bounded, &license).await?;
            print!("{}", text);
        }
        Command::FetchUrl { url } => {
            let text = sources::raw_url::fetch(&bounded, &url).await;
            print!("{}", text);
        }
        Command::RepoSearch { package } => {
            let outcome = sources::github::search(
                &unbounded,
                credentials.github_token.as_deref(),
                &package,
            )
            .await;
            println!("{}", outcome);
        }
        Command::Audit { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let verdict =
                audit::analyze(&unbounded, credentials.gemini_key.as_deref(), &text).await;

            if cli.quiet {
                println!("{}", verdict);
            } else if verdict.is_clean() {
                println!("{} {}", "✓".green(), verdict);
            } else {
                println!("{}", verdict);
            }
        }
        Command::Capabilities => {
            println!("{}", serde_json::to_string_pretty(capabilities::CATALOG)?);
        }
    }

    Ok(())
}

/// Report whether the looked-up license is on the approved list; exits the
/// process with code 1 when it is not.
fn check_against_policy(
    policy: &config::Config,
    outcome: &LookupOutcome,
    quiet: bool,
) -> Result<()> {
    let approved = match outcome {
        LookupOutcome::Found(license) => policy.is_approved(license),
        _ => false,
    };

    if approved {
        if !quiet {
            println!("{} license is on the approved list", "✓".green());
        }
        Ok(())
    } else {
        if !quiet {
            println!("{} license is not on the approved list", "✗".red());
        }
        std::process::exit(1);
    }
}
