//! Async HTTP clients for the license data sources, in fallback order.
//!
//! Each module exposes a single entry point taking a shared [`reqwest::Client`]
//! and the credential it needs (if any) as explicit parameters. The modules
//! are independent: no state flows between them beyond what a caller chains by
//! hand.

pub mod github;
pub mod libraries_io;
pub mod raw_url;
pub mod spdx;
