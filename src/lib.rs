//
//  apigee-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Apigee Client Library
//!
//! Thin HTTP clients for the Apigee Management API and the command-line
//! dispatcher that drives them.
//!
//! ## Overview
//!
//! Every operation is a single request: a path is built from the caller's
//! identifiers, the bearer token is attached, an optional JSON payload is
//! sent verbatim, and the decoded JSON response is handed back unchanged.
//! Nothing is cached, retried or paginated.
//!
//! ## Module Structure
//!
//! - [`api`]: The shared HTTP helper, the error taxonomy and one client per resource
//! - [`cli`]: Command-line definitions using clap
//! - [`output`]: JSON output for command results
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use apigee_client::api::ApigeeClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), apigee_client::api::ApiError> {
//! let client = ApigeeClient::new("https://api.enterprise.apigee.com")?
//!     .with_token("my-token");
//!
//! let cache = client.caches().create_cache(&json!({"name": "session"})).await?;
//! println!("{cache}");
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// One command group per Apigee resource, each mapping its subcommands onto
/// the matching resource client operation.
pub mod cli;

/// API client implementations for the Apigee Management API.
pub mod api;

/// Output formatting for command results.
pub mod output;

pub use cli::Cli;

/// Application name constant.
///
/// Used for the binary name, completion scripts and the User-Agent header.
pub const APP_NAME: &str = "apigee-client";

/// Application version constant, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Example
///
/// ```rust,no_run
/// use apigee_client::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::USAGE);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// The request failed or the response could not be processed.
    ///
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// Unknown commands, unknown actions, malformed payloads and missing
    /// flags all end here.
    pub const USAGE: i32 = 2;
}
