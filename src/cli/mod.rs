//
//  apigee-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros
//!
//! Every resource command is self-contained: it takes `--base-url` and
//! `--token`, builds a fresh [`ApigeeClient`], issues one request and prints
//! the JSON it got back.

mod app;
mod caches;
mod completion;
mod developers;
mod keystores;
mod kvm;
mod products;
mod proxy;
mod shared_flows;
mod user_roles;
mod users;

pub use app::{AppAction, AppCommand};
pub use caches::CachesCommand;
pub use completion::CompletionCommand;
pub use developers::DevelopersCommand;
pub use keystores::KeystoresCommand;
pub use kvm::KvmCommand;
pub use products::ProductsCommand;
pub use proxy::{ProxyAction, ProxyCommand};
pub use shared_flows::SharedFlowsCommand;
pub use user_roles::UserRolesCommand;
pub use users::UsersCommand;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use thiserror::Error;

use crate::api::ApigeeClient;
use crate::exit_codes;
use crate::output::{OutputFormat, OutputWriter};

/// Apigee client - Manage Apigee from the command line
#[derive(Parser, Debug)]
#[command(
    name = "apigee-client",
    version,
    about = "Work with the Apigee Management API from the command line",
    long_about = "apigee-client wraps the Apigee Management API.\n\n\
                  It manages proxies, developer apps, key-value maps, caches and more, \
                  printing the JSON the API returns.",
    propagate_version = true,
    after_help = "Use 'apigee-client <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Print JSON on a single line instead of pretty-printing it
    #[arg(long, global = true)]
    pub compact: bool,
}

impl GlobalOptions {
    /// Output writer matching the global flags.
    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_compact(self.compact))
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage API proxies, revisions and deployments
    Proxy(ProxyCommand),

    /// Manage developer apps and their API keys
    App(AppCommand),

    /// Manage key-value maps (KVMs)
    Kvm(KvmCommand),

    /// Manage developers
    Developers(DevelopersCommand),

    /// Manage users
    Users(UsersCommand),

    /// Manage user roles
    UserRoles(UserRolesCommand),

    /// Manage keystores
    Keystores(KeystoresCommand),

    /// Manage caches
    Caches(CachesCommand),

    /// Manage API products
    Products(ProductsCommand),

    /// Manage shared flows
    SharedFlows(SharedFlowsCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),
}

impl Commands {
    /// Runs the selected command.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match self {
            Commands::Proxy(cmd) => cmd.run(global).await,
            Commands::App(cmd) => cmd.run(global).await,
            Commands::Kvm(cmd) => cmd.run(global).await,
            Commands::Developers(cmd) => cmd.run(global).await,
            Commands::Users(cmd) => cmd.run(global).await,
            Commands::UserRoles(cmd) => cmd.run(global).await,
            Commands::Keystores(cmd) => cmd.run(global).await,
            Commands::Caches(cmd) => cmd.run(global).await,
            Commands::Products(cmd) => cmd.run(global).await,
            Commands::SharedFlows(cmd) => cmd.run(global).await,
            Commands::Completion(cmd) => cmd.run(global),
        }
    }
}

/// Connection flags shared by every resource command.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base URL of the Apigee Management API
    #[arg(long, value_name = "URL")]
    pub base_url: String,

    /// Authentication token for the API
    #[arg(long, value_name = "TOKEN", value_parser = NonEmptyStringValueParser::new())]
    pub token: String,
}

impl ConnectionArgs {
    /// Builds a client for these connection settings.
    pub fn connect(&self) -> Result<ApigeeClient> {
        let client = ApigeeClient::new(&self.base_url)
            .context("Failed to create API client")?
            .with_token(&self.token);
        Ok(client)
    }
}

/// Arguments for commands that only need a connection.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Arguments for commands that create a resource from a payload.
#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

/// Parses a `--payload` value as JSON.
///
/// Used as a clap value parser, so malformed JSON is reported like any other
/// invalid argument.
pub fn parse_payload(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {}", e))
}

/// Errors in how a command was invoked that clap cannot catch on its own.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// An action was chosen but a flag it needs was not given.
    #[error("action '{action}' requires {flag}")]
    MissingFlag {
        action: String,
        flag: &'static str,
    },
}

/// Returns the value of an optional action flag, or a [`UsageError`] naming it.
pub(crate) fn required<'a, T: ?Sized>(
    value: Option<&'a T>,
    action: &impl std::fmt::Display,
    flag: &'static str,
) -> Result<&'a T, UsageError> {
    value.ok_or_else(|| UsageError::MissingFlag {
        action: action.to_string(),
        flag,
    })
}

/// Returns the offending name when `err` reports an unknown subcommand.
pub fn unknown_command(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::InvalidSubcommand {
        return None;
    }

    match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(name)) => Some(name.clone()),
        _ => None,
    }
}

/// Maps a command failure onto a process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    let usage = err
        .chain()
        .any(|cause| cause.downcast_ref::<UsageError>().is_some());

    if usage {
        exit_codes::USAGE
    } else {
        exit_codes::ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(
            parse_payload(r#"{"name": "new-kvm"}"#).unwrap(),
            json!({"name": "new-kvm"})
        );
        assert!(parse_payload("{not json").unwrap_err().starts_with("invalid JSON"));
    }

    #[test]
    fn test_unknown_command_in_group() {
        let err = Cli::try_parse_from([
            "apigee-client",
            "kvm",
            "invalid_action",
            "--base-url",
            "https://api.example.com",
            "--token",
            "test-token",
        ])
        .unwrap_err();

        assert_eq!(unknown_command(&err), Some("invalid_action".to_string()));
    }

    #[test]
    fn test_unknown_command_ignores_other_errors() {
        let err = Cli::try_parse_from(["apigee-client", "kvm", "list-kvms"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(unknown_command(&err), None);
    }

    #[test]
    fn test_malformed_payload_is_rejected_while_parsing() {
        let err = Cli::try_parse_from([
            "apigee-client",
            "caches",
            "create-cache",
            "--base-url",
            "https://api.example.com",
            "--token",
            "test-token",
            "--payload",
            "{oops",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), exit_codes::USAGE);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let err = Cli::try_parse_from([
            "apigee-client",
            "users",
            "list-users",
            "--base-url",
            "https://api.example.com",
            "--token",
            "",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_exit_code_for_usage_error() {
        let err = anyhow::Error::new(UsageError::MissingFlag {
            action: "list_apis".to_string(),
            flag: "--org",
        })
        .context("Failed to run action");

        assert_eq!(exit_code_for(&err), exit_codes::USAGE);
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), exit_codes::ERROR);
    }

    #[test]
    fn test_compact_flag_is_global() {
        let cli = Cli::try_parse_from([
            "apigee-client",
            "kvm",
            "list-kvms",
            "--base-url",
            "https://api.example.com",
            "--token",
            "test-token",
            "--compact",
        ])
        .unwrap();

        assert!(cli.global.compact);
        assert_eq!(cli.global.writer().format(), OutputFormat::Compact);
    }
}
