//
//  apigee-client
//  cli/app.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Developer app commands
//!
//! Every app operation has its own subcommand. The `action` subcommand runs
//! any of them by operation name instead, taking whichever flags that
//! operation needs.
//!
//! ## Examples
//!
//! ```bash
//! # Create an app
//! apigee-client app create-app --base-url ... --token ... --payload '{"name": "mobile"}'
//!
//! # Approve an API key
//! apigee-client app approve-api-key --base-url ... --token ... --app-id mobile --api-key-id k1
//!
//! # The same, by operation name
//! apigee-client app action approve_api_key --base-url ... --token ... --app-id mobile --api-key-id k1
//! ```

use std::fmt;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::Value;

use crate::api::management::DeveloperApps;

use super::{parse_payload, required, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs, UsageError};

/// Manage developer apps and their API keys
#[derive(Args, Debug)]
pub struct AppCommand {
    #[command(subcommand)]
    pub command: AppSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AppSubcommand {
    /// Perform an app operation by name
    #[command(visible_alias = "app-action")]
    Action(AppActionArgs),

    /// Add a new API key to an app
    AddApiKey(AddApiKeyArgs),

    /// Approve an API key
    ApproveApiKey(ApiKeyArgs),

    /// Create a new developer app
    CreateApp(CreateArgs),

    /// Delete a developer app
    DeleteApp(AppIdArgs),

    /// Fetch details of a specific developer app
    FetchAppDetails(AppIdArgs),

    /// List all developer apps
    ListApps(ListArgs),

    /// Revoke an API key
    RevokeApiKey(ApiKeyArgs),

    /// Update an existing developer app
    UpdateApp(UpdateAppArgs),
}

/// App operations reachable through `app action`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum AppAction {
    AddApiKey,
    ApproveApiKey,
    CreateApp,
    DeleteApp,
    FetchAppDetails,
    ListApps,
    RevokeApiKey,
    UpdateApp,
}

impl fmt::Display for AppAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

#[derive(Args, Debug)]
pub struct AppActionArgs {
    /// Operation to perform
    #[arg(value_enum)]
    pub action: AppAction,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Developer app ID (if applicable)
    #[arg(long)]
    pub app_id: Option<String>,

    /// API key ID (if applicable)
    #[arg(long)]
    pub api_key_id: Option<String>,

    /// Payload in JSON format (if applicable)
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Option<Value>,
}

#[derive(Args, Debug)]
pub struct AppIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Developer app ID
    #[arg(long)]
    pub app_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateAppArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Developer app ID to update
    #[arg(long)]
    pub app_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

#[derive(Args, Debug)]
pub struct AddApiKeyArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Developer app ID
    #[arg(long)]
    pub app_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

#[derive(Args, Debug)]
pub struct ApiKeyArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Developer app ID
    #[arg(long)]
    pub app_id: String,

    /// API key ID
    #[arg(long)]
    pub api_key_id: String,
}

impl AppActionArgs {
    fn app_id(&self) -> Result<&str, UsageError> {
        required(self.app_id.as_deref(), &self.action, "--app-id")
    }

    fn api_key_id(&self) -> Result<&str, UsageError> {
        required(self.api_key_id.as_deref(), &self.action, "--api-key-id")
    }

    fn payload(&self) -> Result<&Value, UsageError> {
        required(self.payload.as_ref(), &self.action, "--payload")
    }

    /// Runs the selected action. Missing flags are reported before any
    /// request is made.
    async fn execute(&self, apps: DeveloperApps<'_>) -> Result<Value> {
        let result = match self.action {
            AppAction::AddApiKey => apps.add_api_key(self.app_id()?, self.payload()?).await,
            AppAction::ApproveApiKey => {
                apps.approve_api_key(self.app_id()?, self.api_key_id()?)
                    .await
            }
            AppAction::CreateApp => apps.create_app(self.payload()?).await,
            AppAction::DeleteApp => apps.delete_app(self.app_id()?).await,
            AppAction::FetchAppDetails => apps.fetch_app_details(self.app_id()?).await,
            AppAction::ListApps => apps.list_apps().await,
            AppAction::RevokeApiKey => {
                apps.revoke_api_key(self.app_id()?, self.api_key_id()?)
                    .await
            }
            AppAction::UpdateApp => apps.update_app(self.app_id()?, self.payload()?).await,
        };

        result.with_context(|| format!("Failed to execute action '{}'", self.action))
    }
}

impl AppCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            AppSubcommand::Action(args) => {
                let client = args.connection.connect()?;
                args.execute(client.developer_apps()).await?
            }
            AppSubcommand::AddApiKey(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .add_api_key(&args.app_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to add API key to app '{}'", args.app_id))?
            }
            AppSubcommand::ApproveApiKey(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .approve_api_key(&args.app_id, &args.api_key_id)
                    .await
                    .with_context(|| format!("Failed to approve API key '{}'", args.api_key_id))?
            }
            AppSubcommand::CreateApp(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .create_app(&args.payload)
                    .await
                    .context("Failed to create app")?
            }
            AppSubcommand::DeleteApp(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .delete_app(&args.app_id)
                    .await
                    .with_context(|| format!("Failed to delete app '{}'", args.app_id))?
            }
            AppSubcommand::FetchAppDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .fetch_app_details(&args.app_id)
                    .await
                    .with_context(|| format!("Failed to fetch app '{}'", args.app_id))?
            }
            AppSubcommand::ListApps(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .list_apps()
                    .await
                    .context("Failed to list apps")?
            }
            AppSubcommand::RevokeApiKey(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .revoke_api_key(&args.app_id, &args.api_key_id)
                    .await
                    .with_context(|| format!("Failed to revoke API key '{}'", args.api_key_id))?
            }
            AppSubcommand::UpdateApp(args) => {
                let client = args.connection.connect()?;
                client
                    .developer_apps()
                    .update_app(&args.app_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update app '{}'", args.app_id))?
            }
        };

        global.writer().write(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApigeeClient;
    use crate::cli::Cli;
    use clap::Parser;

    fn action_args(argv: &[&str]) -> AppActionArgs {
        let mut full = vec!["apigee-client", "app", "action"];
        full.extend_from_slice(argv);
        full.extend_from_slice(&["--base-url", "http://127.0.0.1:9", "--token", "t"]);

        match Cli::try_parse_from(full).unwrap().command {
            crate::cli::Commands::App(AppCommand {
                command: AppSubcommand::Action(args),
            }) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_action_names_are_snake_case() {
        assert_eq!(AppAction::ApproveApiKey.to_string(), "approve_api_key");
        assert_eq!(
            AppAction::from_str("fetch_app_details", false).unwrap(),
            AppAction::FetchAppDetails
        );
        assert!(AppAction::from_str("invalid_action", false).is_err());
    }

    #[test]
    fn test_action_alias() {
        let cli = Cli::try_parse_from([
            "apigee-client",
            "app",
            "app-action",
            "list_apps",
            "--base-url",
            "https://api.example.com",
            "--token",
            "t",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            crate::cli::Commands::App(AppCommand {
                command: AppSubcommand::Action(AppActionArgs {
                    action: AppAction::ListApps,
                    ..
                })
            })
        ));
    }

    #[tokio::test]
    async fn test_missing_flag_is_usage_error() {
        let args = action_args(&["revoke_api_key", "--app-id", "app-1"]);
        let client = ApigeeClient::new("http://127.0.0.1:9").unwrap();

        let err = args.execute(client.developer_apps()).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<UsageError>(),
            Some(&UsageError::MissingFlag {
                action: "revoke_api_key".to_string(),
                flag: "--api-key-id",
            })
        );
    }
}
