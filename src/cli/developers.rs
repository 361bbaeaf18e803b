//
//  apigee-client
//  cli/developers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Developer commands
//!
//! ```bash
//! apigee-client developers fetch-developer-details --base-url ... --token ... \
//!     --developer-id ada@example.com
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage developers
#[derive(Args, Debug)]
pub struct DevelopersCommand {
    #[command(subcommand)]
    pub command: DevelopersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DevelopersSubcommand {
    /// Register a new developer
    CreateDeveloper(CreateArgs),

    /// Delete a developer
    DeleteDeveloper(DeveloperIdArgs),

    /// Fetch details of a specific developer
    FetchDeveloperDetails(DeveloperIdArgs),

    /// List all developers
    ListDevelopers(ListArgs),

    /// Update an existing developer
    UpdateDeveloper(UpdateDeveloperArgs),
}

#[derive(Args, Debug)]
pub struct DeveloperIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Developer ID or email address
    #[arg(long)]
    pub developer_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateDeveloperArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Developer ID to update
    #[arg(long)]
    pub developer_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl DevelopersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            DevelopersSubcommand::CreateDeveloper(args) => {
                let client = args.connection.connect()?;
                client
                    .developers()
                    .create_developer(&args.payload)
                    .await
                    .context("Failed to create developer")?
            }
            DevelopersSubcommand::DeleteDeveloper(args) => {
                let client = args.connection.connect()?;
                client
                    .developers()
                    .delete_developer(&args.developer_id)
                    .await
                    .with_context(|| format!("Failed to delete developer '{}'", args.developer_id))?
            }
            DevelopersSubcommand::FetchDeveloperDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .developers()
                    .fetch_developer_details(&args.developer_id)
                    .await
                    .with_context(|| format!("Failed to fetch developer '{}'", args.developer_id))?
            }
            DevelopersSubcommand::ListDevelopers(args) => {
                let client = args.connection.connect()?;
                client
                    .developers()
                    .list_developers()
                    .await
                    .context("Failed to list developers")?
            }
            DevelopersSubcommand::UpdateDeveloper(args) => {
                let client = args.connection.connect()?;
                client
                    .developers()
                    .update_developer(&args.developer_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update developer '{}'", args.developer_id))?
            }
        };

        global.writer().write(&value)
    }
}
