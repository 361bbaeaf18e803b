//
//  apigee-client
//  cli/shared_flows.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared flow commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage shared flows
#[derive(Args, Debug)]
pub struct SharedFlowsCommand {
    #[command(subcommand)]
    pub command: SharedFlowsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SharedFlowsSubcommand {
    /// Create a new shared flow
    CreateSharedFlow(CreateArgs),

    /// Delete a shared flow
    DeleteSharedFlow(SharedFlowIdArgs),

    /// Fetch details of a specific shared flow
    FetchSharedFlowDetails(SharedFlowIdArgs),

    /// List all shared flows
    ListSharedFlows(ListArgs),

    /// Update an existing shared flow
    UpdateSharedFlow(UpdateSharedFlowArgs),
}

#[derive(Args, Debug)]
pub struct SharedFlowIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Shared flow ID
    #[arg(long)]
    pub shared_flow_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateSharedFlowArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Shared flow ID to update
    #[arg(long)]
    pub shared_flow_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl SharedFlowsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            SharedFlowsSubcommand::CreateSharedFlow(args) => {
                let client = args.connection.connect()?;
                client
                    .shared_flows()
                    .create_shared_flow(&args.payload)
                    .await
                    .context("Failed to create shared flow")?
            }
            SharedFlowsSubcommand::DeleteSharedFlow(args) => {
                let client = args.connection.connect()?;
                client
                    .shared_flows()
                    .delete_shared_flow(&args.shared_flow_id)
                    .await
                    .with_context(|| {
                        format!("Failed to delete shared flow '{}'", args.shared_flow_id)
                    })?
            }
            SharedFlowsSubcommand::FetchSharedFlowDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .shared_flows()
                    .fetch_shared_flow_details(&args.shared_flow_id)
                    .await
                    .with_context(|| {
                        format!("Failed to fetch shared flow '{}'", args.shared_flow_id)
                    })?
            }
            SharedFlowsSubcommand::ListSharedFlows(args) => {
                let client = args.connection.connect()?;
                client
                    .shared_flows()
                    .list_shared_flows()
                    .await
                    .context("Failed to list shared flows")?
            }
            SharedFlowsSubcommand::UpdateSharedFlow(args) => {
                let client = args.connection.connect()?;
                client
                    .shared_flows()
                    .update_shared_flow(&args.shared_flow_id, &args.payload)
                    .await
                    .with_context(|| {
                        format!("Failed to update shared flow '{}'", args.shared_flow_id)
                    })?
            }
        };

        global.writer().write(&value)
    }
}
