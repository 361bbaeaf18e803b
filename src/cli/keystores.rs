//
//  apigee-client
//  cli/keystores.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Keystore commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage keystores
#[derive(Args, Debug)]
pub struct KeystoresCommand {
    #[command(subcommand)]
    pub command: KeystoresSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum KeystoresSubcommand {
    /// Create a new keystore
    CreateKeystore(CreateArgs),

    /// Delete a keystore
    DeleteKeystore(KeystoreIdArgs),

    /// Fetch details of a specific keystore
    FetchKeystoreDetails(KeystoreIdArgs),

    /// List all keystores
    ListKeystores(ListArgs),

    /// Update an existing keystore
    UpdateKeystore(UpdateKeystoreArgs),
}

#[derive(Args, Debug)]
pub struct KeystoreIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Keystore ID
    #[arg(long)]
    pub keystore_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateKeystoreArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Keystore ID to update
    #[arg(long)]
    pub keystore_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl KeystoresCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            KeystoresSubcommand::CreateKeystore(args) => {
                let client = args.connection.connect()?;
                client
                    .keystores()
                    .create_keystore(&args.payload)
                    .await
                    .context("Failed to create keystore")?
            }
            KeystoresSubcommand::DeleteKeystore(args) => {
                let client = args.connection.connect()?;
                client
                    .keystores()
                    .delete_keystore(&args.keystore_id)
                    .await
                    .with_context(|| format!("Failed to delete keystore '{}'", args.keystore_id))?
            }
            KeystoresSubcommand::FetchKeystoreDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .keystores()
                    .fetch_keystore_details(&args.keystore_id)
                    .await
                    .with_context(|| format!("Failed to fetch keystore '{}'", args.keystore_id))?
            }
            KeystoresSubcommand::ListKeystores(args) => {
                let client = args.connection.connect()?;
                client
                    .keystores()
                    .list_keystores()
                    .await
                    .context("Failed to list keystores")?
            }
            KeystoresSubcommand::UpdateKeystore(args) => {
                let client = args.connection.connect()?;
                client
                    .keystores()
                    .update_keystore(&args.keystore_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update keystore '{}'", args.keystore_id))?
            }
        };

        global.writer().write(&value)
    }
}
