//
//  apigee-client
//  cli/kvm.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Key-value map commands
//!
//! ## Examples
//!
//! ```bash
//! # List KVMs
//! apigee-client kvm list-kvms --base-url https://api.example.com --token $TOKEN
//!
//! # Create a KVM
//! apigee-client kvm create-kvm --base-url ... --token ... --payload '{"name": "settings"}'
//!
//! # Update a KVM
//! apigee-client kvm update-kvm --base-url ... --token ... --kvm-id settings --payload '{...}'
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage key-value maps (KVMs)
#[derive(Args, Debug)]
pub struct KvmCommand {
    #[command(subcommand)]
    pub command: KvmSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum KvmSubcommand {
    /// Create a new Key-Value Map (KVM)
    CreateKvm(CreateArgs),

    /// Delete a KVM
    DeleteKvm(KvmIdArgs),

    /// Fetch details of a specific KVM
    FetchKvmDetails(KvmIdArgs),

    /// List all KVMs
    ListKvms(ListArgs),

    /// Update an existing KVM
    UpdateKvm(UpdateKvmArgs),
}

#[derive(Args, Debug)]
pub struct KvmIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// KVM ID
    #[arg(long)]
    pub kvm_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateKvmArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// KVM ID to update
    #[arg(long)]
    pub kvm_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl KvmCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            KvmSubcommand::CreateKvm(args) => {
                let client = args.connection.connect()?;
                client
                    .kvms()
                    .create_kvm(&args.payload)
                    .await
                    .context("Failed to create KVM")?
            }
            KvmSubcommand::DeleteKvm(args) => {
                let client = args.connection.connect()?;
                client
                    .kvms()
                    .delete_kvm(&args.kvm_id)
                    .await
                    .with_context(|| format!("Failed to delete KVM '{}'", args.kvm_id))?
            }
            KvmSubcommand::FetchKvmDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .kvms()
                    .fetch_kvm_details(&args.kvm_id)
                    .await
                    .with_context(|| format!("Failed to fetch KVM '{}'", args.kvm_id))?
            }
            KvmSubcommand::ListKvms(args) => {
                let client = args.connection.connect()?;
                client
                    .kvms()
                    .list_kvms()
                    .await
                    .context("Failed to list KVMs")?
            }
            KvmSubcommand::UpdateKvm(args) => {
                let client = args.connection.connect()?;
                client
                    .kvms()
                    .update_kvm(&args.kvm_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update KVM '{}'", args.kvm_id))?
            }
        };

        global.writer().write(&value)
    }
}
