//
//  apigee-client
//  cli/caches.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cache commands
//!
//! ## Examples
//!
//! ```bash
//! apigee-client caches list-caches --base-url https://api.example.com --token $TOKEN
//! apigee-client caches delete-cache --base-url ... --token ... --cache-id session
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage caches
#[derive(Args, Debug)]
pub struct CachesCommand {
    #[command(subcommand)]
    pub command: CachesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CachesSubcommand {
    /// Create a new cache
    CreateCache(CreateArgs),

    /// Delete a cache
    DeleteCache(CacheIdArgs),

    /// Fetch details of a specific cache
    FetchCacheDetails(CacheIdArgs),

    /// List all caches
    ListCaches(ListArgs),

    /// Update an existing cache
    UpdateCache(UpdateCacheArgs),
}

#[derive(Args, Debug)]
pub struct CacheIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Cache ID
    #[arg(long)]
    pub cache_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateCacheArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Cache ID to update
    #[arg(long)]
    pub cache_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl CachesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            CachesSubcommand::CreateCache(args) => {
                let client = args.connection.connect()?;
                client
                    .caches()
                    .create_cache(&args.payload)
                    .await
                    .context("Failed to create cache")?
            }
            CachesSubcommand::DeleteCache(args) => {
                let client = args.connection.connect()?;
                client
                    .caches()
                    .delete_cache(&args.cache_id)
                    .await
                    .with_context(|| format!("Failed to delete cache '{}'", args.cache_id))?
            }
            CachesSubcommand::FetchCacheDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .caches()
                    .fetch_cache_details(&args.cache_id)
                    .await
                    .with_context(|| format!("Failed to fetch cache '{}'", args.cache_id))?
            }
            CachesSubcommand::ListCaches(args) => {
                let client = args.connection.connect()?;
                client
                    .caches()
                    .list_caches()
                    .await
                    .context("Failed to list caches")?
            }
            CachesSubcommand::UpdateCache(args) => {
                let client = args.connection.connect()?;
                client
                    .caches()
                    .update_cache(&args.cache_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update cache '{}'", args.cache_id))?
            }
        };

        global.writer().write(&value)
    }
}
