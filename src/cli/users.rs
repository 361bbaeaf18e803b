//
//  apigee-client
//  cli/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User management commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage users
#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// Create a new user
    CreateUser(CreateArgs),

    /// Delete a user
    DeleteUser(UserIdArgs),

    /// Fetch details of a specific user
    FetchUserDetails(UserIdArgs),

    /// List all users
    ListUsers(ListArgs),

    /// Update an existing user
    UpdateUser(UpdateUserArgs),
}

#[derive(Args, Debug)]
pub struct UserIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// User ID
    #[arg(long)]
    pub user_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateUserArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// User ID to update
    #[arg(long)]
    pub user_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl UsersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            UsersSubcommand::CreateUser(args) => {
                let client = args.connection.connect()?;
                client
                    .users()
                    .create_user(&args.payload)
                    .await
                    .context("Failed to create user")?
            }
            UsersSubcommand::DeleteUser(args) => {
                let client = args.connection.connect()?;
                client
                    .users()
                    .delete_user(&args.user_id)
                    .await
                    .with_context(|| format!("Failed to delete user '{}'", args.user_id))?
            }
            UsersSubcommand::FetchUserDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .users()
                    .fetch_user_details(&args.user_id)
                    .await
                    .with_context(|| format!("Failed to fetch user '{}'", args.user_id))?
            }
            UsersSubcommand::ListUsers(args) => {
                let client = args.connection.connect()?;
                client
                    .users()
                    .list_users()
                    .await
                    .context("Failed to list users")?
            }
            UsersSubcommand::UpdateUser(args) => {
                let client = args.connection.connect()?;
                client
                    .users()
                    .update_user(&args.user_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update user '{}'", args.user_id))?
            }
        };

        global.writer().write(&value)
    }
}
