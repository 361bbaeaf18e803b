//
//  apigee-client
//  cli/user_roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User role commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage user roles
#[derive(Args, Debug)]
pub struct UserRolesCommand {
    #[command(subcommand)]
    pub command: UserRolesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserRolesSubcommand {
    /// Create a new user role
    CreateUserRole(CreateArgs),

    /// Delete a user role
    DeleteUserRole(RoleIdArgs),

    /// Fetch details of a specific user role
    FetchUserRoleDetails(RoleIdArgs),

    /// List all user roles
    ListUserRoles(ListArgs),

    /// Update an existing user role
    UpdateUserRole(UpdateUserRoleArgs),
}

#[derive(Args, Debug)]
pub struct RoleIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// User role ID
    #[arg(long)]
    pub role_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateUserRoleArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// User role ID to update
    #[arg(long)]
    pub role_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl UserRolesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            UserRolesSubcommand::CreateUserRole(args) => {
                let client = args.connection.connect()?;
                client
                    .user_roles()
                    .create_user_role(&args.payload)
                    .await
                    .context("Failed to create user role")?
            }
            UserRolesSubcommand::DeleteUserRole(args) => {
                let client = args.connection.connect()?;
                client
                    .user_roles()
                    .delete_user_role(&args.role_id)
                    .await
                    .with_context(|| format!("Failed to delete user role '{}'", args.role_id))?
            }
            UserRolesSubcommand::FetchUserRoleDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .user_roles()
                    .fetch_user_role_details(&args.role_id)
                    .await
                    .with_context(|| format!("Failed to fetch user role '{}'", args.role_id))?
            }
            UserRolesSubcommand::ListUserRoles(args) => {
                let client = args.connection.connect()?;
                client
                    .user_roles()
                    .list_user_roles()
                    .await
                    .context("Failed to list user roles")?
            }
            UserRolesSubcommand::UpdateUserRole(args) => {
                let client = args.connection.connect()?;
                client
                    .user_roles()
                    .update_user_role(&args.role_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update user role '{}'", args.role_id))?
            }
        };

        global.writer().write(&value)
    }
}
