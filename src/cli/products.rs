//
//  apigee-client
//  cli/products.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API product commands
//!
//! These operate on the `/products` collection. Organisation-scoped products
//! are managed through `proxy create-api-product` and
//! `proxy update-api-product`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{parse_payload, ConnectionArgs, CreateArgs, GlobalOptions, ListArgs};

/// Manage API products
#[derive(Args, Debug)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductsSubcommand {
    /// Create a new API product
    CreateProduct(CreateArgs),

    /// Delete an API product
    DeleteProduct(ProductIdArgs),

    /// Fetch details of a specific API product
    FetchProductDetails(ProductIdArgs),

    /// List all API products
    ListProducts(ListArgs),

    /// Update an existing API product
    UpdateProduct(UpdateProductArgs),
}

#[derive(Args, Debug)]
pub struct ProductIdArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// API product ID
    #[arg(long)]
    pub product_id: String,
}

#[derive(Args, Debug)]
pub struct UpdateProductArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// API product ID to update
    #[arg(long)]
    pub product_id: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl ProductsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            ProductsSubcommand::CreateProduct(args) => {
                let client = args.connection.connect()?;
                client
                    .products()
                    .create_product(&args.payload)
                    .await
                    .context("Failed to create API product")?
            }
            ProductsSubcommand::DeleteProduct(args) => {
                let client = args.connection.connect()?;
                client
                    .products()
                    .delete_product(&args.product_id)
                    .await
                    .with_context(|| format!("Failed to delete API product '{}'", args.product_id))?
            }
            ProductsSubcommand::FetchProductDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .products()
                    .fetch_product_details(&args.product_id)
                    .await
                    .with_context(|| format!("Failed to fetch API product '{}'", args.product_id))?
            }
            ProductsSubcommand::ListProducts(args) => {
                let client = args.connection.connect()?;
                client
                    .products()
                    .list_products()
                    .await
                    .context("Failed to list API products")?
            }
            ProductsSubcommand::UpdateProduct(args) => {
                let client = args.connection.connect()?;
                client
                    .products()
                    .update_product(&args.product_id, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update API product '{}'", args.product_id))?
            }
        };

        global.writer().write(&value)
    }
}
