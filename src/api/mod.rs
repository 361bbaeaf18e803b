//
//  apigee-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP clients for the Apigee Management REST API.
//!
//! ## Architecture
//!
//! - [`client`]: The shared HTTP helper. Every request in the crate goes through
//!   [`ApigeeClient::request`], which attaches the bearer token, serialises the
//!   payload and maps failures onto [`ApiError`].
//! - [`common`]: The error taxonomy and the [`common::Collection`] helper shared by
//!   the plain CRUD resources.
//! - [`management`]: One thin client per resource type (caches, KVMs, keystores,
//!   developers, developer apps, products, shared flows, users, user roles, proxies).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use apigee_client::api::ApigeeClient;
//!
//! # async fn example() -> Result<(), apigee_client::api::ApiError> {
//! let client = ApigeeClient::new("https://api.enterprise.apigee.com")?
//!     .with_token("your-token");
//!
//! let revisions = client.proxies().list_proxy_revisions("my-org", "orders").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every resource client fails the same way:
//!
//! - `Status`: the server answered with a non-2xx status; the message is lifted
//!   from the JSON body when present
//! - `Network`: the request never completed
//! - `Decode`: a successful response carried a body that is not JSON
//! - `InvalidBaseUrl`: the configured base URL could not be parsed

/// Shared HTTP helper for the Apigee Management API.
pub mod client;

/// Error taxonomy and helpers shared by all resource clients.
pub mod common;

/// Resource clients, one per Apigee resource type.
pub mod management;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ApigeeClient;
pub use common::ApiError;
