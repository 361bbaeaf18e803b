//
//  apigee-client
//  api/management/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Apigee Management API resources.
//!
//! Each submodule is a thin client for one resource type. They borrow the
//! shared [`ApigeeClient`] and only decide which path and method a call maps
//! to; entities travel as opaque [`serde_json::Value`] documents.
//!
//! # Module Organization
//!
//! - [`caches`] - `/caches`
//! - [`kvms`] - `/kvms`
//! - [`keystores`] - `/keystores`
//! - [`developers`] - `/developers`
//! - [`developer_apps`] - `/apps` and their API keys
//! - [`products`] - `/products`
//! - [`shared_flows`] - `/shared-flows`
//! - [`users`] - `/users`
//! - [`user_roles`] - `/user-roles`
//! - [`proxies`] - `/v1/organizations/{org}/...` proxies, revisions and deployments
//!
//! # Example
//!
//! ```rust,no_run
//! use apigee_client::api::ApigeeClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), apigee_client::api::ApiError> {
//! let client = ApigeeClient::new("https://api.enterprise.apigee.com")?.with_token("token");
//!
//! client.kvms().create_kvm(&json!({"name": "settings"})).await?;
//! client.developer_apps().approve_api_key("app-1", "key-1").await?;
//! client.proxies().deploy_proxy_revision("my-org", "test", "orders", "3").await?;
//! # Ok(())
//! # }
//! ```

pub mod caches;
pub mod developer_apps;
pub mod developers;
pub mod keystores;
pub mod kvms;
pub mod products;
pub mod proxies;
pub mod shared_flows;
pub mod user_roles;
pub mod users;

pub use caches::Caches;
pub use developer_apps::DeveloperApps;
pub use developers::Developers;
pub use keystores::Keystores;
pub use kvms::Kvms;
pub use products::Products;
pub use proxies::Proxies;
pub use shared_flows::SharedFlows;
pub use user_roles::UserRoles;
pub use users::Users;

use super::client::ApigeeClient;

impl ApigeeClient {
    /// Cache operations.
    pub fn caches(&self) -> Caches<'_> {
        Caches::new(self)
    }

    /// Key-Value Map operations.
    pub fn kvms(&self) -> Kvms<'_> {
        Kvms::new(self)
    }

    /// Keystore operations.
    pub fn keystores(&self) -> Keystores<'_> {
        Keystores::new(self)
    }

    /// Developer operations.
    pub fn developers(&self) -> Developers<'_> {
        Developers::new(self)
    }

    /// Developer app and API key operations.
    pub fn developer_apps(&self) -> DeveloperApps<'_> {
        DeveloperApps::new(self)
    }

    /// API product operations.
    pub fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Shared flow operations.
    pub fn shared_flows(&self) -> SharedFlows<'_> {
        SharedFlows::new(self)
    }

    /// User operations.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// User role operations.
    pub fn user_roles(&self) -> UserRoles<'_> {
        UserRoles::new(self)
    }

    /// API proxy, revision and deployment operations.
    pub fn proxies(&self) -> Proxies<'_> {
        Proxies::new(self)
    }
}
