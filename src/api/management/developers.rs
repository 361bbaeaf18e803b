//
//  apigee-client
//  api/management/developers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Developer resources.
//!
//! A developer is the account that owns developer apps. Apigee usually keys
//! developers by email address, which is inserted into the path as given.

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// Developers, rooted at `/developers`.
#[derive(Debug, Clone, Copy)]
pub struct Developers<'a> {
    collection: Collection<'a>,
}

impl<'a> Developers<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/developers"),
        }
    }

    /// Registers a new developer.
    pub async fn create_developer(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    /// Deletes a developer by ID.
    pub async fn delete_developer(&self, developer_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(developer_id).await
    }

    /// Fetches a developer by ID.
    pub async fn fetch_developer_details(&self, developer_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(developer_id).await
    }

    /// Lists all developers.
    pub async fn list_developers(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    /// Replaces a developer's profile with `payload`.
    pub async fn update_developer(
        &self,
        developer_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.collection.update(developer_id, payload).await
    }
}
