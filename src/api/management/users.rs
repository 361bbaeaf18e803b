//
//  apigee-client
//  api/management/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organisation user resources.

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// Users, rooted at `/users`.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    collection: Collection<'a>,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/users"),
        }
    }

    /// Creates a new user.
    pub async fn create_user(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    /// Deletes a user by ID.
    pub async fn delete_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(user_id).await
    }

    /// Fetches a user by ID.
    pub async fn fetch_user_details(&self, user_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(user_id).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    /// Updates an existing user.
    pub async fn update_user(&self, user_id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.collection.update(user_id, payload).await
    }
}
