//
//  apigee-client
//  api/management/user_roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User role resources.

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// User roles, rooted at `/user-roles`.
#[derive(Debug, Clone, Copy)]
pub struct UserRoles<'a> {
    collection: Collection<'a>,
}

impl<'a> UserRoles<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/user-roles"),
        }
    }

    /// Creates a new user role.
    pub async fn create_user_role(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    /// Deletes a user role by ID.
    pub async fn delete_user_role(&self, role_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(role_id).await
    }

    /// Fetches a user role by ID.
    pub async fn fetch_user_role_details(&self, role_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(role_id).await
    }

    /// Lists all user roles.
    pub async fn list_user_roles(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    /// Updates an existing user role.
    pub async fn update_user_role(&self, role_id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.collection.update(role_id, payload).await
    }
}
