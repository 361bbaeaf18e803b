//
//  apigee-client
//  api/common/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Flat CRUD collections.
//!
//! Most Apigee resources handled here (caches, KVMs, keystores, developers,
//! products, shared flows, users, user roles) live under one path segment and
//! answer the same five calls:
//!
//! | Call | Method | Path |
//! |------|--------|------|
//! | create | POST | `{collection}` |
//! | delete | DELETE | `{collection}/{id}` |
//! | fetch | GET | `{collection}/{id}` |
//! | list | GET | `{collection}` |
//! | update | PUT | `{collection}/{id}` |
//!
//! [`Collection`] implements them once; the resource clients only name the
//! path and give the calls their resource-specific names.

use serde_json::Value;

use super::ApiError;
use crate::api::client::ApigeeClient;

/// A CRUD collection rooted at a fixed path such as `/caches`.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    client: &'a ApigeeClient,
    path: &'static str,
}

impl<'a> Collection<'a> {
    /// Creates a collection for `path`, which must start with `/`.
    pub fn new(client: &'a ApigeeClient, path: &'static str) -> Self {
        Self { client, path }
    }

    /// The collection path, e.g. `/caches`.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Path of a single item. The id is inserted as given.
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }

    /// POSTs `payload` to the collection path.
    pub async fn create(&self, payload: &Value) -> Result<Value, ApiError> {
        self.client.post(self.path, payload).await
    }

    /// DELETEs one item.
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&self.item_path(id)).await
    }

    /// GETs one item.
    pub async fn fetch(&self, id: &str) -> Result<Value, ApiError> {
        self.client.get(&self.item_path(id)).await
    }

    /// GETs the whole collection.
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get(self.path).await
    }

    /// PUTs `payload` to one item, replacing it.
    pub async fn update(&self, id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.client.put(&self.item_path(id), payload).await
    }
}
