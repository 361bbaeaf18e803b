//
//  apigee-client
//  api/management/caches.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cache resources.
//!
//! Caches back the ResponseCache and PopulateCache policies of an
//! environment. The cache document is passed through untouched:
//!
//! ```json
//! {"name": "session-cache", "expirySettings": {"timeoutInSec": {"value": "300"}}}
//! ```

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// Caches, rooted at `/caches`.
#[derive(Debug, Clone, Copy)]
pub struct Caches<'a> {
    collection: Collection<'a>,
}

impl<'a> Caches<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/caches"),
        }
    }

    /// Creates a new cache.
    ///
    /// Issues `POST /caches` with `payload` as the JSON body.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use apigee_client::api::ApigeeClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), apigee_client::api::ApiError> {
    /// let client = ApigeeClient::new("https://api.enterprise.apigee.com")?.with_token("token");
    /// let cache = client.caches().create_cache(&json!({"name": "session-cache"})).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_cache(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    /// Deletes a cache by its ID.
    pub async fn delete_cache(&self, cache_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(cache_id).await
    }

    /// Fetches details of a specific cache.
    pub async fn fetch_cache_details(&self, cache_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(cache_id).await
    }

    /// Lists all caches.
    pub async fn list_caches(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    /// Replaces an existing cache with `payload`.
    pub async fn update_cache(&self, cache_id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.collection.update(cache_id, payload).await
    }
}
