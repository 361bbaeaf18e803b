//
//  apigee-client
//  api/management/keystores.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Keystore resources.
//!
//! Keystores hold the TLS certificates and keys used by virtual hosts and
//! target endpoints.

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// Keystores, rooted at `/keystores`.
#[derive(Debug, Clone, Copy)]
pub struct Keystores<'a> {
    collection: Collection<'a>,
}

impl<'a> Keystores<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/keystores"),
        }
    }

    pub async fn create_keystore(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    pub async fn delete_keystore(&self, keystore_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(keystore_id).await
    }

    pub async fn fetch_keystore_details(&self, keystore_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(keystore_id).await
    }

    pub async fn list_keystores(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    pub async fn update_keystore(
        &self,
        keystore_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.collection.update(keystore_id, payload).await
    }
}
