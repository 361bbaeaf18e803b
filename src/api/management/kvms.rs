//
//  apigee-client
//  api/management/kvms.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Key-Value Map (KVM) resources.

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// Key-Value Maps, rooted at `/kvms`.
#[derive(Debug, Clone, Copy)]
pub struct Kvms<'a> {
    collection: Collection<'a>,
}

impl<'a> Kvms<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/kvms"),
        }
    }

    /// Creates a new Key-Value Map.
    pub async fn create_kvm(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    /// Deletes a Key-Value Map by its ID.
    pub async fn delete_kvm(&self, kvm_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(kvm_id).await
    }

    /// Fetches details of a specific Key-Value Map.
    pub async fn fetch_kvm_details(&self, kvm_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(kvm_id).await
    }

    /// Lists all Key-Value Maps.
    pub async fn list_kvms(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    /// Updates an existing Key-Value Map.
    pub async fn update_kvm(&self, kvm_id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.collection.update(kvm_id, payload).await
    }
}
