//
//  apigee-client
//  api/management/products.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API product resources.
//!
//! These are the environment-level `/products` endpoints. Organisation-scoped
//! products attached to proxies are handled by
//! [`Proxies::create_api_product`](super::Proxies::create_api_product).

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// API products, rooted at `/products`.
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    collection: Collection<'a>,
}

impl<'a> Products<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/products"),
        }
    }

    /// Creates a new API product.
    pub async fn create_product(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    /// Deletes an API product by its ID.
    pub async fn delete_product(&self, product_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(product_id).await
    }

    /// Fetches details of a specific API product.
    pub async fn fetch_product_details(&self, product_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(product_id).await
    }

    /// Lists all API products.
    pub async fn list_products(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    /// Updates an existing API product.
    pub async fn update_product(
        &self,
        product_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.collection.update(product_id, payload).await
    }
}
