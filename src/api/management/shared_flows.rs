//
//  apigee-client
//  api/management/shared_flows.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared flow resources.

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// Shared flows, rooted at `/shared-flows`.
#[derive(Debug, Clone, Copy)]
pub struct SharedFlows<'a> {
    collection: Collection<'a>,
}

impl<'a> SharedFlows<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            collection: Collection::new(client, "/shared-flows"),
        }
    }

    pub async fn create_shared_flow(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    pub async fn delete_shared_flow(&self, shared_flow_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(shared_flow_id).await
    }

    pub async fn fetch_shared_flow_details(
        &self,
        shared_flow_id: &str,
    ) -> Result<Value, ApiError> {
        self.collection.fetch(shared_flow_id).await
    }

    pub async fn list_shared_flows(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    pub async fn update_shared_flow(
        &self,
        shared_flow_id: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.collection.update(shared_flow_id, payload).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use crate::api::testing::{bearer, mock_client};

    #[tokio::test]
    async fn test_create_shared_flow() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("POST", "/shared-flows")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"name": "auth-flow"})))
            .with_status(201)
            .with_body(r#"{"sharedFlow": "created"}"#)
            .create_async()
            .await;

        let response = client
            .shared_flows()
            .create_shared_flow(&json!({"name": "auth-flow"}))
            .await
            .unwrap();

        assert_eq!(response["sharedFlow"], "created");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_shared_flow() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("DELETE", "/shared-flows/auth-flow")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"status": "deleted"}"#)
            .create_async()
            .await;

        let response = client
            .shared_flows()
            .delete_shared_flow("auth-flow")
            .await
            .unwrap();

        assert_eq!(response["status"], "deleted");
        mock.assert_async().await;
    }
}
