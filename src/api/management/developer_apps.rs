//
//  apigee-client
//  api/management/developer_apps.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Developer app resources.
//!
//! Apps are plain CRUD resources under `/apps`, with an extra layer of API
//! keys beneath each app:
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | add key | POST | `/apps/{app_id}/api-keys` |
//! | approve key | POST | `/apps/{app_id}/api-keys/{key_id}/approve` |
//! | revoke key | POST | `/apps/{app_id}/api-keys/{key_id}/revoke` |
//!
//! Approval and revocation carry no request body.

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::{ApiError, Collection};

/// Developer apps and their API keys, rooted at `/apps`.
#[derive(Debug, Clone, Copy)]
pub struct DeveloperApps<'a> {
    client: &'a ApigeeClient,
    collection: Collection<'a>,
}

impl<'a> DeveloperApps<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self {
            client,
            collection: Collection::new(client, "/apps"),
        }
    }

    fn key_path(&self, app_id: &str, key_id: &str, transition: &str) -> String {
        format!(
            "{}/api-keys/{}/{}",
            self.collection.item_path(app_id),
            key_id,
            transition
        )
    }

    /// Adds a new API key to an app.
    pub async fn add_api_key(&self, app_id: &str, payload: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/api-keys", self.collection.item_path(app_id));
        self.client.post(&path, payload).await
    }

    /// Approves an API key.
    pub async fn approve_api_key(&self, app_id: &str, key_id: &str) -> Result<Value, ApiError> {
        self.client
            .post_empty(&self.key_path(app_id, key_id, "approve"))
            .await
    }

    /// Creates a new developer app.
    pub async fn create_app(&self, payload: &Value) -> Result<Value, ApiError> {
        self.collection.create(payload).await
    }

    /// Deletes a developer app.
    pub async fn delete_app(&self, app_id: &str) -> Result<Value, ApiError> {
        self.collection.delete(app_id).await
    }

    /// Fetches details of a specific developer app.
    pub async fn fetch_app_details(&self, app_id: &str) -> Result<Value, ApiError> {
        self.collection.fetch(app_id).await
    }

    /// Lists all developer apps.
    pub async fn list_apps(&self) -> Result<Value, ApiError> {
        self.collection.list().await
    }

    /// Revokes an API key.
    pub async fn revoke_api_key(&self, app_id: &str, key_id: &str) -> Result<Value, ApiError> {
        self.client
            .post_empty(&self.key_path(app_id, key_id, "revoke"))
            .await
    }

    /// Updates an existing developer app.
    pub async fn update_app(&self, app_id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.collection.update(app_id, payload).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::api::testing::{bearer, mock_client};

    #[tokio::test]
    async fn test_create_app() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("POST", "/apps")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"name": "test-app"})))
            .with_status(201)
            .with_body(r#"{"app": "created"}"#)
            .create_async()
            .await;

        let response = client
            .developer_apps()
            .create_app(&json!({"name": "test-app"}))
            .await
            .unwrap();

        assert_eq!(response["app"], "created");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_api_key() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("POST", "/apps/app-1/api-keys")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"apiProducts": ["gold"]})))
            .with_status(201)
            .with_body(r#"{"consumerKey": "k-123"}"#)
            .create_async()
            .await;

        let response = client
            .developer_apps()
            .add_api_key("app-1", &json!({"apiProducts": ["gold"]}))
            .await
            .unwrap();

        assert_eq!(response["consumerKey"], "k-123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_approve_and_revoke_send_no_body() {
        let (mut server, client) = mock_client().await;
        let approve = server
            .mock("POST", "/apps/app-1/api-keys/k-123/approve")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", Matcher::Missing)
            .match_body("")
            .with_status(200)
            .with_body(r#"{"status": "approved"}"#)
            .create_async()
            .await;
        let revoke = server
            .mock("POST", "/apps/app-1/api-keys/k-123/revoke")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", Matcher::Missing)
            .match_body("")
            .with_status(200)
            .with_body(r#"{"status": "revoked"}"#)
            .create_async()
            .await;

        let apps = client.developer_apps();
        let approved = apps.approve_api_key("app-1", "k-123").await.unwrap();
        let revoked = apps.revoke_api_key("app-1", "k-123").await.unwrap();

        assert_eq!(approved["status"], "approved");
        assert_eq!(revoked["status"], "revoked");
        approve.assert_async().await;
        revoke.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_app() {
        let (mut server, client) = mock_client().await;
        let payload = json!({
            "name": "mobile",
            "callbackUrl": "https://example.com/cb",
            "attributes": [{"name": "tier", "value": "gold"}]
        });
        let mock = server
            .mock("PUT", "/apps/app-1")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(payload.clone()))
            .with_status(200)
            .with_body(payload.to_string())
            .create_async()
            .await;

        let response = client
            .developer_apps()
            .update_app("app-1", &payload)
            .await
            .unwrap();

        assert_eq!(response, payload);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_and_delete_apps() {
        let (mut server, client) = mock_client().await;
        let list = server
            .mock("GET", "/apps")
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_body(r#"["app-1", "app-2"]"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/apps/app-1")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"status": "deleted"}"#)
            .create_async()
            .await;

        let apps = client.developer_apps();
        let listed = apps.list_apps().await.unwrap();
        let deleted = apps.delete_app("app-1").await.unwrap();

        assert_eq!(listed, json!(["app-1", "app-2"]));
        assert_eq!(deleted["status"], "deleted");
        list.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_missing_app_reports_message() {
        let (mut server, client) = mock_client().await;
        server
            .mock("GET", "/apps/nope")
            .with_status(404)
            .with_body(r#"{"message": "not found"}"#)
            .create_async()
            .await;

        let err = client
            .developer_apps()
            .fetch_app_details("nope")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "404 Not Found: not found");
    }
}
