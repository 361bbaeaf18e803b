//
//  apigee-client
//  api/management/proxies.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Proxy Lifecycle
//!
//! Proxy operations live under the organisation tree of the classic
//! management API, `/v1/organizations/{org}`. This covers:
//!
//! - Proxies and their revisions
//! - Deployments per environment
//! - Policies of a revision
//! - Debug sessions and traffic stats
//! - Organisation-scoped API products
//!
//! ## Example
//!
//! ```rust,no_run
//! use apigee_client::api::ApigeeClient;
//!
//! # async fn example() -> Result<(), apigee_client::api::ApiError> {
//! let client = ApigeeClient::new("https://api.enterprise.apigee.com")?
//!     .with_token("token");
//!
//! let proxies = client.proxies();
//! let revisions = proxies.list_proxy_revisions("acme", "orders").await?;
//! proxies.deploy_proxy_revision("acme", "test", "orders", "3").await?;
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::api::client::ApigeeClient;
use crate::api::common::ApiError;

/// Environment that [`Proxies::promote_revision_to_production`] deploys to.
pub const PRODUCTION_ENV: &str = "prod";

fn org_path(org: &str) -> String {
    format!("/v1/organizations/{}", org)
}

fn api_path(org: &str, api: &str) -> String {
    format!("{}/apis/{}", org_path(org), api)
}

fn revision_path(org: &str, api: &str, revision: &str) -> String {
    format!("{}/revisions/{}", api_path(org, api), revision)
}

fn env_api_path(org: &str, env: &str, api: &str) -> String {
    format!("{}/environments/{}/apis/{}", org_path(org), env, api)
}

fn deployment_path(org: &str, env: &str, api: &str, revision: &str) -> String {
    format!(
        "{}/revisions/{}/deployments",
        env_api_path(org, env, api),
        revision
    )
}

/// API proxies, revisions and deployments.
#[derive(Debug, Clone, Copy)]
pub struct Proxies<'a> {
    client: &'a ApigeeClient,
}

impl<'a> Proxies<'a> {
    pub(crate) fn new(client: &'a ApigeeClient) -> Self {
        Self { client }
    }

    /// Creates a new API proxy in `org`.
    pub async fn create_api_proxy(&self, org: &str, payload: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/apis", org_path(org));
        self.client.post(&path, payload).await
    }

    /// Uploads a new revision of an existing proxy.
    pub async fn upload_proxy_revision(
        &self,
        org: &str,
        api: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        let path = format!("{}/revisions", api_path(org, api));
        self.client.post(&path, payload).await
    }

    pub async fn list_proxy_revisions(&self, org: &str, api: &str) -> Result<Value, ApiError> {
        let path = format!("{}/revisions", api_path(org, api));
        self.client.get(&path).await
    }

    /// Deploys a revision to an environment.
    pub async fn deploy_proxy_revision(
        &self,
        org: &str,
        env: &str,
        api: &str,
        revision: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .post_empty(&deployment_path(org, env, api, revision))
            .await
    }

    /// Gets the deployment status of a proxy in an environment.
    pub async fn get_deployment_status(
        &self,
        org: &str,
        env: &str,
        api: &str,
    ) -> Result<Value, ApiError> {
        let path = format!("{}/deployments", env_api_path(org, env, api));
        self.client.get(&path).await
    }

    /// Undeploys a revision from an environment.
    pub async fn delete_deployment(
        &self,
        org: &str,
        env: &str,
        api: &str,
        revision: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .delete(&deployment_path(org, env, api, revision))
            .await
    }

    /// Replaces the policies of a revision.
    pub async fn update_proxy_policies(
        &self,
        org: &str,
        api: &str,
        revision: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        let path = format!("{}/policies", revision_path(org, api, revision));
        self.client.put(&path, payload).await
    }

    pub async fn get_proxy_revision_details(
        &self,
        org: &str,
        api: &str,
        revision: &str,
    ) -> Result<Value, ApiError> {
        self.client.get(&revision_path(org, api, revision)).await
    }

    /// Lists every API proxy in `org`.
    pub async fn list_apis(&self, org: &str) -> Result<Value, ApiError> {
        let path = format!("{}/apis", org_path(org));
        self.client.get(&path).await
    }

    /// Deletes a proxy along with all its revisions.
    pub async fn delete_api(&self, org: &str, api: &str) -> Result<Value, ApiError> {
        self.client.delete(&api_path(org, api)).await
    }

    /// Starts a debug (trace) session on a deployed revision.
    pub async fn start_debug_session(
        &self,
        org: &str,
        env: &str,
        api: &str,
        revision: &str,
    ) -> Result<Value, ApiError> {
        let path = format!(
            "{}/revisions/{}/debugsessions",
            env_api_path(org, env, api),
            revision
        );
        self.client.post_empty(&path).await
    }

    /// Fetches per-proxy traffic stats for an environment.
    pub async fn get_api_metrics(&self, org: &str, env: &str) -> Result<Value, ApiError> {
        let path = format!("{}/environments/{}/stats/apis", org_path(org), env);
        self.client.get(&path).await
    }

    /// Creates an API product in `org`.
    pub async fn create_api_product(&self, org: &str, payload: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/apiproducts", org_path(org));
        self.client.post(&path, payload).await
    }

    /// Updates an API product in `org`.
    pub async fn update_api_product(
        &self,
        org: &str,
        product: &str,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        let path = format!("{}/apiproducts/{}", org_path(org), product);
        self.client.put(&path, payload).await
    }

    /// Deploys a revision to the [`PRODUCTION_ENV`] environment.
    pub async fn promote_revision_to_production(
        &self,
        org: &str,
        api: &str,
        revision: &str,
    ) -> Result<Value, ApiError> {
        self.deploy_proxy_revision(org, PRODUCTION_ENV, api, revision)
            .await
    }

    /// Deletes a single revision. Deployed revisions must be undeployed first.
    pub async fn delete_proxy_revision(
        &self,
        org: &str,
        api: &str,
        revision: &str,
    ) -> Result<Value, ApiError> {
        self.client.delete(&revision_path(org, api, revision)).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::api::testing::{bearer, mock_client};

    #[test]
    fn test_paths() {
        assert_eq!(org_path("acme"), "/v1/organizations/acme");
        assert_eq!(api_path("acme", "orders"), "/v1/organizations/acme/apis/orders");
        assert_eq!(
            revision_path("acme", "orders", "3"),
            "/v1/organizations/acme/apis/orders/revisions/3"
        );
        assert_eq!(
            deployment_path("acme", "test", "orders", "3"),
            "/v1/organizations/acme/environments/test/apis/orders/revisions/3/deployments"
        );
    }

    #[tokio::test]
    async fn test_create_api_proxy() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("POST", "/v1/organizations/acme/apis")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"name": "orders"})))
            .with_status(201)
            .with_body(r#"{"name": "orders", "revision": ["1"]}"#)
            .create_async()
            .await;

        let response = client
            .proxies()
            .create_api_proxy("acme", &json!({"name": "orders"}))
            .await
            .unwrap();

        assert_eq!(response["revision"], json!(["1"]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_proxy_revisions() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("GET", "/v1/organizations/acme/apis/orders/revisions")
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_body(r#"["1", "2", "3"]"#)
            .create_async()
            .await;

        let response = client
            .proxies()
            .list_proxy_revisions("acme", "orders")
            .await
            .unwrap();

        assert_eq!(response, json!(["1", "2", "3"]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_proxy_revision() {
        let (mut server, client) = mock_client().await;
        let bundle = json!({"name": "orders", "basepaths": ["/orders/v2"]});
        let mock = server
            .mock("POST", "/v1/organizations/acme/apis/orders/revisions")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(bundle.clone()))
            .with_status(201)
            .with_body(r#"{"revision": "4"}"#)
            .create_async()
            .await;

        let response = client
            .proxies()
            .upload_proxy_revision("acme", "orders", &bundle)
            .await
            .unwrap();

        assert_eq!(response["revision"], "4");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_proxy_revision_details() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("GET", "/v1/organizations/acme/apis/orders/revisions/2")
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"name": "orders", "revision": "2"}"#)
            .create_async()
            .await;

        let response = client
            .proxies()
            .get_proxy_revision_details("acme", "orders", "2")
            .await
            .unwrap();

        assert_eq!(response["revision"], "2");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_apis() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock("GET", "/v1/organizations/acme/apis")
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_body(r#"["orders", "payments"]"#)
            .create_async()
            .await;

        let response = client.proxies().list_apis("acme").await.unwrap();

        assert_eq!(response, json!(["orders", "payments"]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_deploy_proxy_revision_has_no_body() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock(
                "POST",
                "/v1/organizations/acme/environments/test/apis/orders/revisions/3/deployments",
            )
            .match_header("authorization", bearer().as_str())
            .match_header("content-type", Matcher::Missing)
            .match_body("")
            .with_status(200)
            .with_body(r#"{"state": "deployed"}"#)
            .create_async()
            .await;

        let response = client
            .proxies()
            .deploy_proxy_revision("acme", "test", "orders", "3")
            .await
            .unwrap();

        assert_eq!(response["state"], "deployed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_promote_revision_targets_prod() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock(
                "POST",
                "/v1/organizations/acme/environments/prod/apis/orders/revisions/4/deployments",
            )
            .with_status(200)
            .with_body(r#"{"environment": "prod"}"#)
            .create_async()
            .await;

        let response = client
            .proxies()
            .promote_revision_to_production("acme", "orders", "4")
            .await
            .unwrap();

        assert_eq!(response["environment"], "prod");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_deployment() {
        let (mut server, client) = mock_client().await;
        let mock = server
            .mock(
                "DELETE",
                "/v1/organizations/acme/environments/test/apis/orders/revisions/3/deployments",
            )
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_body(r#"{"state": "undeployed"}"#)
            .create_async()
            .await;

        let response = client
            .proxies()
            .delete_deployment("acme", "test", "orders", "3")
            .await
            .unwrap();

        assert_eq!(response["state"], "undeployed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_proxy_policies() {
        let (mut server, client) = mock_client().await;
        let policies = json!({"policies": [{"name": "VerifyApiKey", "enabled": true}]});
        let mock = server
            .mock("PUT", "/v1/organizations/acme/apis/orders/revisions/2/policies")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(policies.clone()))
            .with_status(200)
            .with_body(policies.to_string())
            .create_async()
            .await;

        let response = client
            .proxies()
            .update_proxy_policies("acme", "orders", "2", &policies)
            .await
            .unwrap();

        assert_eq!(response, policies);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_start_debug_session_and_metrics() {
        let (mut server, client) = mock_client().await;
        let debug = server
            .mock(
                "POST",
                "/v1/organizations/acme/environments/test/apis/orders/revisions/3/debugsessions",
            )
            .match_body("")
            .with_status(201)
            .with_body(r#"{"session": "s-1"}"#)
            .create_async()
            .await;
        let stats = server
            .mock("GET", "/v1/organizations/acme/environments/test/stats/apis")
            .with_status(200)
            .with_body(r#"{"environments": []}"#)
            .create_async()
            .await;

        let proxies = client.proxies();
        let session = proxies
            .start_debug_session("acme", "test", "orders", "3")
            .await
            .unwrap();
        let metrics = proxies.get_api_metrics("acme", "test").await.unwrap();

        assert_eq!(session["session"], "s-1");
        assert_eq!(metrics["environments"], json!([]));
        debug.assert_async().await;
        stats.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_products() {
        let (mut server, client) = mock_client().await;
        let payload = json!({"name": "gold", "proxies": ["orders"]});
        let create = server
            .mock("POST", "/v1/organizations/acme/apiproducts")
            .match_body(Matcher::Json(payload.clone()))
            .with_status(201)
            .with_body(payload.to_string())
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/v1/organizations/acme/apiproducts/gold")
            .match_body(Matcher::Json(payload.clone()))
            .with_status(200)
            .with_body(payload.to_string())
            .create_async()
            .await;

        let proxies = client.proxies();
        proxies.create_api_product("acme", &payload).await.unwrap();
        proxies
            .update_api_product("acme", "gold", &payload)
            .await
            .unwrap();

        create.assert_async().await;
        update.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_api_and_revision() {
        let (mut server, client) = mock_client().await;
        let revision = server
            .mock("DELETE", "/v1/organizations/acme/apis/orders/revisions/1")
            .with_status(200)
            .with_body(r#"{"revision": "1"}"#)
            .create_async()
            .await;
        let api = server
            .mock("DELETE", "/v1/organizations/acme/apis/orders")
            .with_status(200)
            .with_body(r#"{"name": "orders"}"#)
            .create_async()
            .await;

        let proxies = client.proxies();
        proxies
            .delete_proxy_revision("acme", "orders", "1")
            .await
            .unwrap();
        proxies.delete_api("acme", "orders").await.unwrap();

        revision.assert_async().await;
        api.assert_async().await;
    }

    #[tokio::test]
    async fn test_deployment_status_error_message() {
        let (mut server, client) = mock_client().await;
        server
            .mock(
                "GET",
                "/v1/organizations/acme/environments/test/apis/ghost/deployments",
            )
            .with_status(404)
            .with_body(r#"{"error": {"code": 404, "message": "API proxy ghost does not exist"}}"#)
            .create_async()
            .await;

        let err = client
            .proxies()
            .get_deployment_status("acme", "test", "ghost")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "404 Not Found: API proxy ghost does not exist"
        );
    }
}
