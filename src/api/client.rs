//
//  apigee-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Apigee Management API
//!
//! This module provides the single request helper every resource client goes
//! through.
//!
//! ## Features
//!
//! - Bearer token injection
//! - JSON request bodies with `Content-Type: application/json`
//! - Uniform mapping of non-2xx responses onto [`ApiError::Status`]
//! - Custom User-Agent header
//!
//! ## URL Construction
//!
//! Request URLs are `{base_url}{path}`, concatenated literally. Identifiers are
//! inserted into paths as given; escaping is left to the HTTP layer.

use std::fmt;

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::common::ApiError;

/// The HTTP client for the Apigee Management API.
///
/// Holds the base URL and the bearer token and performs exactly one HTTP call
/// per operation. It is cheap to borrow; resource clients such as
/// [`caches`](Self::caches) or [`proxies`](Self::proxies) are views over it.
///
/// # Example
///
/// ```rust,no_run
/// use apigee_client::api::ApigeeClient;
///
/// # async fn example() -> Result<(), apigee_client::api::ApiError> {
/// let client = ApigeeClient::new("https://api.enterprise.apigee.com")?
///     .with_token("your-token");
///
/// let caches = client.get("/caches").await?;
/// # Ok(())
/// # }
/// ```
pub struct ApigeeClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL every path is appended to
    base_url: String,
    /// Bearer token, if configured
    token: Option<String>,
}

impl fmt::Debug for ApigeeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApigeeClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApigeeClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` is not an absolute URL,
    /// or [`ApiError::Network`] if the HTTP client could not be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
                .build()?,
            base_url: base_url.to_string(),
            token: None,
        })
    }

    /// Sets the bearer token sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the base URL this client was created with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL for `path`.
    ///
    /// ```rust
    /// use apigee_client::api::ApigeeClient;
    ///
    /// let client = ApigeeClient::new("https://api.example.com")?;
    /// assert_eq!(client.url("/caches/c1"), "https://api.example.com/caches/c1");
    /// # Ok::<(), apigee_client::api::ApiError>(())
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Performs one HTTP request and decodes the JSON response.
    ///
    /// When `body` is present it is sent verbatim as the JSON request body.
    ///
    /// # Returns
    ///
    /// The decoded response body, unchanged. A successful response with an
    /// empty body yields [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] for any non-2xx status
    /// - [`ApiError::Network`] if the request could not be completed
    /// - [`ApiError::Decode`] if a successful body is not JSON
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, has_body = body.is_some(), "sending request");

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(%method, %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(ApiError::from_response(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Makes an HTTP GET request to `path`.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// Makes an HTTP POST request to `path` with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes an HTTP POST request to `path` without a body.
    ///
    /// Used by state transitions such as deployments and API key approval.
    pub async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::POST, path, None).await
    }

    /// Makes an HTTP PUT request to `path` with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes an HTTP DELETE request to `path`.
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, None).await
    }
}
