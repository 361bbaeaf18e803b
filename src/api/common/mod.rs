//
//  apigee-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module holds what every resource client shares: the [`ApiError`]
//! taxonomy and the [`Collection`] helper behind the plain CRUD resources.
//!
//! # Example
//!
//! ```rust
//! use apigee_client::api::common::ApiError;
//!
//! fn describe<T>(result: Result<T, ApiError>) -> String {
//!     match result {
//!         Ok(_) => "ok".to_string(),
//!         Err(e) if e.is_not_found() => "missing".to_string(),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

mod collection;

pub use collection::Collection;

/// Message used when an error response carries nothing we can show.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Unified error type for all Apigee API operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Status` | The server answered with a non-2xx status |
/// | `Network` | Connection, DNS or TLS failure |
/// | `Decode` | A 2xx body that is not valid JSON |
/// | `InvalidBaseUrl` | The configured base URL does not parse |
///
/// # Notes
///
/// - `Status` renders as `<code> <reason>: <message>`, for example
///   `404 Not Found: not found`
/// - Nothing is retried; a failure reaches the caller as soon as it happens
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server rejected the request.
    ///
    /// `message` comes from the response body (see [`extract_error_message`]),
    /// or is [`UNKNOWN_ERROR`] when the body has none.
    #[error("{status}: {message}")]
    Status {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Human readable reason
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response could not be decoded as JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The base URL handed to the client is not an absolute URL.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected value
        url: String,
        /// Why it was rejected
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a failed response.
    ///
    /// # Example
    ///
    /// ```rust
    /// use apigee_client::api::ApiError;
    /// use reqwest::StatusCode;
    ///
    /// let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"message": "not found"}"#);
    /// assert_eq!(err.to_string(), "404 Not Found: not found");
    /// ```
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        Self::Status { status, message }
    }

    /// Returns the HTTP status for errors that carry one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            _ => None,
        }
    }

    /// Checks whether the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Pulls a human readable message out of an error response body.
///
/// Apigee Edge answers with `{"message": "..."}`; Apigee X wraps it as
/// `{"error": {"message": "..."}}`. Both are recognised. Returns `None` when
/// the body is empty, not JSON, or carries neither field.
pub fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    json.get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_top_level_message() {
        let body = r#"{"code": "keymanagement.service.app_not_found", "message": "not found"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("not found"));
    }

    #[test]
    fn test_extracts_nested_error_message() {
        let body = r#"{"error": {"code": 403, "message": "Permission denied", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Permission denied"));
    }

    #[test]
    fn test_unparseable_body_has_no_message() {
        assert_eq!(extract_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message(r#"{"message": 42}"#), None);
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"message": "not found"}"#);
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_error_falls_back_to_generic_message() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "upstream timed out");
        assert_eq!(err.to_string(), "502 Bad Gateway: Unknown error");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(!err.is_not_found());
    }
}
