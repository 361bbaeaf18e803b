//
//  apigee-client
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test helpers shared by the client and resource modules.

use mockito::ServerGuard;

use super::ApigeeClient;

/// Bearer token used by every test client.
pub(crate) const TOKEN: &str = "test-token";

/// Starts a mock server and a client pointed at it.
pub(crate) async fn mock_client() -> (ServerGuard, ApigeeClient) {
    let server = mockito::Server::new_async().await;
    let client = ApigeeClient::new(&server.url())
        .expect("mock server url is valid")
        .with_token(TOKEN);
    (server, client)
}

/// `Authorization` header value the test client sends.
pub(crate) fn bearer() -> String {
    format!("Bearer {TOKEN}")
}
