//! Shared fixtures for BambooHR client integration tests.

use std::future::{ready, Ready};
use std::net::TcpListener;

use peoplesync_domain::{ClientConfig, Result};
use peoplesync_infra::BambooHrClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NAMESPACE_INPUT: &str = "https://acme.bamboohr.com";
pub const ACCESS_TOKEN: &str = "secret-token";
/// `Basic base64("secret-token:x")`
pub const EXPECTED_AUTHORIZATION: &str = "Basic c2VjcmV0LXRva2VuOng=";
pub const GATEWAY: &str = "/api/gateway.php/acme";

/// Client for the `acme` namespace pointed at a mock server.
pub fn client_for(server: &MockServer) -> BambooHrClient {
    client_for_base(&server.uri())
}

pub fn client_for_base(api_base: &str) -> BambooHrClient {
    BambooHrClient::new(&ClientConfig::new(NAMESPACE_INPUT, ACCESS_TOKEN))
        .expect("client should be created")
        .with_api_base(api_base)
        .expect("api base should be valid")
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Mount an authenticated GET on a gateway-relative path.
pub async fn mount_json(server: &MockServer, relative: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", GATEWAY, relative)))
        .and(header("authorization", EXPECTED_AUTHORIZATION))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Iteratee result for callbacks that finish immediately.
pub fn done() -> Ready<Result<()>> {
    ready(Ok(()))
}
