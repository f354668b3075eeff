//! wiremock stand-ins for the login, read and write endpoints.
//!
//! Every mock matches on method, path and the expected credentials, so a
//! request with the wrong body or token falls through to wiremock's 404.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{KUBE_TOKEN, PASSWORD, ROLE, TOKEN};

/// Userpass login endpoint for the fixture user.
pub const USERPASS_LOGIN_PATH: &str = "/v1/auth/userpass/login/user";

/// Kubernetes login endpoint.
pub const KUBERNETES_LOGIN_PATH: &str = "/v1/auth/kubernetes/login";

/// Secret endpoint for `demokv/mytest` on the `v1` engine.
pub const SECRET_PATH: &str = "/v1/demokv/mytest";

fn respond(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

/// Answer one userpass login carrying the fixture password.
pub async fn mock_userpass_login(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(USERPASS_LOGIN_PATH))
        .and(body_json(json!({ "password": PASSWORD })))
        .respond_with(respond(status, body))
        .expect(1)
        .mount(server)
        .await;
}

/// Answer one kubernetes login carrying the fixture JWT and role.
pub async fn mock_kubernetes_login(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(KUBERNETES_LOGIN_PATH))
        .and(body_json(json!({ "jwt": KUBE_TOKEN, "role": ROLE })))
        .respond_with(respond(status, body))
        .expect(1)
        .mount(server)
        .await;
}

/// Answer one authenticated secret read.
pub async fn mock_read(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(SECRET_PATH))
        .and(header("X-Vault-Token", TOKEN))
        .respond_with(respond(status, body))
        .expect(1)
        .mount(server)
        .await;
}

/// Accept one authenticated write whose body equals `expected`.
pub async fn mock_write(server: &MockServer, expected: Value, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(SECRET_PATH))
        .and(header("X-Vault-Token", TOKEN))
        .and(body_json(expected))
        .respond_with(respond(status, body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fail the test if anything is written to the secret path.
pub async fn mock_no_write(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SECRET_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(server)
        .await;
}

/// Number of requests the server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .len()
}
