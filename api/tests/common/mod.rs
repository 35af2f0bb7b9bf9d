#![allow(dead_code)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use store::{MemoryStore, SessionStore};
use wiremock::MockServer;

/// Client wired to the mock server with a fresh in-memory session.
pub fn test_client(server: &MockServer) -> api::ApiClient {
    api::ApiClient::new(SessionStore::new(MemoryStore::new())).with_base_url(server.uri())
}

/// A decodable, non-expiring bearer token for the given identity.
pub fn make_token(sub: &str, email: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({"sub": sub, "email": email})
            .to_string()
            .as_bytes(),
    );
    format!("{header}.{payload}.signature")
}
