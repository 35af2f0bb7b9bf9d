//! Sign-up, sign-in, sign-out and session restore.

use serde::{Deserialize, Serialize};
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::session::{self, User};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Response from the sign-in and sign-up endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub user_id: String,
    pub email: String,
    pub token: String,
}

/// Create an account. The returned token is stored before this resolves,
/// so a subsequent authenticated call will carry it.
pub async fn sign_up(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let response: TokenResponse = client
        .post("/api/auth/sign-up", &Credentials { email, password })
        .await?;
    client.session().set_token(&response.token);
    Ok(response)
}

/// Authenticate an existing account. Same contract as [`sign_up`].
pub async fn sign_in(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let response: TokenResponse = client
        .post("/api/auth/sign-in", &Credentials { email, password })
        .await?;
    client.session().set_token(&response.token);
    Ok(response)
}

/// Sign out: best-effort server notification, then clear the token.
///
/// Never fails from the caller's perspective; a failed logout request is
/// logged and swallowed, and the token is cleared regardless.
pub async fn sign_out(client: &ApiClient) {
    if client.session().has_token() {
        if let Err(err) = client.post_empty("/api/auth/logout").await {
            tracing::warn!("logout notification failed: {err}");
        }
    }
    client.session().clear_token();
}

/// Restore the session from the stored token without contacting the server.
///
/// An expired or undecodable token is removed and yields `None`
/// (anonymous); a valid one decodes to the current [`User`].
pub fn current_user(session: &SessionStore) -> Option<User> {
    let token = session.token()?;

    if session::is_token_expired(&token) {
        session.clear_token();
        return None;
    }

    match session::decode_token(&token) {
        Some(user) => Some(user),
        None => {
            session.clear_token();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use store::MemoryStore;

    fn token_with(payload: serde_json::Value) -> String {
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("h.{body}.s")
    }

    #[test]
    fn test_current_user_with_no_token_is_anonymous() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(current_user(&session).is_none());
    }

    #[test]
    fn test_current_user_removes_expired_token() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_token(&token_with(
            serde_json::json!({"sub": "u1", "email": "a@b.com", "exp": 1000}),
        ));
        assert!(current_user(&session).is_none());
        assert!(!session.has_token());
    }

    #[test]
    fn test_current_user_removes_undecodable_token() {
        let session = SessionStore::new(MemoryStore::new());
        // Decodes as JSON but has no identity claims, and no exp either, so
        // it passes the expiry check and fails the decode.
        session.set_token(&token_with(serde_json::json!({"foo": "bar"})));
        assert!(current_user(&session).is_none());
        assert!(!session.has_token());
    }

    #[test]
    fn test_current_user_decodes_valid_token() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_token(&token_with(serde_json::json!({"sub": "u1", "email": "a@b.com"})));
        let user = current_user(&session).unwrap();
        assert_eq!(user.user_id, "u1");
        assert_eq!(user.email, "a@b.com");
        assert!(session.has_token());
    }
}
