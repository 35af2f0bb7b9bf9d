//! Bearer-token payload decoding.
//!
//! Tokens are JWT-shaped (`header.payload.signature`) but the signature is
//! never verified here; the server is the trust boundary. Decoding only
//! establishes *shape*, and every parse failure fails closed: no user, and
//! an expired token for the purposes of [`is_token_expired`].

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The authenticated identity, derived entirely from the token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
}

fn payload(token: &str) -> Option<Value> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn expiry_secs(payload: &Value) -> Option<i64> {
    payload.get("exp").and_then(Value::as_f64).map(|exp| exp as i64)
}

/// Decode the subject identity and email from a token.
///
/// Prefers the `sub` claim, falling back to `user_id`. Returns `None` for
/// any malformed token (wrong segment count, invalid base64, non-object
/// payload, missing claims); never panics or errors.
pub fn decode_token(token: &str) -> Option<User> {
    let payload = payload(token)?;
    let user_id = payload
        .get("sub")
        .and_then(Value::as_str)
        .or_else(|| payload.get("user_id").and_then(Value::as_str))?;
    let email = payload.get("email").and_then(Value::as_str)?;
    Some(User {
        user_id: user_id.to_string(),
        email: email.to_string(),
    })
}

/// Whether the token's `exp` claim (seconds since epoch) has passed.
///
/// A token without `exp` never expires. A token that cannot be decoded is
/// treated as expired.
pub fn is_token_expired(token: &str) -> bool {
    match payload(token) {
        Some(payload) => match expiry_secs(&payload) {
            Some(exp) => now_ms() >= exp * 1000,
            None => false,
        },
        None => true,
    }
}

/// Milliseconds until the token expires; `None` when there is no `exp`
/// claim or the token cannot be decoded.
pub fn token_expires_in_ms(token: &str) -> Option<i64> {
    let exp = expiry_secs(&payload(token)?)?;
    Some(exp * 1000 - now_ms())
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
