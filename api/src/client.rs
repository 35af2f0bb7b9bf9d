//! Authenticated HTTP wrapper around the backend REST API.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::SessionStore;

use crate::error::ApiError;

/// Backend base URL, resolved at compile time so the wasm build can be
/// pointed at a deployment without runtime environment access.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn base_url_from_env() -> String {
    option_env!("TASKDECK_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// HTTP client that attaches the bearer token from the session store to
/// every request and classifies non-2xx responses into [`ApiError`]s.
///
/// A `401` from any call is handled globally: the stored token is removed
/// and the unauthorized hook (when installed) fires, regardless of which
/// component issued the request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    on_unauthorized: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url_from_env(),
            session,
            on_unauthorized: None,
        }
    }

    /// Override the backend base URL (tests, alternate deployments).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Install the global side effect for session expiry. The web build
    /// uses this to navigate to the sign-in screen.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and return the parsed JSON body, if any.
    ///
    /// - `204 No Content` resolves to `None`.
    /// - `401` purges the stored token, fires the unauthorized hook and
    ///   fails with [`ApiError::Unauthorized`].
    /// - Other non-2xx statuses fail with the server's `detail` or
    ///   `message` field, falling back to `HTTP error <status>`.
    /// - A success body that is not valid JSON resolves to `None` rather
    ///   than failing.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.session.clear_token();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }

        let text = response.text().await?;
        let data: Option<Value> = serde_json::from_str(&text).ok();

        if !status.is_success() {
            let message = error_message(data.as_ref(), status);
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
                body: data,
            });
        }

        Ok(data)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let data = self.request(Method::GET, path, None).await?;
        from_body(data)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let data = self.request(Method::POST, path, Some(&body)).await?;
        from_body(data)
    }

    /// POST with no body, discarding any response payload.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::POST, path, None).await?;
        Ok(())
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let data = self.request(Method::PUT, path, Some(&body)).await?;
        from_body(data)
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let data = self.request(Method::PATCH, path, Some(&body)).await?;
        from_body(data)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::DELETE, path, None).await?;
        Ok(())
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

fn from_body<T: DeserializeOwned>(data: Option<Value>) -> Result<T, ApiError> {
    Ok(serde_json::from_value(data.unwrap_or(Value::Null))?)
}

fn error_message(data: Option<&Value>, status: StatusCode) -> String {
    data.and_then(|d| {
        d.get("detail")
            .and_then(Value::as_str)
            .or_else(|| d.get("message").and_then(Value::as_str))
    })
    .map(str::to_string)
    .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_detail() {
        let body = serde_json::json!({"detail": "bad title", "message": "other"});
        assert_eq!(
            error_message(Some(&body), StatusCode::BAD_REQUEST),
            "bad title"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_message_then_generic() {
        let body = serde_json::json!({"message": "broken"});
        assert_eq!(
            error_message(Some(&body), StatusCode::BAD_REQUEST),
            "broken"
        );
        assert_eq!(
            error_message(None, StatusCode::INTERNAL_SERVER_ERROR),
            "HTTP error 500"
        );
        let non_string = serde_json::json!({"detail": 42});
        assert_eq!(
            error_message(Some(&non_string), StatusCode::BAD_REQUEST),
            "HTTP error 400"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let session = SessionStore::new(store::MemoryStore::new());
        let client = ApiClient::new(session).with_base_url("http://example.test/");
        assert_eq!(client.base_url(), "http://example.test");
    }
}
