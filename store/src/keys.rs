//! Well-known storage keys.

/// The bearer token for the current session.
pub const AUTH_TOKEN: &str = "auth_token";

/// The theme preference: `"light"`, `"dark"` or `"system"`.
pub const THEME: &str = "theme";
