//! Shared application views. Platform packages provide navigation
//! callbacks; the views own their form and list state.

mod home;
pub use home::Home;

mod signin;
pub use signin::Signin;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

/// Shape check only: `local@domain.tld` with no whitespace and a single
/// `@`. Anything stricter is the server's call.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Minimum password length enforced client-side before any network call.
pub(crate) const MIN_PASSWORD_LEN: usize = 8;
