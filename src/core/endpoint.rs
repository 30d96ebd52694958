//! Endpoint derivation from an address string
//!
//! The target username travels inside the address as the substring after
//! the first `=` (e.g. `https://site/?user=octocat`). Anything non-empty
//! after the `=` is accepted as-is; there is no character-set or length
//! validation. A missing or empty token silently falls back to a default
//! username, never to an error.

/// Extract the username token from an address.
///
/// Returns the substring following the first `=`, or `None` when the
/// address has no `=` or nothing after it.
///
/// # Examples
///
/// ```
/// use octocard::core::endpoint::extract_username;
///
/// assert_eq!(extract_username("https://site/?x=octocat"), Some("octocat"));
/// assert_eq!(extract_username("https://site/"), None);
/// assert_eq!(extract_username("https://site/?x="), None);
/// ```
pub fn extract_username(address: &str) -> Option<&str> {
    match address.split_once('=') {
        Some((_, token)) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Derive the profile query endpoint for an address.
///
/// Joins the API base with the extracted username, falling back to
/// `default_username` when the address carries no usable token. The base
/// may carry trailing slashes; the result never contains a double slash.
///
/// # Examples
///
/// ```
/// use octocard::core::endpoint::derive_endpoint;
///
/// assert_eq!(
///     derive_endpoint("https://api.github.com/users", "https://site/?x=octocat", "Nadir-bnm"),
///     "https://api.github.com/users/octocat"
/// );
/// assert_eq!(
///     derive_endpoint("https://api.github.com/users", "https://site/", "Nadir-bnm"),
///     "https://api.github.com/users/Nadir-bnm"
/// );
/// ```
pub fn derive_endpoint(api_base: &str, address: &str, default_username: &str) -> String {
    let username = extract_username(address).unwrap_or(default_username);
    format!("{}/{}", api_base.trim_end_matches('/'), username)
}
