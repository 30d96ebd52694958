//! Shared constants used across the application

/// Username used when the address carries no usable `=` token.
pub const DEFAULT_USERNAME: &str = "Nadir-bnm";

/// Base URL of the public users endpoint. A username path segment is
/// appended to this when deriving the query endpoint.
pub const API_BASE_URL: &str = "https://api.github.com/users";

/// Minimum time the loading indicator stays visible, in milliseconds.
/// This floors the perceived latency so the indicator never flashes,
/// even when the fetch returns instantly.
pub const MIN_DISPLAY_DELAY_MS: u64 = 1500;

/// Text shown in the bio field when the profile has no bio.
pub const NO_BIO_PLACEHOLDER: &str = "No data available";

/// chrono format for the card's date field, e.g. `8/23/2026`.
pub const DATE_FORMAT: &str = "%-m/%-d/%Y";
