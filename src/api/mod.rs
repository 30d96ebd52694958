//! Profile payload and the HTTP call that fetches it

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::core::error::CardError;

/// Subset of the public user record the card consumes. Extra response
/// fields are ignored; `name` and `bio` are null for many accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub html_url: String,
    pub avatar_url: String,
    pub bio: Option<String>,
}

/// Fetch a profile from the derived endpoint.
///
/// One unauthenticated GET, body parsed as JSON. Non-success statuses are
/// reported as [`CardError::Status`]; there is no retry at any layer.
pub async fn fetch_profile(client: &Client, endpoint: &str) -> Result<Profile, CardError> {
    debug!(endpoint, "fetching profile");

    let response = client.get(endpoint).send().await.map_err(CardError::Http)?;

    let status = response.status();
    if !status.is_success() {
        return Err(CardError::Status(status.as_u16()));
    }

    let profile = response.json::<Profile>().await.map_err(CardError::Parse)?;
    debug!(login_name = ?profile.name, "profile fetched");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_full_profile() {
        let body = r#"{
            "name": "The Octocat",
            "html_url": "https://github.com/octocat",
            "avatar_url": "https://img/o.png",
            "bio": "Engineer"
        }"#;

        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.html_url, "https://github.com/octocat");
        assert_eq!(profile.avatar_url, "https://img/o.png");
        assert_eq!(profile.bio.as_deref(), Some("Engineer"));
    }

    #[test]
    fn tolerates_null_name_and_bio() {
        let body = r#"{
            "name": null,
            "html_url": "https://github.com/octocat",
            "avatar_url": "https://img/o.png",
            "bio": null
        }"#;

        let profile: Profile = serde_json::from_str(body).unwrap();
        assert!(profile.name.is_none());
        assert!(profile.bio.is_none());
    }

    #[test]
    fn ignores_extra_response_fields() {
        // The real endpoint returns dozens of fields the card never reads.
        let body = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "html_url": "https://github.com/octocat",
            "avatar_url": "https://img/o.png",
            "bio": null,
            "public_repos": 8,
            "followers": 17000
        }"#;

        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert!(profile.bio.is_none());
    }

    #[test]
    fn rejects_a_non_profile_body() {
        let body = r#"{"message": "Not Found"}"#;
        assert!(serde_json::from_str::<Profile>(body).is_err());
    }
}
