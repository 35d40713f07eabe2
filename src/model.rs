use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SCHEMA_VERSION: u32 = 1;

/// A user profile from `GET /users/{username}`.
///
/// Any field the platform sends that is not modelled here is kept in `extra`
/// so nothing the API returned is lost when the profile is re-emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub repositories: usize,
}

/// Envelope written by `summary --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    pub top: Vec<Repository>,
    pub languages: Vec<LanguageCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_keeps_unmodelled_fields() {
        let body = r#"{
            "login": "octocat",
            "name": "The Octocat",
            "bio": null,
            "avatar_url": "https://avatars.example/u/583231",
            "public_repos": 8,
            "followers": 100,
            "following": 9,
            "company": "@github",
            "site_admin": false
        }"#;
        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.bio, None);
        assert_eq!(profile.public_repos, Some(8));
        assert_eq!(profile.extra.get("company"), Some(&Value::from("@github")));

        let round: Value = serde_json::to_value(&profile).unwrap();
        assert_eq!(round["site_admin"], Value::Bool(false));
        assert_eq!(round["followers"], Value::from(100));
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let profile: Profile = serde_json::from_str(r#"{"login": "ghost"}"#).unwrap();
        assert_eq!(profile.name, None);
        assert_eq!(profile.followers, None);
        assert!(profile.extra.is_empty());
    }

    #[test]
    fn repository_nullable_fields() {
        let body = r#"{
            "name": "hello",
            "html_url": "https://github.com/octocat/hello",
            "description": null,
            "stargazers_count": 3,
            "forks_count": 1,
            "language": null,
            "fork": false
        }"#;
        let repo: Repository = serde_json::from_str(body).unwrap();
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.stargazers_count, 3);
    }
}
