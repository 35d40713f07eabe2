//! What the dashboard shows for one username.
//!
//! [`render`] is a pure function from fetched data to a [`Page`]; [`load`]
//! runs the whole pipeline (fetch profile, fetch repositories, render) and is
//! called again from scratch every time the username is submitted.

use std::collections::HashMap;

use crate::config::AppConfig;
use crate::export::CsvExport;
use crate::github::GitHubApi;
use crate::model::{LanguageCount, Profile, Repository};
use crate::stats::{language_histogram, ordered_languages, sort_by_stars, top_n};

pub const NOT_FOUND_MESSAGE: &str = "GitHub user not found!";
pub const NO_REPOS_MESSAGE: &str = "No repositories found or failed to fetch repos.";
pub const NO_BIO: &str = "No bio";
pub const MISSING_COUNT: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// Blank username: only the title and input are shown.
    Idle,
    NotFound { username: String },
    NoRepositories { profile: ProfileSection },
    Dashboard(Dashboard),
}

/// Display strings for the profile header.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSection {
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: String,
    pub public_repos: String,
    pub followers: String,
    pub following: String,
    pub profile: Profile,
}

impl ProfileSection {
    pub fn new(username: &str, profile: Profile) -> Self {
        let count = |v: Option<u64>| v.map_or_else(|| MISSING_COUNT.to_string(), |n| n.to_string());
        Self {
            display_name: profile
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| username.to_string()),
            avatar_url: profile.avatar_url.clone(),
            bio: profile
                .bio
                .clone()
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| NO_BIO.to_string()),
            public_repos: count(profile.public_repos),
            followers: count(profile.followers),
            following: count(profile.following),
            profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub username: String,
    pub profile: ProfileSection,
    /// Sorted by stars, most first.
    pub repositories: Vec<Repository>,
    pub top: Vec<Repository>,
    pub histogram: HashMap<String, usize>,
    pub languages: Vec<LanguageCount>,
    pub csv: CsvExport,
}

impl Page {
    pub fn profile(&self) -> Option<&ProfileSection> {
        match self {
            Page::NoRepositories { profile } => Some(profile),
            Page::Dashboard(d) => Some(&d.profile),
            Page::Idle | Page::NotFound { .. } => None,
        }
    }

    pub fn repositories(&self) -> &[Repository] {
        match self {
            Page::Dashboard(d) => &d.repositories,
            _ => &[],
        }
    }
}

pub fn render(
    username: &str,
    profile: Option<Profile>,
    repos: Vec<Repository>,
    config: &AppConfig,
) -> Page {
    let username = username.trim();
    if username.is_empty() {
        return Page::Idle;
    }

    let Some(profile) = profile else {
        return Page::NotFound {
            username: username.to_string(),
        };
    };
    let profile = ProfileSection::new(username, profile);

    if repos.is_empty() {
        return Page::NoRepositories { profile };
    }

    let sorted = sort_by_stars(&repos);
    let top = top_n(&sorted, config.top_n).to_vec();
    let histogram = language_histogram(&repos);
    let languages = ordered_languages(&histogram);
    let csv = CsvExport::new(username, &repos);

    Page::Dashboard(Dashboard {
        username: username.to_string(),
        profile,
        repositories: sorted,
        top,
        histogram,
        languages,
        csv,
    })
}

pub fn load<A: GitHubApi + ?Sized>(api: &A, username: &str, config: &AppConfig) -> Page {
    let username = username.trim();
    if username.is_empty() {
        return Page::Idle;
    }
    let profile = api.fetch_profile(username);
    let repos = api.fetch_repos(username);
    render(username, profile, repos, config)
}
