pub mod client;

pub use client::GitHubClient;

use crate::model::{Profile, Repository};

/// The two reads the dashboard needs from the hosting platform.
///
/// Failures never reach the caller as errors: a missing profile is `None`,
/// and a failed repository listing is indistinguishable from an empty one.
pub trait GitHubApi {
    fn fetch_profile(&self, username: &str) -> Option<Profile>;
    fn fetch_repos(&self, username: &str) -> Vec<Repository>;
}
