mod common;

use common::{closed_port, octocat_profile, octocat_repos, serve, Reply};
use ghdash::config::AppConfig;
use ghdash::github::{GitHubApi, GitHubClient};
use pretty_assertions::assert_eq;

fn client_for(base: String) -> GitHubClient {
    let config = AppConfig {
        api_base: base,
        ..AppConfig::default()
    };
    GitHubClient::new(&config).unwrap()
}

#[test]
fn profile_200_keeps_every_field() {
    let base = serve(vec![("/users/octocat", Reply::ok(octocat_profile()))]);
    let profile = client_for(base).fetch_profile("octocat").unwrap();
    assert_eq!(profile.name.as_deref(), Some("The Octocat"));
    assert_eq!(profile.bio, None);
    assert_eq!(profile.public_repos, Some(8));
    assert_eq!(profile.followers, Some(100));
    assert_eq!(profile.following, Some(9));
    assert_eq!(
        profile.extra.get("company").and_then(|v| v.as_str()),
        Some("@github")
    );
}

#[test]
fn profile_404_is_absent() {
    let base = serve(vec![]);
    assert!(client_for(base).fetch_profile("ghost").is_none());
}

#[test]
fn profile_malformed_body_is_absent() {
    let base = serve(vec![("/users/broken", Reply::ok("not json"))]);
    assert!(client_for(base).fetch_profile("broken").is_none());
}

#[test]
fn repos_200_in_api_order() {
    let base = serve(vec![("/users/octocat/repos", Reply::ok(octocat_repos()))]);
    let repos = client_for(base).fetch_repos("octocat");
    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["five", "one", "nine"]);
    assert_eq!(repos[1].language, None);
}

#[test]
fn repos_empty_array_is_empty() {
    let base = serve(vec![("/users/octocat/repos", Reply::ok("[]"))]);
    assert!(client_for(base).fetch_repos("octocat").is_empty());
}

#[test]
fn repos_failure_is_empty_not_absent() {
    let base = serve(vec![]);
    assert!(client_for(base).fetch_repos("ghost").is_empty());
}

#[test]
fn transport_failure_looks_like_no_data() {
    let client = client_for(closed_port());
    assert!(client.fetch_profile("octocat").is_none());
    assert!(client.fetch_repos("octocat").is_empty());
}
