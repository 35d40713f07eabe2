use anyhow::Context;
use chrono::Utc;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::cli::CommonArgs;
use crate::config::AppConfig;
use crate::github::{GitHubApi, GitHubClient};
use crate::model::{SummaryOutput, SCHEMA_VERSION};
use crate::page::{self, Dashboard, Page, ProfileSection};

pub fn exec(common: CommonArgs, username: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = AppConfig::from_args(&common);
    let client = GitHubClient::new(&config).context("Failed to build HTTP client")?;
    let username = username.unwrap_or_else(|| config.default_username.clone());

    let view = load_with_spinner(&client, &username, &config, !json);
    match view {
        Page::Idle => anyhow::bail!("No username given"),
        Page::NotFound { .. } => anyhow::bail!(page::NOT_FOUND_MESSAGE),
        Page::NoRepositories { profile } => {
            if json {
                output_json(&username, &profile, None)?;
            } else {
                output_profile(&profile);
                println!("\n{}", style(page::NO_REPOS_MESSAGE).yellow());
            }
        }
        Page::Dashboard(dashboard) => {
            if json {
                output_json(&username, &dashboard.profile, Some(&dashboard))?;
            } else {
                output_profile(&dashboard.profile);
                output_dashboard(&dashboard);
            }
        }
    }
    Ok(())
}

/// Run the fetch pipeline behind a spinner. The spinner draws to stderr and
/// stays hidden when stderr is not a terminal.
pub fn load_with_spinner<A: GitHubApi + ?Sized>(
    api: &A,
    username: &str,
    config: &AppConfig,
    show_progress: bool,
) -> Page {
    let pb = if show_progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Fetching {username}..."));
    pb.enable_steady_tick(Duration::from_millis(100));

    let loaded = page::load(api, username, config);
    pb.finish_and_clear();
    loaded
}

fn output_json(
    username: &str,
    profile: &ProfileSection,
    dashboard: Option<&Dashboard>,
) -> anyhow::Result<()> {
    let output = SummaryOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        profile: profile.profile.clone(),
        repositories: dashboard.map(|d| d.repositories.clone()).unwrap_or_default(),
        top: dashboard.map(|d| d.top.clone()).unwrap_or_default(),
        languages: dashboard.map(|d| d.languages.clone()).unwrap_or_default(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_profile(profile: &ProfileSection) {
    println!("{}", style(&profile.display_name).bold());
    if let Some(url) = &profile.avatar_url {
        println!("{}", style(url).dim());
    }
    println!("Bio: {}", profile.bio);
    println!("Public Repos: {}", style(&profile.public_repos).cyan());
    println!(
        "Followers: {} | Following: {}",
        style(&profile.followers).cyan(),
        style(&profile.following).cyan()
    );
}

fn output_dashboard(dashboard: &Dashboard) {
    println!("\n{}", style("Repositories (sorted by stars)").bold());
    println!("{}", "─".repeat(50));
    for repo in &dashboard.repositories {
        println!("{} {}", style(&repo.name).green().bold(), style(&repo.html_url).dim());
        println!(
            "  Stars: {} | Forks: {} | Language: {}",
            repo.stargazers_count,
            repo.forks_count,
            repo.language.as_deref().unwrap_or("-")
        );
        println!("  {}", repo.description.as_deref().unwrap_or(""));
    }

    println!("\n{}", style(format!("Top {} Repositories", dashboard.top.len())).bold());
    println!("{}", "─".repeat(50));
    for repo in &dashboard.top {
        println!(
            "{:<30} {:>6} {:<12} {}",
            repo.name,
            style(repo.stargazers_count).yellow(),
            repo.language.as_deref().unwrap_or("-"),
            style(&repo.html_url).dim()
        );
    }

    println!("\n{}", style("Language Distribution").bold());
    println!("{}", "─".repeat(50));
    let max = dashboard
        .languages
        .iter()
        .map(|l| l.repositories)
        .max()
        .unwrap_or(1);
    for entry in &dashboard.languages {
        let width = (entry.repositories * 30).div_ceil(max);
        println!(
            "{:<14} {} {}",
            entry.language,
            style("█".repeat(width)).green(),
            entry.repositories
        );
    }

    println!(
        "\nUse `ghdash export {}` to save {}.",
        dashboard.username, dashboard.csv.file_name
    );
}
