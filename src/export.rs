use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::CommonArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::model::Repository;
use crate::page::{self, Page};

pub const CSV_HEADER: &str = "Name,Description,Stars,Forks,Language,URL";
pub const CSV_MIME: &str = "text/csv";

/// The downloadable repository table for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    pub fn new(username: &str, repos: &[Repository]) -> Self {
        Self {
            file_name: csv_file_name(username),
            mime: CSV_MIME,
            bytes: repos_to_csv(repos).into_bytes(),
        }
    }

    /// Write the export into `dir`, returning the path written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "wrote CSV export");
        Ok(path)
    }
}

pub fn csv_file_name(username: &str) -> String {
    format!("{username}_repos.csv")
}

/// Header line plus one line per repository, in the order given.
pub fn repos_to_csv(repos: &[Repository]) -> String {
    let mut lines = Vec::with_capacity(repos.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for repo in repos {
        let stars = repo.stargazers_count.to_string();
        let forks = repo.forks_count.to_string();
        let fields = [
            repo.name.as_str(),
            repo.description.as_deref().unwrap_or(""),
            stars.as_str(),
            forks.as_str(),
            repo.language.as_deref().unwrap_or(""),
            repo.html_url.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
        lines.push(line.join(","));
    }
    lines.join("\n")
}

/// Quote a field, doubling embedded quotes. Line breaks become spaces so a
/// repository always occupies exactly one line.
fn quote_field(value: &str) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    format!("\"{}\"", flat.replace('"', "\"\""))
}

pub fn exec(common: CommonArgs, username: Option<String>, output: Option<PathBuf>) -> anyhow::Result<()> {
    use console::style;

    let config = AppConfig::from_args(&common).with_output_dir(output);
    let client = GitHubClient::new(&config).context("Failed to build HTTP client")?;
    let username = username.unwrap_or_else(|| config.default_username.clone());

    let view = crate::summary::load_with_spinner(&client, &username, &config, true);
    match view {
        Page::Idle => anyhow::bail!("No username given"),
        Page::NotFound { .. } => anyhow::bail!(page::NOT_FOUND_MESSAGE),
        Page::NoRepositories { .. } => anyhow::bail!(page::NO_REPOS_MESSAGE),
        Page::Dashboard(dashboard) => {
            let path = dashboard
                .csv
                .write_to(&config.output_dir)
                .with_context(|| format!("Failed to write {}", dashboard.csv.file_name))?;
            println!(
                "Exported {} repositories to {}",
                style(dashboard.repositories.len()).cyan(),
                style(path.display()).green()
            );
        }
    }
    Ok(())
}
