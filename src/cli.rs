use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghdash")]
#[command(about = "GitHub profile dashboard: repositories by stars, languages, and CSV export")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Base URL of the GitHub REST API")]
    pub api_base: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive terminal dashboard (the default)
    Dashboard {
        #[arg(help = "GitHub username to open with")]
        username: Option<String>,
    },
    /// Print the profile, repositories, and language breakdown once
    Summary {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "GitHub username")]
        username: Option<String>,
    },
    /// Write the repository table as `{username}_repos.csv`
    Export {
        #[arg(long, short, help = "Directory to write the CSV into")]
        output: Option<PathBuf>,

        #[arg(help = "GitHub username")]
        username: Option<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            None => crate::tui::exec(self.common, None),
            Some(Commands::Dashboard { username }) => crate::tui::exec(self.common, username),
            Some(Commands::Summary { json, username }) => {
                crate::summary::exec(self.common, username, json)
            }
            Some(Commands::Export { output, username }) => {
                crate::export::exec(self.common, username, output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["ghdash"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ghdash",
            "summary",
            "--json",
            "octocat",
            "--api-base",
            "http://localhost:9",
        ])
        .unwrap();
        assert_eq!(cli.common.api_base.as_deref(), Some("http://localhost:9"));
        match cli.command {
            Some(Commands::Summary { json, username }) => {
                assert!(json);
                assert_eq!(username.as_deref(), Some("octocat"));
            }
            _ => panic!("expected summary"),
        }
    }
}
