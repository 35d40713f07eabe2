use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CommonArgs;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USERNAME: &str = "Huzaifa4412";
pub const PAGE_TITLE: &str = "GitHub Profile Analyzer";
pub const TOP_N: usize = 5;

/// Process-wide settings, resolved once before any fetch or render happens.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub page_title: String,
    pub api_base: String,
    pub user_agent: String,
    pub default_username: String,
    pub top_n: usize,
    pub timeout: Option<Duration>,
    pub output_dir: PathBuf,
}

impl AppConfig {
    pub fn from_args(common: &CommonArgs) -> Self {
        let mut config = Self::default();
        if let Some(base) = &common.api_base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        config.timeout = common.timeout_secs.map(Duration::from_secs);
        config
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_title: PAGE_TITLE.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: format!("ghdash/{}", env!("CARGO_PKG_VERSION")),
            default_username: DEFAULT_USERNAME.to_string(),
            top_n: TOP_N,
            timeout: None,
            output_dir: PathBuf::from("."),
        }
    }
}
