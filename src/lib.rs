pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod logging;
pub mod model;
pub mod page;
pub mod stats;
pub mod summary;
pub mod tui;
