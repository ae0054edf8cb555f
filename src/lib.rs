//! Chapter Crawler: a polite serialized-novel downloader
//!
//! This crate fetches sequentially numbered chapter pages of a web novel,
//! extracts the original-language sentences from each page and stores every
//! chapter as a plain UTF-8 text file under a predictable path.

pub mod config;
pub mod crawler;
pub mod output;
pub mod prompt;
pub mod state;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for crawler operations
///
/// Per-chapter failures (HTTP errors, missing markup, unwritable files) never
/// surface here; they are recorded as [`ChapterState`]s. Only conditions that
/// make the whole run pointless are represented.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid chapter range {start}..={end}: start must be >= 1 and end >= start")]
    InvalidRange { start: u32, end: u32 },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Could not create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while persisting a chapter
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Could not create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, CrawlReport, CrawlRequest};
pub use state::ChapterState;
pub use crate::url::{chapter_url, normalize_slug};
