use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Site that serves the chapter pages
pub const DEFAULT_BASE_URL: &str = "https://lnmtl.com";

/// Pause between two consecutive chapter requests (milliseconds)
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 2000;

/// Per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Directory under which one folder per novel is created
pub const DEFAULT_ROOT_DIR: &str = "Books";

/// Browser-like identity sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Chapter Crawler
///
/// Built once at startup and handed to the coordinator; it is never mutated
/// during a run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Scheme and host of the novel site, without trailing path
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Pause between consecutive chapter fetches (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Bound on a single request, connect to last body byte (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl CrawlerConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Full `User-Agent` header value
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for downloaded novels
    #[serde(rename = "root-dir")]
    pub root_dir: String,
}

impl OutputConfig {
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: DEFAULT_ROOT_DIR.to_string(),
        }
    }
}
