//! Crawler module for chapter fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The validated crawl request
//! - HTTP fetching with error classification
//! - Extraction of the original-language chapter text
//! - Overall crawl coordination and pacing

mod coordinator;
mod fetcher;
mod parser;
mod request;

pub use coordinator::{ChapterPlan, Coordinator};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use parser::{extract_chapter_text, ChapterContent};
pub use request::CrawlRequest;

pub use crate::output::CrawlReport;

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for a crawl. It will:
/// 1. Build the HTTP client and chapter writer
/// 2. Fetch every chapter in the requested range, one after another
/// 3. Extract and save the chapter text
/// 4. Pause between consecutive requests
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `request` - Title and chapter range to download
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The range was processed; individual chapters may still have failed
/// * `Err(CrawlError)` - The crawl could not start or the output directory is unusable
pub async fn crawl(config: Config, request: &CrawlRequest) -> Result<CrawlReport> {
    Coordinator::new(config)?.run(request).await
}
