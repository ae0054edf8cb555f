//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Building chapter URLs from the request's slug
//! - Fetching, extracting and saving each chapter in ascending order
//! - Pacing consecutive requests
//! - Keeping one chapter's failure from affecting the next

use crate::config::Config;
use crate::crawler::parser::{extract_chapter_text, ChapterContent};
use crate::crawler::request::CrawlRequest;
use crate::crawler::{build_http_client, fetch_page, FetchResult};
use crate::output::{ChapterWriter, CrawlReport};
use crate::state::ChapterState;
use crate::url::chapter_url;
use crate::{CrawlError, OutputError, Result};
use reqwest::Client;
use std::path::PathBuf;

/// Where a chapter would be fetched from and saved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterPlan {
    pub chapter_number: u32,
    pub url: String,
    pub path: PathBuf,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    writer: ChapterWriter,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config)?;
        let writer = ChapterWriter::new(config.output.root_path());

        Ok(Self {
            config,
            client,
            writer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// URLs and output paths for every chapter in the request, without any I/O
    pub fn plan(&self, request: &CrawlRequest) -> Vec<ChapterPlan> {
        request
            .chapters()
            .map(|chapter_number| ChapterPlan {
                chapter_number,
                url: self.chapter_url(request, chapter_number),
                path: self
                    .writer
                    .chapter_path(request.title(), request.slug(), chapter_number),
            })
            .collect()
    }

    fn chapter_url(&self, request: &CrawlRequest, chapter_number: u32) -> String {
        chapter_url(&self.config.crawler.base_url, request.slug(), chapter_number)
    }

    /// Runs the main crawl loop
    ///
    /// Every chapter in the range is fetched exactly once, in ascending order,
    /// with the configured pause between consecutive chapters and none after
    /// the last one. Per-chapter failures are logged and recorded in the
    /// report.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The whole range was processed
    /// * `Err(CrawlError::OutputDirectory)` - The novel directory could not be
    ///   created; the run stops at that chapter
    pub async fn run(&self, request: &CrawlRequest) -> Result<CrawlReport> {
        let total = request.chapter_count();
        let delay = self.config.crawler.request_delay();

        tracing::info!("Novel Name: {}", request.title());
        tracing::info!("Generated Slug: {}", request.slug());
        tracing::info!(
            "Targeting chapters {} through {}.",
            request.start_chapter(),
            request.end_chapter()
        );
        tracing::info!(
            "Output will be saved in '{}'",
            self.writer.novel_dir(request.title()).display()
        );

        let mut report = CrawlReport::new(request.title(), request.slug());

        for (index, chapter_number) in request.chapters().enumerate() {
            tracing::info!(
                "Processing Chapter {} ({}/{})...",
                chapter_number,
                index + 1,
                total
            );

            let state = self.process_chapter(request, chapter_number).await?;
            report.record(chapter_number, state);

            if index + 1 < total {
                tracing::info!(
                    "Waiting for {:?} before the next request...",
                    delay
                );
                tokio::time::sleep(delay).await;
            }
        }

        report.finish();
        tracing::info!(
            "Crawling process finished: {} of {} chapters saved",
            report.count(ChapterState::Written),
            total
        );

        Ok(report)
    }

    /// Processes a single chapter
    ///
    /// This method:
    /// 1. Fetches the chapter page
    /// 2. Extracts the original-language text
    /// 3. Writes it to disk if there is any
    ///
    /// Only a failure to create the novel directory is returned as an error;
    /// everything else ends in a terminal [`ChapterState`].
    async fn process_chapter(
        &self,
        request: &CrawlRequest,
        chapter_number: u32,
    ) -> Result<ChapterState> {
        let mut state = ChapterState::Pending;
        let url = self.chapter_url(request, chapter_number);

        let markup = match fetch_page(&self.client, &url).await {
            FetchResult::Success { status_code, body } => {
                tracing::debug!("Received {} ({} bytes) from {}", status_code, body.len(), url);
                advance(chapter_number, &mut state, ChapterState::Fetched);
                body
            }
            FetchResult::HttpError { status_code } => {
                tracing::error!("HTTP Error for {}: status {}", url, status_code);
                advance(chapter_number, &mut state, ChapterState::FetchFailed);
                return Ok(state);
            }
            FetchResult::NetworkError { error } => {
                tracing::error!("Could not fetch {}: {}", url, error);
                advance(chapter_number, &mut state, ChapterState::FetchFailed);
                return Ok(state);
            }
        };

        let content = match extract_chapter_text(Some(&markup)) {
            Some(text) => ChapterContent {
                chapter_number,
                text,
            },
            None => {
                tracing::error!("Failed to parse content for chapter {}.", chapter_number);
                advance(chapter_number, &mut state, ChapterState::ExtractNone);
                return Ok(state);
            }
        };

        if content.is_empty() {
            tracing::warn!(
                "No '<sentence class=\"original\">' tags found on the page. The page structure might have changed."
            );
            tracing::info!("Chapter {} had no content to save.", chapter_number);
            advance(chapter_number, &mut state, ChapterState::ExtractEmpty);
            return Ok(state);
        }
        advance(chapter_number, &mut state, ChapterState::Extracted);

        match self.writer.write(
            request.title(),
            request.slug(),
            content.chapter_number,
            &content.text,
        ) {
            Ok(path) => {
                tracing::info!("Saved chapter {} to {}", chapter_number, path.display());
                advance(chapter_number, &mut state, ChapterState::Written);
            }
            Err(OutputError::CreateDir { path, source }) => {
                tracing::error!(
                    "Could not create directory {}: {}",
                    path.display(),
                    source
                );
                return Err(CrawlError::OutputDirectory { path, source });
            }
            Err(e @ OutputError::Write { .. }) => {
                tracing::error!("{}", e);
                advance(chapter_number, &mut state, ChapterState::WriteFailed);
            }
        }

        Ok(state)
    }
}

/// Moves a chapter to its next state
fn advance(chapter_number: u32, state: &mut ChapterState, next: ChapterState) {
    debug_assert!(
        state.can_transition_to(next),
        "invalid transition {} -> {}",
        state,
        next
    );
    tracing::trace!("Chapter {}: {} -> {}", chapter_number, state, next);
    *state = next;
}
