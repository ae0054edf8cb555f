//! Run report for a finished crawl
//!
//! This module records the outcome of every chapter in a run and renders a
//! short summary once the loop is over.

use crate::state::ChapterState;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Outcome of a complete crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Novel title as entered
    pub title: String,

    /// Slug used for URLs and file names
    pub slug: String,

    /// Final state of each attempted chapter, in the order they were attempted
    pub chapters: Vec<(u32, ChapterState)>,

    pub started_at: DateTime<Utc>,

    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlReport {
    /// Starts an empty report for a new run
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            chapters: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Records the final state of one chapter
    pub fn record(&mut self, chapter_number: u32, state: ChapterState) {
        self.chapters.push((chapter_number, state));
    }

    /// Marks the run as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of chapters attempted
    pub fn attempted(&self) -> usize {
        self.chapters.len()
    }

    /// Number of chapters that ended in `state`
    pub fn count(&self, state: ChapterState) -> usize {
        self.chapters.iter().filter(|(_, s)| *s == state).count()
    }

    /// Chapter numbers that were saved to disk
    pub fn written(&self) -> Vec<u32> {
        self.chapters
            .iter()
            .filter(|(_, s)| s.is_success())
            .map(|(n, _)| *n)
            .collect()
    }

    /// Chapter numbers that ended in an error state
    pub fn failed(&self) -> Vec<u32> {
        self.chapters
            .iter()
            .filter(|(_, s)| s.is_error())
            .map(|(n, _)| *n)
            .collect()
    }

    /// Chapter numbers whose page had nothing to save
    pub fn skipped(&self) -> Vec<u32> {
        self.chapters
            .iter()
            .filter(|(_, s)| s.is_skipped())
            .map(|(n, _)| *n)
            .collect()
    }

    /// Final state of a single chapter, if it was attempted
    pub fn state_of(&self, chapter_number: u32) -> Option<ChapterState> {
        self.chapters
            .iter()
            .find(|(n, _)| *n == chapter_number)
            .map(|(_, s)| *s)
    }

    /// Count of chapters per final state
    pub fn counts_by_state(&self) -> HashMap<ChapterState, usize> {
        let mut counts = HashMap::new();
        for (_, state) in &self.chapters {
            *counts.entry(*state).or_insert(0) += 1;
        }
        counts
    }

    /// Run duration, once the run is finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

/// Prints a run report to stdout in a formatted manner
pub fn print_report(report: &CrawlReport) {
    println!("=== Crawl Report ===\n");

    println!("Novel: {} ({})", report.title, report.slug);
    println!("  Chapters attempted: {}", report.attempted());
    if let Some(duration) = report.duration_seconds() {
        println!("  Duration: {} seconds", duration);
    }
    println!();

    println!("Chapters by State:");
    let mut state_counts: Vec<_> = report.counts_by_state().into_iter().collect();
    state_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    for (state, count) in state_counts {
        println!("  {}: {}", state, count);
    }
    println!();

    let skipped = report.skipped();
    if !skipped.is_empty() {
        let list: Vec<String> = skipped.iter().map(|n| n.to_string()).collect();
        println!("Chapters without content: {}", list.join(", "));
    }

    let failed = report.failed();
    if !failed.is_empty() {
        let list: Vec<String> = failed.iter().map(|n| n.to_string()).collect();
        println!("Failed chapters: {}", list.join(", "));
        println!();
    }

    println!(
        "Saved {} / {} chapters",
        report.count(ChapterState::Written),
        report.attempted()
    );
}
