//! Output module for persisting chapters and reporting on a run
//!
//! This module handles:
//! - Writing extracted chapters to `<root>/<title>/<slug>-chapter-<N>-zn.txt`
//! - Collecting per-chapter outcomes into a run report
//! - Printing that report once the crawl is over

pub mod stats;
mod writer;

pub use stats::{print_report, CrawlReport};
pub use writer::ChapterWriter;
