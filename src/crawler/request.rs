use crate::url::normalize_slug;
use crate::CrawlError;
use std::ops::RangeInclusive;

/// A validated request to download a range of chapters
///
/// The slug is derived from the title once, at construction, and reused for
/// every URL and file name in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    title: String,
    slug: String,
    start_chapter: u32,
    end_chapter: u32,
}

impl CrawlRequest {
    /// Creates a request, rejecting `start < 1` and `end < start`
    pub fn new(
        title: impl Into<String>,
        start_chapter: u32,
        end_chapter: u32,
    ) -> Result<Self, CrawlError> {
        if start_chapter < 1 || end_chapter < start_chapter {
            return Err(CrawlError::InvalidRange {
                start: start_chapter,
                end: end_chapter,
            });
        }

        let title = title.into();
        let slug = normalize_slug(&title);

        Ok(Self {
            title,
            slug,
            start_chapter,
            end_chapter,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn start_chapter(&self) -> u32 {
        self.start_chapter
    }

    pub fn end_chapter(&self) -> u32 {
        self.end_chapter
    }

    /// Chapter numbers in the order they are crawled
    pub fn chapters(&self) -> RangeInclusive<u32> {
        self.start_chapter..=self.end_chapter
    }

    /// Number of chapters in the range
    pub fn chapter_count(&self) -> usize {
        (self.end_chapter - self.start_chapter) as usize + 1
    }
}
