//! HTML parser for extracting chapter text
//!
//! Chapter pages mark every original-language sentence as
//! `<sentence class="original">`. The extractor collects those elements in
//! document order and glues their text together.

use scraper::{ElementRef, Html, Selector};

/// Selector for original-language sentences; `.original` matches the class
/// token, so `class="original foo"` is found as well
const ORIGINAL_SENTENCE_SELECTOR: &str = "sentence.original";

/// Chapter text extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterContent {
    pub chapter_number: u32,
    pub text: String,
}

impl ChapterContent {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Extracts the chapter text from page markup
///
/// # Outcomes
///
/// | Input | Result |
/// |-------|--------|
/// | `None` (fetch failed) | `None` |
/// | Markup without `sentence.original` | `Some("")` |
/// | Markup with matches | `Some(concatenated text)` |
///
/// Each sentence contributes its trimmed text nodes, joined without a
/// separator, and sentences are joined without a separator as well.
///
/// # Example
///
/// ```
/// use chapter_crawler::crawler::extract_chapter_text;
///
/// let html = r#"<sentence class="original">你好</sentence><sentence class="original">世界</sentence>"#;
/// assert_eq!(extract_chapter_text(Some(html)), Some("你好世界".to_string()));
/// assert_eq!(extract_chapter_text(Some("<p>nothing</p>")), Some(String::new()));
/// assert_eq!(extract_chapter_text(None), None);
/// ```
pub fn extract_chapter_text(markup: Option<&str>) -> Option<String> {
    let markup = markup?;
    let document = Html::parse_document(markup);

    let Ok(selector) = Selector::parse(ORIGINAL_SENTENCE_SELECTOR) else {
        return Some(String::new());
    };

    Some(
        document
            .select(&selector)
            .map(|element| sentence_text(&element))
            .collect(),
    )
}

/// Text of a single sentence element with every text node trimmed
fn sentence_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
