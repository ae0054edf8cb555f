//! URL handling module for Chapter Crawler
//!
//! This module turns a novel title into its slug and builds the chapter page
//! URLs and file names derived from it.

mod slug;

pub use slug::normalize_slug;

/// Builds the page URL for one chapter
///
/// The template is `<base_url>/chapter/<slug>-chapter-<N>`. A trailing slash on
/// `base_url` is ignored.
///
/// # Examples
///
/// ```
/// use chapter_crawler::url::chapter_url;
///
/// let url = chapter_url("https://lnmtl.com", "emperor-s-domination", 12);
/// assert_eq!(url, "https://lnmtl.com/chapter/emperor-s-domination-chapter-12");
/// ```
pub fn chapter_url(base_url: &str, slug: &str, chapter_number: u32) -> String {
    format!(
        "{}/chapter/{}-chapter-{}",
        base_url.trim_end_matches('/'),
        slug,
        chapter_number
    )
}

/// File name a chapter is stored under: `<slug>-chapter-<N>-zn.txt`
pub fn chapter_file_name(slug: &str, chapter_number: u32) -> String {
    format!("{}-chapter-{}-zn.txt", slug, chapter_number)
}
