/// Converts a free-form novel title into its slug
///
/// # Normalization Steps
///
/// 1. Lowercase the title
/// 2. Replace every run of characters that are not ASCII letters or digits
///    with a single hyphen
/// 3. Strip leading and trailing hyphens
///
/// Any input is accepted; a title without letters or digits yields an empty
/// slug. Applying the function to its own output returns the output unchanged.
///
/// # Examples
///
/// ```
/// use chapter_crawler::url::normalize_slug;
///
/// assert_eq!(normalize_slug("Emperor's Domination"), "emperor-s-domination");
/// ```
pub fn normalize_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            // Hyphens are only emitted between two kept runs
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
