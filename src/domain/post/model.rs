use chrono::NaiveDate;

/// Longest slug kept in a post file name
pub const MAX_SLUG_CHARS: usize = 100;

/// A summarized article as persisted on disk
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedPost {
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub image: String,
    pub source: String,
    /// Markdown body following the front-matter block
    pub body: String,
}

impl PublishedPost {
    /// `{date}-{slug}.md`; identical title and day map to the same file
    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date.format("%Y-%m-%d"), slugify_title(&self.title))
    }

    pub fn to_markdown(&self) -> String {
        format!(
            "---\ntitle: \"{}\"\ndate: {}\ncategory: {}\nimage: {}\nsource: {}\n---\n{}",
            escape_title(&self.title),
            self.date.format("%Y-%m-%d"),
            self.category,
            self.image,
            self.source,
            self.body
        )
    }
}

/// Quote-safe title for the front-matter; backslashes first so the reader
/// can undo both escapes in one pass
fn escape_title(title: &str) -> String {
    title.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Lowercase ASCII slug of a title, capped at `MAX_SLUG_CHARS`.
///
/// Apostrophes vanish instead of splitting words, and `&` and `$` are
/// spelled out before the remaining punctuation becomes separators.
pub fn slugify_title(title: &str) -> String {
    let mut spelled = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            '\'' | '\u{2018}' | '\u{2019}' => {}
            '&' => spelled.push_str("and"),
            '$' => spelled.push_str("dollar"),
            c => spelled.push(c),
        }
    }

    let slug = slug::slugify(spelled);
    if slug.is_empty() {
        return "untitled".to_string();
    }
    // slugify output is pure ASCII, so byte and char counts agree
    slug.chars().take(MAX_SLUG_CHARS).collect()
}
