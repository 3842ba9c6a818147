use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::sync::LazyLock;

static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^title:[ \t]*"((?:[^"\\\n]|\\.)+)""#).unwrap());
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^date:[ \t]*([0-9-]+)").unwrap());
static CATEGORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^category:[ \t]*([^\n]+)").unwrap());
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^image:[ \t]*([^\n]+)").unwrap());
static SOURCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^source:[ \t]*([^\n]+)").unwrap());

/// Fields of a stored post needed to render its homepage card
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub title: String,
    pub date: String,
    pub category: String,
    pub image: String,
    pub source: String,
    /// Markdown following the front-matter block
    pub body: String,
}

impl PostCard {
    /// Read the card fields back from a post file.
    ///
    /// Missing fields fall back to `Untitled` for the title, `#` for the
    /// source and empty strings otherwise.
    pub fn from_markdown(content: &str) -> Self {
        let capture = |pattern: &Regex| {
            pattern
                .captures(content)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        };

        let body = content.split("---\n").skip(2).collect::<Vec<_>>().join("---\n");

        Self {
            title: capture(&TITLE_PATTERN)
                .map(|t| unescape_title(&t))
                .unwrap_or_else(|| "Untitled".to_string()),
            date: capture(&DATE_PATTERN).unwrap_or_default(),
            category: capture(&CATEGORY_PATTERN).unwrap_or_default(),
            image: capture(&IMAGE_PATTERN).unwrap_or_default(),
            source: capture(&SOURCE_PATTERN).unwrap_or_else(|| "#".to_string()),
            body,
        }
    }

    pub fn to_html(&self) -> String {
        let mut body_html = String::new();
        html::push_html(&mut body_html, Parser::new(&self.body));

        format!(
            r#"
      <article>
        <img alt="" src="{image}" />
        <div class="pad">
          <div class="meta"><span>{category}</span><span>·</span><span>{date}</span></div>
          <h2><a href="{source}" target="_blank" rel="noopener">{title}</a></h2>
          <div>{body}</div>
        </div>
      </article>"#,
            image = escape_attribute(&self.image),
            category = escape_text(&self.category),
            date = escape_text(&self.date),
            source = escape_attribute(&self.source),
            title = escape_text(&self.title),
            body = body_html,
        )
    }
}

/// Undo the front-matter escaping: `\x` stands for `x`
fn unescape_title(raw: &str) -> String {
    let mut title = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                title.push(escaped);
            }
        } else {
            title.push(c);
        }
    }
    title
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
