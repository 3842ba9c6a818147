/// Body of a full-length article page, long enough to be summarized
/// instead of the feed teaser
pub const LONG_ARTICLE: [&str; 4] = [
    "The installation fills the old granary with thousands of paper birds, each one folded by hand, suspended on threads of varying length, and arranged so that the flock appears to turn as visitors walk beneath it.",
    "The artist spent two winters collecting discarded newspapers from the town, sorting them by colour, and teaching volunteers from the local school how to fold the wings so they would catch the light.",
    "At dusk the overhead lamps are dimmed, the windows are opened, and a slow draught sets the birds swaying, which gives the spiral a restless, breathing quality that photographs struggle to capture.",
    "The show runs until the end of the summer, after which the birds will be unstrung, flattened, and returned to the recycling centre, a deliberate ending that the artist describes as part of the work.",
];

/// A feed entry served by the mock server
pub struct FeedEntry<'a> {
    pub title: &'a str,
    pub pub_date: &'a str,
    /// Paragraphs of the linked article page; a short stub when empty
    pub article: &'a [&'a str],
}

impl<'a> FeedEntry<'a> {
    pub fn new(title: &'a str, pub_date: &'a str) -> Self {
        Self {
            title,
            pub_date,
            article: &[],
        }
    }

    pub fn with_article(mut self, paragraphs: &'a [&'a str]) -> Self {
        self.article = paragraphs;
        self
    }
}

pub fn rss_document(channel: &str, items: &[(String, String, String)]) -> String {
    let items: String = items
        .iter()
        .map(|(title, link, pub_date)| {
            format!(
                "<item><title>{title}</title><link>{link}</link><pubDate>{pub_date}</pubDate>\
                 <description>&lt;p&gt;Teaser for {title}.&lt;/p&gt;</description></item>"
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>{channel}</title><link>https://example.com</link>
<description>{channel} news</description>{items}</channel></rss>"#
    )
}

/// Article page with the given paragraphs; without any, the page is too
/// short for its text to be preferred over the feed teaser
pub fn article_page(title: &str, og_image: &str, paragraphs: &[&str]) -> String {
    let body: String = if paragraphs.is_empty() {
        "<p>Short body.</p>".to_string()
    } else {
        paragraphs.iter().map(|p| format!("<p>{p}</p>\n")).collect()
    };

    format!(
        r#"<!doctype html><html><head><title>{title}</title>
<meta property="og:image" content="{og_image}" /></head>
<body><nav><a href="/">Home</a></nav>
<article><h1>{title}</h1>
<div class="entry-content">
{body}</div></article>
<footer>Copyright</footer></body></html>"#
    )
}

/// Front-matter post as written by an earlier run
pub fn stored_post(title: &str, date: &str, category: &str) -> String {
    format!(
        "---\ntitle: \"{title}\"\ndate: {date}\ncategory: {category}\nimage: assets/images/art.svg\nsource: https://example.com/{date}\n---\n**Original:** [{title}](https://example.com/{date})\n\nSummary of {title}.\n\n*Source: https://example.com/{date}*"
    )
}
