use crate::e2e::helpers;

use chrono::{Duration, NaiveDate};
use cnc_daily::error::AppError;
use helpers::{fixtures, FeedEntry, TestContext};
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_published_posts_as_cards(ctx: &mut TestContext) {
    ctx.add_category("Art", &["/feeds/art"]);
    ctx.publish_feed(
        "/feeds/art",
        &[FeedEntry::new("Birds in a spiral", "Tue, 30 Apr 2024 08:00:00 GMT")],
    );

    ctx.run().await.unwrap();

    let homepage = ctx.read_homepage().unwrap();
    assert_eq!(homepage.matches("<article>").count(), 1);
    assert!(!homepage.contains("<!-- POSTS_INJECT -->"));
    assert!(homepage.contains("<span>Art</span><span>·</span><span>2024-05-01</span>"));
    assert!(homepage.contains(&format!(
        r#"<a href="{}" target="_blank" rel="noopener">Birds in a spiral</a>"#,
        ctx.article_url("Birds in a spiral")
    )));
    assert!(homepage.contains(&format!(
        r#"<img alt="" src="{}" />"#,
        ctx.image_url("Birds in a spiral")
    )));
    assert!(homepage.contains("<p>A short summary of Birds in a spiral.</p>"));
    assert!(homepage.contains("<strong>Original:</strong>"));
    assert!(homepage.starts_with("<!doctype html>"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_overwrite_the_same_post_on_a_second_run(ctx: &mut TestContext) {
    ctx.add_category("Art", &["/feeds/art"]);
    ctx.publish_feed(
        "/feeds/art",
        &[FeedEntry::new("Birds in a spiral", "Tue, 30 Apr 2024 08:00:00 GMT")],
    );

    ctx.run().await.unwrap();
    let first = ctx.read_post("Birds in a spiral").unwrap();
    ctx.run().await.unwrap();

    assert_eq!(ctx.post_count(), 1);
    assert_eq!(ctx.read_post("Birds in a spiral").unwrap(), first);
    let homepage = ctx.read_homepage().unwrap();
    assert_eq!(homepage.matches("<article>").count(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_only_the_fifty_newest_posts(ctx: &mut TestContext) {
    let posts_dir = ctx.posts_dir();
    std::fs::create_dir_all(&posts_dir).unwrap();
    let first_day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    for n in 0..51 {
        let date = first_day + Duration::days(n);
        let title = format!("Stored {}", n);
        std::fs::write(
            posts_dir.join(format!("{}-stored-{}.md", date, n)),
            fixtures::stored_post(&title, &date.to_string(), "Art"),
        )
        .unwrap();
    }
    ctx.add_category("Technology", &["/feeds/tech"]);
    ctx.publish_feed(
        "/feeds/tech",
        &[FeedEntry::new("New chips", "Tue, 30 Apr 2024 09:00:00 GMT")],
    );

    ctx.run().await.unwrap();

    let homepage = ctx.read_homepage().unwrap();
    assert_eq!(homepage.matches("<article>").count(), 50);
    assert!(homepage.contains(">New chips</a>"));
    assert!(homepage.contains(">Stored 50</a>"));
    assert!(homepage.contains(">Stored 2</a>"));
    assert!(!homepage.contains(">Stored 1</a>"));
    assert!(!homepage.contains(">Stored 0</a>"));

    let newest = homepage.find(">New chips</a>").unwrap();
    let stored = homepage.find(">Stored 50</a>").unwrap();
    assert!(newest < stored);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_the_run_when_the_template_is_missing(ctx: &mut TestContext) {
    ctx.add_category("Art", &["/feeds/art"]);
    ctx.publish_feed(
        "/feeds/art",
        &[FeedEntry::new("Birds in a spiral", "Tue, 30 Apr 2024 08:00:00 GMT")],
    );
    std::fs::remove_file(&ctx.config.homepage_template).unwrap();

    let result = ctx.run().await;

    assert!(matches!(result, Err(AppError::Template(_))));
    assert!(ctx.post_path("Birds in a spiral").exists());
    assert!(!ctx.homepage_path().exists());
}
