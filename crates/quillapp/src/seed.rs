//! Built-in seed content, used only when the persisted collection is absent
//! or unreadable. An explicitly emptied collection is respected and never
//! reseeded (see [`crate::store::post_store::PostStore::load`]).

use crate::model::Post;
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn post(
    id: u64,
    title: &str,
    content: &str,
    author: &str,
    date: DateTime<Utc>,
    category: &str,
    tags: &[&str],
    likes: i64,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        date,
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: None,
        is_published: true,
        likes,
        comments: Vec::new(),
    }
}

/// A fresh copy of the default collection, newest first. Spread across
/// several categories, authors, and tags so every facet has something to
/// offer on first run.
pub fn seed_posts() -> Vec<Post> {
    vec![
        post(
            6,
            "Understanding the borrow checker",
            "The borrow checker is not an obstacle course, it is a proof \
             assistant for memory safety. This post walks through the three \
             rules that cover almost every error you will ever see, with \
             small examples you can paste into the playground.",
            "Ada Moreno",
            at(2024, 6, 18),
            "rust",
            &["rust", "memory", "beginners"],
            14,
        ),
        post(
            5,
            "CSS grid for people who gave up on CSS",
            "Grid finally makes two-dimensional layout declarative. We build \
             the classic holy grail layout in twelve lines, then break it on \
             purpose to see how the auto-placement algorithm reflows items \
             when the viewport shrinks below the first breakpoint.",
            "Priya Nair",
            at(2024, 5, 30),
            "css",
            &["css", "layout"],
            9,
        ),
        post(
            4,
            "Debouncing user input without a library",
            "Every JavaScript search box eventually grows a debounce. Instead of \
             reaching for a utility belt, we write the timer logic by hand, \
             cancel stale timers on every keystroke, and prove that only the \
             last one can ever fire. The whole thing fits in twenty lines.",
            "Ada Moreno",
            at(2024, 4, 12),
            "javascript",
            &["javascript", "patterns", "search"],
            21,
        ),
        post(
            3,
            "Markdown pipelines that stay fast",
            "Rendering markdown on every keystroke feels fine until the \
             document hits a few thousand lines. We measure where the time \
             actually goes, cache the parse by block, and get live preview \
             latency back under one frame on a mid-range laptop.",
            "Jonas Falk",
            at(2024, 3, 3),
            "javascript",
            &["markdown", "performance"],
            7,
        ),
        post(
            2,
            "A field guide to local-first storage",
            "Key-value stores in the browser look trivial until you care \
             about crash consistency. This guide compares whole-document \
             snapshots against incremental logs, and explains why a small \
             blog is better served by rewriting one JSON blob per mutation.",
            "Priya Nair",
            at(2024, 2, 14),
            "general",
            &["storage", "offline", "patterns"],
            11,
        ),
        post(
            1,
            "Welcome to quill",
            "Everything you read here lives entirely in your own profile: \
             posts, likes, comments, and drafts are plain documents in a \
             local store. Delete them all and the seed content will not come \
             back. This first post exists so the list, the filters, and the \
             search have something to chew on.",
            "Jonas Falk",
            at(2024, 1, 5),
            "general",
            &["meta"],
            3,
        ),
    ]
}
