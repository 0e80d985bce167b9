//! # Domain Model
//!
//! Core data structures for quill: [`Post`], [`Comment`], [`Reply`], and the
//! editor-facing [`PostInput`] form.
//!
//! ## Identity
//!
//! Post ids are plain integers, unique within the collection and
//! monotonically increasing. They are assigned by the store at creation time
//! (`PostStore::next_id`), never by callers. Comment and reply ids follow the
//! same scheme but are scoped to a single post's thread.
//!
//! ## Persisted shape
//!
//! The whole collection is persisted as one JSON array under the
//! [`crate::keys::POSTS`] key. Field names are camelCase on the wire
//! (`isPublished`), matching documents written by earlier versions of the
//! app, and fields added over time carry `#[serde(default)]` so old
//! documents still load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    /// Markdown source. Rendering is a presentation concern and lives outside
    /// this crate.
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional image reference (path or URL).
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    /// Baseline like count shipped with the post. The live counter lives in
    /// its own keyed table, see [`crate::likes`].
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Build a post from a validated editor form. The store assigns the id;
    /// the date is the creation instant.
    pub fn from_input(id: u64, input: &PostInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title.trim().to_string(),
            content: input.content.clone(),
            author: input.author.trim().to_string(),
            date: now,
            category: input.category.clone(),
            tags: input.tags.clone(),
            image: input.image.clone(),
            is_published: input.is_published,
            likes: 0,
            comments: Vec::new(),
        }
    }

    /// Replace editable fields from a form, refreshing the date. Identity and
    /// interaction history (likes baseline, embedded comments) are kept.
    pub fn apply_input(&mut self, input: &PostInput, now: DateTime<Utc>) {
        self.title = input.title.trim().to_string();
        self.content = input.content.clone();
        self.author = input.author.trim().to_string();
        self.category = input.category.clone();
        self.tags = input.tags.clone();
        self.image = input.image.clone();
        self.is_published = input.is_published;
        self.date = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// One nesting level only; replies are not themselves repliable.
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: u64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// An in-progress post form, as produced by an editor. Also the unit stored
/// by the draft buffer, so it serializes with the same camelCase convention
/// as [`Post`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl PostInput {
    /// Pre-fill a form from an existing post, the editor's starting point
    /// when no draft takes precedence.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
            image: post.image.clone(),
            is_published: post.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post {
            id: 1,
            title: "Hello".into(),
            content: "Body".into(),
            author: "Ada".into(),
            date: ts(),
            category: "general".into(),
            tags: vec!["intro".into()],
            image: None,
            is_published: true,
            likes: 0,
            comments: Vec::new(),
        };

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"isPublished\":true"));
        assert!(!json.contains("is_published"));
    }

    #[test]
    fn test_legacy_post_without_new_fields() {
        // Documents written before image/isPublished/likes existed.
        let json = r#"{
            "id": 7,
            "title": "Old",
            "content": "Old body",
            "author": "Ada",
            "date": "2023-01-01T00:00:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.category, "");
        assert!(post.tags.is_empty());
        assert!(post.image.is_none());
        assert!(!post.is_published);
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_from_input_trims_and_zeroes_counters() {
        let input = PostInput {
            title: "  Spaced title  ".into(),
            content: "Body".into(),
            author: " Ada ".into(),
            category: "rust".into(),
            tags: vec!["t".into()],
            image: None,
            is_published: false,
        };

        let post = Post::from_input(9, &input, ts());
        assert_eq!(post.id, 9);
        assert_eq!(post.title, "Spaced title");
        assert_eq!(post.author, "Ada");
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_apply_input_keeps_identity_and_history() {
        let input = PostInput {
            title: "First".into(),
            content: "Body".into(),
            author: "Ada".into(),
            ..Default::default()
        };
        let mut post = Post::from_input(3, &input, ts());
        post.likes = 5;

        let later = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        let update = PostInput {
            title: "Second".into(),
            ..input
        };
        post.apply_input(&update, later);

        assert_eq!(post.id, 3);
        assert_eq!(post.title, "Second");
        assert_eq!(post.likes, 5);
        assert_eq!(post.date, later);
    }

    #[test]
    fn test_input_roundtrip_through_post() {
        let input = PostInput {
            title: "Round".into(),
            content: "Trip".into(),
            author: "Grace".into(),
            category: "css".into(),
            tags: vec!["a".into(), "b".into()],
            image: Some("cover.png".into()),
            is_published: true,
        };

        let post = Post::from_input(1, &input, ts());
        assert_eq!(PostInput::from_post(&post), input);
    }
}
