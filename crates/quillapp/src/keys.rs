//! Persisted key layout.
//!
//! Every durable document lives under a string key in the [`crate::store`]
//! adapter. The layout is flat:
//!
//! | key | value |
//! |-----|-------|
//! | `blog_posts` | JSON array of [`crate::model::Post`] (the whole collection) |
//! | `postDraft` | JSON [`crate::model::PostInput`], draft for a brand-new post |
//! | `postDraft-<id>` | draft for an existing post |
//! | `comments-<id>` | JSON array of [`crate::model::Comment`] |
//! | `likes-<id>` | integer string |
//! | `isLiked-<id>` | `"true"` / `"false"` |
//! | `theme`, `blog_preferences`, `profile`, `auth_user` | owned by external collaborators |
//!
//! The side tables (`comments-*`, `likes-*`, `isLiked-*`, `postDraft-*`) are
//! deliberately independent of the `blog_posts` document: they are rewritten
//! on their own cadence and never participate in the post store's
//! write-through.

/// The whole post collection, rewritten in full after every transition.
pub const POSTS: &str = "blog_posts";

/// Draft slot for a post that does not exist yet.
pub const DRAFT: &str = "postDraft";

/// Theme document, owned by the theming layer.
pub const THEME: &str = "theme";

/// Preferences document, owned by the preferences layer.
pub const PREFERENCES: &str = "blog_preferences";

/// Profile document, owned by the profile page.
pub const PROFILE: &str = "profile";

/// Authenticated-user document, owned by the auth layer. Earlier versions
/// wrote the same object under both `auth_user` and `blog_user` on the login
/// path; `auth_user` is the one key that was ever read back, so it is the
/// only one published here.
pub const AUTH_USER: &str = "auth_user";

pub fn draft(post_id: u64) -> String {
    format!("{}-{}", DRAFT, post_id)
}

pub fn comments(post_id: u64) -> String {
    format!("comments-{}", post_id)
}

pub fn likes(post_id: u64) -> String {
    format!("likes-{}", post_id)
}

pub fn is_liked(post_id: u64) -> String {
    format!("isLiked-{}", post_id)
}
