//! # Comment Table
//!
//! Per-post comment threads persisted under `comments-<postId>`, independent
//! of the main document. Mutations: append a top-level comment, append a
//! reply to a specific comment (one nesting level only), and edit a
//! comment's text in place. Edits and replies never alter the original
//! timestamp.
//!
//! Sorting is a *view* concern: [`sort_comments`] reorders a copy for
//! display, storage order is append order and never changes.

use crate::error::{QuillError, Result};
use crate::keys;
use crate::model::{Comment, Reply};
use crate::store::KvBackend;
use chrono::Utc;

/// Display order for a comment thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSort {
    #[default]
    Newest,
    Oldest,
    MostReplies,
}

/// Keyed table view over the shared backend. Construct one on demand via
/// [`crate::api::BlogApi::comments`].
pub struct CommentTable<'a, B: KvBackend> {
    backend: &'a B,
}

impl<'a, B: KvBackend> CommentTable<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// The thread in storage (append) order. A malformed document is logged
    /// and treated as empty rather than raised.
    pub fn list(&self, post_id: u64) -> Result<Vec<Comment>> {
        match self.backend.read(&keys::comments(post_id))? {
            None => Ok(Vec::new()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(comments) => Ok(comments),
                Err(err) => {
                    log::warn!("comment thread for post {} is malformed ({})", post_id, err);
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Append a top-level comment. Text is trimmed; empty text is rejected.
    pub fn add(&self, post_id: u64, text: &str) -> Result<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuillError::EmptyComment);
        }

        let mut comments = self.list(post_id)?;
        let comment = Comment {
            id: next_thread_id(&comments),
            text: text.to_string(),
            timestamp: Utc::now(),
            replies: Vec::new(),
        };
        comments.push(comment.clone());
        self.save(post_id, &comments)?;
        Ok(comment)
    }

    /// Append a reply under `comment_id`. Replies are leaves: they cannot be
    /// replied to, which is what keeps the thread one level deep.
    pub fn reply(&self, post_id: u64, comment_id: u64, text: &str) -> Result<Reply> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuillError::EmptyComment);
        }

        let mut comments = self.list(post_id)?;
        let reply = Reply {
            id: next_thread_id(&comments),
            text: text.to_string(),
            timestamp: Utc::now(),
        };

        let parent = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(QuillError::CommentNotFound(comment_id))?;
        parent.replies.push(reply.clone());

        self.save(post_id, &comments)?;
        Ok(reply)
    }

    /// Replace a comment's text in place. The timestamp is untouched: the
    /// thread keeps its original chronology.
    pub fn edit(&self, post_id: u64, comment_id: u64, text: &str) -> Result<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuillError::EmptyComment);
        }

        let mut comments = self.list(post_id)?;
        let comment = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(QuillError::CommentNotFound(comment_id))?;
        comment.text = text.to_string();
        let edited = comment.clone();

        self.save(post_id, &comments)?;
        Ok(edited)
    }

    /// Drop a post's thread (post deletion cleanup).
    pub fn clear(&self, post_id: u64) -> Result<()> {
        self.backend.remove(&keys::comments(post_id))
    }

    fn save(&self, post_id: u64, comments: &[Comment]) -> Result<()> {
        let document = serde_json::to_string(comments)?;
        self.backend.write(&keys::comments(post_id), &document)
    }
}

/// Next id within a thread: unique across comments and replies.
fn next_thread_id(comments: &[Comment]) -> u64 {
    comments
        .iter()
        .flat_map(|c| std::iter::once(c.id).chain(c.replies.iter().map(|r| r.id)))
        .max()
        .unwrap_or(0)
        + 1
}

/// Reorder a thread for display. Storage order is never touched.
pub fn sort_comments(comments: &[Comment], sort: CommentSort) -> Vec<Comment> {
    let mut view = comments.to_vec();
    match sort {
        CommentSort::Newest => view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        CommentSort::Oldest => view.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        CommentSort::MostReplies => view.sort_by(|a, b| b.replies.len().cmp(&a.replies.len())),
    }
    view
}
