//! # Like Counter Table
//!
//! Per-post like state persisted under entity-scoped keys (`likes-<id>`,
//! `isLiked-<id>`), independent of the main `blog_posts` document. The
//! count key holds a bare integer string, the flag key `"true"`/`"false"`,
//! matching documents written by earlier versions of the app.

use crate::error::Result;
use crate::keys;
use crate::store::KvBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub count: i64,
    /// Whether this profile has liked the post.
    pub liked: bool,
}

/// Keyed table view over the shared backend. Construct one on demand via
/// [`crate::api::BlogApi::likes`].
pub struct LikeTable<'a, B: KvBackend> {
    backend: &'a B,
}

impl<'a, B: KvBackend> LikeTable<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Current like state for a post. `initial` is the post's baseline count,
    /// used until the first toggle persists a value. Unparseable stored
    /// values fall back to the baseline rather than erroring.
    pub fn get(&self, post_id: u64, initial: i64) -> Result<LikeState> {
        let count = match self.backend.read(&keys::likes(post_id))? {
            None => initial,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("stored like count for post {} is not an integer", post_id);
                initial
            }),
        };
        let liked = matches!(self.backend.read(&keys::is_liked(post_id))?.as_deref(), Some("true"));
        Ok(LikeState { count, liked })
    }

    /// Flip the liked flag and adjust the count, atomically within one call:
    /// both keys are rewritten before returning. Toggling twice restores the
    /// original state.
    pub fn toggle(&self, post_id: u64, initial: i64) -> Result<LikeState> {
        let current = self.get(post_id, initial)?;
        let next = LikeState {
            liked: !current.liked,
            count: if current.liked { current.count - 1 } else { current.count + 1 },
        };

        self.backend.write(&keys::likes(post_id), &next.count.to_string())?;
        self.backend
            .write(&keys::is_liked(post_id), if next.liked { "true" } else { "false" })?;
        Ok(next)
    }

    /// Drop a post's like keys (post deletion cleanup).
    pub fn clear(&self, post_id: u64) -> Result<()> {
        self.backend.remove(&keys::likes(post_id))?;
        self.backend.remove(&keys::is_liked(post_id))
    }
}
