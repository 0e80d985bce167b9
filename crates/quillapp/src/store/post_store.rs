use super::backend::KvBackend;
use crate::error::Result;
use crate::keys;
use crate::seed;
use crate::state::{derive_categories, derive_tags, reduce, Action, BlogState};
use std::mem;

/// The canonical post store: owns the [`BlogState`] and the storage backend,
/// and funnels every mutation through the pure transition function.
///
/// After each post-mutating transition the store performs a write-through,
/// a full-collection overwrite of the `blog_posts` document (whole-document
/// snapshots at O(n) write cost), and recomputes the facet lists from the
/// current collection.
pub struct PostStore<B: KvBackend> {
    backend: B,
    state: BlogState,
}

impl<B: KvBackend> PostStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            state: BlogState::default(),
        }
    }

    pub fn state(&self) -> &BlogState {
        &self.state
    }

    /// The backend is shared with the keyed side tables (likes, comments,
    /// drafts), which persist under their own keys.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Next post id: unique and monotonically increasing over the current
    /// collection.
    pub fn next_id(&self) -> u64 {
        self.state.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Cold start: load the persisted collection, or seed it exactly once.
    ///
    /// - Absent document → the built-in seed collection, written back.
    /// - Present but empty array → stays empty. The user deleted everything;
    ///   the seed is NOT reapplied.
    /// - Malformed document → logged, replaced with the seed collection
    ///   rather than failing hard.
    pub fn load(&mut self) -> Result<()> {
        self.dispatch(Action::SetLoading(true))?;

        let posts = match self.backend.read(keys::POSTS)? {
            None => seed::seed_posts(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(posts) => posts,
                Err(err) => {
                    log::warn!(
                        "persisted {} document is malformed ({}), falling back to seed content",
                        keys::POSTS,
                        err
                    );
                    seed::seed_posts()
                }
            },
        };

        // SetPosts writes the document back, which covers the seed case.
        self.dispatch(Action::SetPosts(posts))?;
        self.dispatch(Action::SetLoading(false))?;
        Ok(())
    }

    /// Apply one transition. Post-mutating actions are followed by the
    /// write-through and a facet refresh, observed in dispatch order.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mutates = action.mutates_posts();
        self.state = reduce(mem::take(&mut self.state), action);

        if mutates {
            self.persist()?;
            self.refresh_facets();
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let document = serde_json::to_string(&self.state.posts)?;
        self.backend.write(keys::POSTS, &document)
    }

    fn refresh_facets(&mut self) {
        let categories = derive_categories(&self.state.posts);
        let tags = derive_tags(&self.state.posts);
        self.state = reduce(mem::take(&mut self.state), Action::SetCategories(categories));
        self.state = reduce(mem::take(&mut self.state), Action::SetTags(tags));
    }
}
