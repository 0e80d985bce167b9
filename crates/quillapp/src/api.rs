//! # API Facade
//!
//! [`BlogApi`] is a thin facade over the store, the engines, and the keyed
//! tables: the single entry point for every UI client. It dispatches,
//! normalizes inputs (route id strings to integers), and returns structured
//! types. Business rules live in the modules it delegates to; presentation
//! lives in whichever UI layer the store is injected into.
//!
//! ## The derived-view pipeline
//!
//! [`BlogApi::page`] derives the rendered listing in three pure stages:
//! filter → search → paginate. The invariants hold by construction:
//! `searched ⊆ filtered ⊆ posts`, and the displayed page is a slice of the
//! search results while a search is active, of the filtered list otherwise.
//!
//! ## Generic over the backend
//!
//! `BlogApi<B: KvBackend>` works against any backend: production uses
//! [`crate::store::FsBackend`], tests use [`crate::store::MemBackend`].

use crate::comments::CommentTable;
use crate::config::QuillConfig;
use crate::draft::{DraftSlot, DraftTable};
use crate::error::{QuillError, Result};
use crate::filter::{filter_posts, FacetOptions, FilterState};
use crate::likes::{LikeState, LikeTable};
use crate::model::{Post, PostInput};
use crate::pagination::{paginate, Page};
use crate::search::{search_posts, DebouncedSearch};
use crate::state::{Action, BlogState};
use crate::store::{KvBackend, PostStore};
use chrono::Utc;

pub struct BlogApi<B: KvBackend> {
    store: PostStore<B>,
    config: QuillConfig,
}

impl<B: KvBackend> BlogApi<B> {
    /// Open the blog on `backend`: performs the cold-start load-or-seed.
    pub fn open(backend: B, config: QuillConfig) -> Result<Self> {
        let mut store = PostStore::with_backend(backend);
        store.load()?;
        Ok(Self { store, config })
    }

    pub fn state(&self) -> &BlogState {
        self.store.state()
    }

    pub fn config(&self) -> &QuillConfig {
        &self.config
    }

    /// A debounce session configured with this blog's search delay.
    pub fn debouncer(&self) -> DebouncedSearch {
        DebouncedSearch::new(self.config.search_delay())
    }

    /// Facet options for the filter UI, always derived from the full
    /// collection.
    pub fn facet_options(&self) -> FacetOptions {
        FacetOptions::from_posts(&self.store.state().posts)
    }

    // --- Derived-view pipeline ---

    /// One rendered page: filter, then search with the session's settled
    /// term (shown only while the raw term is non-empty), then paginate.
    pub fn page(&self, filters: &FilterState, search: &DebouncedSearch, page: usize) -> Page<Post> {
        let term = if search.is_searching() { search.term() } else { "" };
        self.page_with_term(filters, term, page)
    }

    /// Same pipeline with an already-settled term, for callers without a
    /// live debounce session (batch UIs, tests).
    pub fn page_with_term(&self, filters: &FilterState, term: &str, page: usize) -> Page<Post> {
        let filtered = filter_posts(&self.store.state().posts, filters);
        let results = search_posts(&filtered, term, &self.config.search_fields());
        paginate(&results, page, self.config.page_size)
    }

    // --- Single post access ---

    pub fn get_post(&self, id: u64) -> Result<Post> {
        self.store
            .state()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(QuillError::PostNotFound(id))
    }

    /// The router hands over the id as a string; parse it and fetch.
    pub fn get_post_by_route(&self, raw_id: &str) -> Result<Post> {
        let id: u64 = raw_id
            .trim()
            .parse()
            .map_err(|_| QuillError::InvalidPostId(raw_id.to_string()))?;
        self.get_post(id)
    }

    // --- Mutations ---

    /// Validate and commit a new post. Validation failure blocks the commit
    /// and leaves the store untouched; success clears the new-post draft
    /// slot.
    pub fn create_post(&mut self, input: PostInput) -> Result<Post> {
        crate::validate::validate_post(&input).map_err(QuillError::Validation)?;

        let post = Post::from_input(self.store.next_id(), &input, Utc::now());
        self.store.dispatch(Action::AddPost(post.clone()))?;
        self.drafts().clear(DraftSlot::New)?;
        Ok(post)
    }

    /// Validate and commit an update to an existing post. Field replace,
    /// date refreshed; the post's draft slot is cleared on success.
    pub fn update_post(&mut self, id: u64, input: PostInput) -> Result<Post> {
        crate::validate::validate_post(&input).map_err(QuillError::Validation)?;

        let mut post = self.get_post(id)?;
        post.apply_input(&input, Utc::now());
        self.store.dispatch(Action::UpdatePost(post.clone()))?;
        self.drafts().clear(DraftSlot::Post(id))?;
        Ok(post)
    }

    /// Remove a post and its side-table documents (likes, comments, draft).
    pub fn delete_post(&mut self, id: u64) -> Result<()> {
        // Existence check first so a bad id surfaces as NotFound, not as a
        // silent identity transition.
        self.get_post(id)?;
        self.store.dispatch(Action::DeletePost(id))?;

        self.likes().clear(id)?;
        self.comments().clear(id)?;
        self.drafts().clear(DraftSlot::Post(id))?;
        Ok(())
    }

    // --- Interaction tables ---

    pub fn likes(&self) -> LikeTable<'_, B> {
        LikeTable::new(self.store.backend())
    }

    pub fn comments(&self) -> CommentTable<'_, B> {
        CommentTable::new(self.store.backend())
    }

    pub fn drafts(&self) -> DraftTable<'_, B> {
        DraftTable::new(self.store.backend())
    }

    /// Like state for a post, seeded with its baseline count.
    pub fn like_state(&self, id: u64) -> Result<LikeState> {
        let post = self.get_post(id)?;
        self.likes().get(id, post.likes)
    }

    /// Toggle the liked flag for a post.
    pub fn toggle_like(&self, id: u64) -> Result<LikeState> {
        let post = self.get_post(id)?;
        self.likes().toggle(id, post.likes)
    }
}
