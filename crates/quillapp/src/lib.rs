//! # quillapp
//!
//! The data layer of a local-first blog: a reducer-driven post collection
//! with write-through persistence, a pure query pipeline (facet filter,
//! debounced search, pagination), and per-entity interaction tables (likes,
//! comments, drafts) persisted under their own keys.
//!
//! ## Layering
//!
//! - [`store`]: the [`store::KvBackend`] I/O boundary and the
//!   [`store::PostStore`] that owns the canonical state.
//! - [`state`]: the pure transition function `(state, action) -> state'`.
//! - [`filter`], [`search`], [`pagination`]: pure engines deriving the
//!   rendered view; `searched ⊆ filtered ⊆ posts` always.
//! - [`likes`], [`comments`], [`draft`]: keyed side tables over the same
//!   backend, independent of the main document.
//! - [`api`]: the [`api::BlogApi`] facade UI clients talk to.
//!
//! Rendering, routing, theming, and authentication are external
//! collaborators; they consume this crate through the facade and own their
//! own documents (see [`keys`]).

pub mod api;
pub mod comments;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod keys;
pub mod likes;
pub mod model;
pub mod pagination;
pub mod search;
pub mod seed;
pub mod state;
pub mod store;
pub mod validate;

pub use api::BlogApi;
pub use error::{QuillError, Result};
