//! # Storage Layer
//!
//! The storage abstraction for quill. The [`backend::KvBackend`] trait is the
//! sole I/O boundary: synchronous string key/value reads and writes against a
//! client-scoped store.
//!
//! ## Architecture
//!
//! One backend carries several independent documents (see [`crate::keys`]):
//!
//! 1. **Main document**: the whole post collection under `blog_posts`,
//!    rewritten in full by [`post_store::PostStore`] after every transition.
//! 2. **Side tables**: per-entity keys for likes, comments, and drafts,
//!    written by their own tables on their own cadence and never conflated
//!    with the main collection's mutation log.
//!
//! ## Consistency model
//!
//! Writes are synchronous and atomic from the caller's perspective (the
//! filesystem backend writes tmp-then-rename), so a transition and its
//! follow-on persistence are observed in dispatch order. Concurrent
//! processes sharing a store root race last-writer-wins with no versioning;
//! an accepted limitation for a single-user local tool.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key under a root directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod post_store;

pub use backend::KvBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use post_store::PostStore;
