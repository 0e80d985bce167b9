//! # Search Engine
//!
//! Two halves, deliberately separated:
//!
//! - [`search_posts`]: the pure matcher. Case-insensitive substring match
//!   against a configurable field list; a post matches when any field
//!   matches; the empty term matches everything.
//! - [`DebouncedSearch`]: the stateful debounce machine that decides *when*
//!   the matcher runs. The raw term updates on every keystroke; each
//!   keystroke restarts a fixed-delay deadline, and only an uninterrupted
//!   deadline advances the debounced term.
//!
//! The debouncer is an explicit cancellable-timer state machine driven by an
//! injected [`Instant`] clock rather than a real event loop: the owner calls
//! [`DebouncedSearch::poll`] with "now" and recomputes results only when it
//! fires. Rescheduling cancels the prior deadline, so only the most recent
//! keystroke's timer can ever fire and results are never applied out of
//! order. [`DebouncedSearch::cancel`] covers teardown.

use crate::model::Post;
use std::time::{Duration, Instant};

/// A searchable post field. The typed accessor is what makes "non-string
/// field values never match" hold structurally: only string-valued fields
/// are representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Content,
    Author,
    Category,
}

impl SearchField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "content" => Some(Self::Content),
            "author" => Some(Self::Author),
            "category" => Some(Self::Category),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Author => "author",
            Self::Category => "category",
        }
    }

    fn value_of<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            Self::Title => &post.title,
            Self::Content => &post.content,
            Self::Author => &post.author,
            Self::Category => &post.category,
        }
    }
}

/// Pure matcher. Total: never errors, the empty term returns everything.
pub fn search_posts(posts: &[Post], term: &str, fields: &[SearchField]) -> Vec<Post> {
    if term.is_empty() {
        return posts.to_vec();
    }
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            fields
                .iter()
                .any(|field| field.value_of(post).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Logical phase of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Term empty, nothing pending.
    Idle,
    /// Term changed, debounce deadline running.
    Pending,
    /// Debounced term applied; results reflect it.
    Settled,
}

/// Debounced search session.
///
/// The display flag and the display data are intentionally decoupled:
/// [`DebouncedSearch::is_searching`] follows the raw term (what the user
/// sees in the input box), while results are computed from the debounced
/// term only.
#[derive(Debug, Clone)]
pub struct DebouncedSearch {
    raw: String,
    debounced: String,
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebouncedSearch {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw: String::new(),
            debounced: String::new(),
            delay,
            deadline: None,
        }
    }

    /// Record a keystroke at `now`. The raw term updates immediately; the
    /// deadline restarts, invalidating any prior one.
    pub fn input(&mut self, term: impl Into<String>, now: Instant) {
        self.raw = term.into();
        self.deadline = Some(now + self.delay);
    }

    /// Check the deadline at `now`. Fires at most once per scheduled
    /// deadline; a fire advances the debounced term, which is the owner's
    /// cue to recompute results.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.debounced = self.raw.clone();
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Teardown: clear any pending deadline so no state update can happen
    /// after the owner goes away.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The term as typed, updated on every keystroke.
    pub fn raw_term(&self) -> &str {
        &self.raw
    }

    /// The settled term results are computed from.
    pub fn term(&self) -> &str {
        &self.debounced
    }

    /// True whenever the raw term is non-empty, independent of debounce
    /// state.
    pub fn is_searching(&self) -> bool {
        !self.raw.is_empty()
    }

    /// True for the whole window between a keystroke and its deadline.
    pub fn is_loading(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn phase(&self) -> SearchPhase {
        if self.deadline.is_some() {
            SearchPhase::Pending
        } else if self.raw.is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Settled
        }
    }
}
