//! # Filter Engine
//!
//! Pure facet filtering over the post collection. A facet left unset means
//! "all"; a post passes when every set facet matches. The tag facet is OR
//! across the selected tags, ANDed with category and author.

use crate::model::Post;
use std::collections::BTreeSet;

/// The current filter selection. `None` / empty set means the facet is
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<String>,
    pub author: Option<String>,
    pub tags: BTreeSet<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.author.is_none() && self.tags.is_empty()
    }
}

/// The facet option lists offered to a UI. Derived from the *input*
/// collection, not the filtered output, so selectable options never shrink
/// as a side effect of the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

impl FacetOptions {
    pub fn from_posts(posts: &[Post]) -> Self {
        let mut options = FacetOptions::default();
        for post in posts {
            if !post.category.is_empty() && !options.categories.contains(&post.category) {
                options.categories.push(post.category.clone());
            }
            if !options.authors.contains(&post.author) {
                options.authors.push(post.author.clone());
            }
            for tag in &post.tags {
                if !options.tags.contains(tag) {
                    options.tags.push(tag.clone());
                }
            }
        }
        options
    }
}

/// Pure facet filter: the result is always a subset of `posts`, and every
/// returned post satisfies every set facet.
pub fn filter_posts(posts: &[Post], filters: &FilterState) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| matches_filters(post, filters))
        .cloned()
        .collect()
}

fn matches_filters(post: &Post, filters: &FilterState) -> bool {
    let category_match = match &filters.category {
        None => true,
        Some(category) => &post.category == category,
    };
    let author_match = match &filters.author {
        None => true,
        Some(author) => &post.author == author,
    };
    // OR across selected tags, AND with the other facets.
    let tags_match =
        filters.tags.is_empty() || post.tags.iter().any(|tag| filters.tags.contains(tag));

    category_match && author_match && tags_match
}
