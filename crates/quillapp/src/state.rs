//! # Blog State and Transition Function
//!
//! The post collection is modeled as an explicit state machine: a value type
//! [`BlogState`], an [`Action`] enum, and one pure transition function
//! [`reduce`]. The transition function is the only mutator of the
//! collection; everything around it (persistence, facet refresh) is driven
//! by [`crate::store::post_store::PostStore`] after each transition.
//!
//! `reduce` is synchronous and total. The action enum makes unrecognized
//! actions unrepresentable; for actions that reference a missing id
//! (`UpdatePost`, `DeletePost` on an absent post) the transition degrades to
//! the identity, never an error.

use crate::model::Post;

/// The canonical in-memory state: the post collection plus the facet lists
/// and transient load/error flags derived alongside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogState {
    pub posts: Vec<Post>,
    /// Distinct categories of the current collection, first-seen order.
    pub categories: Vec<String>,
    /// Distinct tags of the current collection, first-seen order.
    pub tags: Vec<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Sentinel category for posts that carry none.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLoading(bool),
    SetError(Option<String>),
    /// Bulk replace of the collection (load / reload).
    SetPosts(Vec<Post>),
    /// Prepend: a new post is always the newest and lists first.
    AddPost(Post),
    /// Replace the post with the same id; identity if the id is absent.
    UpdatePost(Post),
    /// Remove by id; identity if the id is absent.
    DeletePost(u64),
    SetCategories(Vec<String>),
    SetTags(Vec<String>),
}

impl Action {
    /// Whether the action changes the post collection itself, and therefore
    /// requires a write-through and a facet refresh.
    pub fn mutates_posts(&self) -> bool {
        matches!(
            self,
            Action::SetPosts(_) | Action::AddPost(_) | Action::UpdatePost(_) | Action::DeletePost(_)
        )
    }
}

/// The pure transition function: `(state, action) -> state'`.
pub fn reduce(state: BlogState, action: Action) -> BlogState {
    match action {
        Action::SetLoading(flag) => BlogState {
            is_loading: flag,
            ..state
        },
        Action::SetError(error) => BlogState {
            error,
            is_loading: false,
            ..state
        },
        Action::SetPosts(posts) => BlogState {
            posts,
            is_loading: false,
            ..state
        },
        Action::AddPost(post) => {
            let mut posts = Vec::with_capacity(state.posts.len() + 1);
            posts.push(post);
            posts.extend(state.posts);
            BlogState { posts, ..state }
        }
        Action::UpdatePost(updated) => {
            let posts = state
                .posts
                .into_iter()
                .map(|post| if post.id == updated.id { updated.clone() } else { post })
                .collect();
            BlogState { posts, ..state }
        }
        Action::DeletePost(id) => {
            let posts = state.posts.into_iter().filter(|post| post.id != id).collect();
            BlogState { posts, ..state }
        }
        Action::SetCategories(categories) => BlogState { categories, ..state },
        Action::SetTags(tags) => BlogState { tags, ..state },
    }
}

/// Distinct categories of `posts`, first-seen order, with missing categories
/// collapsed into the [`UNCATEGORIZED`] sentinel.
pub fn derive_categories(posts: &[Post]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for post in posts {
        let category = if post.category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            post.category.clone()
        };
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Distinct tags of `posts`, first-seen order.
pub fn derive_tags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for post in posts {
        for tag in &post.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}
