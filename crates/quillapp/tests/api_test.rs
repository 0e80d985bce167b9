use quillapp::config::QuillConfig;
use quillapp::draft::DraftSlot;
use quillapp::error::QuillError;
use quillapp::filter::FilterState;
use quillapp::model::PostInput;
use quillapp::store::MemBackend;
use quillapp::validate::Field;
use quillapp::BlogApi;
use std::time::{Duration, Instant};

fn valid_input(title: &str) -> PostInput {
    PostInput {
        title: title.into(),
        author: "Ada Moreno".into(),
        content: "word ".repeat(30),
        category: "rust".into(),
        tags: vec!["test".into()],
        image: None,
        is_published: true,
    }
}

fn open_blog() -> BlogApi<MemBackend> {
    BlogApi::open(MemBackend::new(), QuillConfig::default()).unwrap()
}

/// An api over twelve posts exactly, enough for three pages of five.
fn open_blog_with_twelve() -> BlogApi<MemBackend> {
    let mut api = open_blog();
    let have = api.state().posts.len();
    for i in have..12 {
        api.create_post(valid_input(&format!("Filler post {}", i))).unwrap();
    }
    assert_eq!(api.state().posts.len(), 12);
    api
}

#[test]
fn test_twelve_posts_page_size_five() {
    let api = open_blog_with_twelve();
    let filters = FilterState::default();

    let first = api.page_with_term(&filters, "", 1);
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.total_pages, 3);

    let last = api.page_with_term(&filters, "", 3);
    assert_eq!(last.items.len(), 2);
}

#[test]
fn test_short_title_blocks_commit_without_mutation() {
    let mut api = open_blog();
    let before = api.state().posts.clone();

    let err = api.create_post(valid_input("Hi")).unwrap_err();
    let QuillError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.get(Field::Title),
        Some("Title must be at least 5 characters")
    );

    // No store mutation occurred.
    assert_eq!(api.state().posts, before);
}

#[test]
fn test_debounce_collapses_rapid_keystrokes() {
    let api = open_blog();
    let mut session = api.debouncer();
    let filters = FilterState::default();
    let t0 = Instant::now();

    session.input("java", t0);
    session.input("javascript", t0 + Duration::from_millis(500));

    let mut recomputations = 0;
    let mut results = Vec::new();
    for ms in [600, 1000, 1500, 2000] {
        if session.poll(t0 + Duration::from_millis(ms)) {
            recomputations += 1;
            results = api.page(&filters, &session, 1).items;
        }
    }

    assert_eq!(recomputations, 1);
    assert_eq!(session.term(), "javascript");
    assert!(!results.is_empty());
    for post in &results {
        let haystack = format!("{} {}", post.title, post.content).to_lowercase();
        assert!(haystack.contains("javascript"));
    }
}

#[test]
fn test_double_like_restores_original_state() {
    let mut api = open_blog();
    let post = api.create_post(valid_input("A likable post")).unwrap();
    let original = api.like_state(post.id).unwrap();

    api.toggle_like(post.id).unwrap();
    let after_two = api.toggle_like(post.id).unwrap();

    assert_eq!(after_two.count, original.count);
    assert!(!after_two.liked);
}

#[test]
fn test_pipeline_subset_invariants() {
    let api = open_blog();
    let all = api.state().posts.clone();

    let filters = FilterState {
        category: Some("javascript".into()),
        ..Default::default()
    };
    let page = api.page_with_term(&filters, "debounce", 1);

    assert!(page.items.len() <= all.len());
    for post in &page.items {
        assert!(all.contains(post));
        assert_eq!(post.category, "javascript");
        let haystack = format!("{} {}", post.title, post.content).to_lowercase();
        assert!(haystack.contains("debounce"));
    }
}

#[test]
fn test_narrowing_never_strands_the_viewer() {
    let api = open_blog_with_twelve();
    let filters = FilterState::default();

    // Viewer sits on page 3, then searches something rare.
    let narrowed = api.page_with_term(&filters, "borrow checker", 3);
    assert!(narrowed.current_page <= narrowed.total_pages.max(1));
    assert!(narrowed.total_items <= 12);
    if narrowed.total_items > 0 {
        assert!(!narrowed.items.is_empty(), "clamped page shows results");
    }
}

#[test]
fn test_get_post_by_route() {
    let mut api = open_blog();
    let post = api.create_post(valid_input("Routed post")).unwrap();

    assert_eq!(api.get_post_by_route(&post.id.to_string()).unwrap(), post);

    assert!(matches!(
        api.get_post_by_route("999999"),
        Err(QuillError::PostNotFound(999999))
    ));
    assert!(matches!(
        api.get_post_by_route("not-a-number"),
        Err(QuillError::InvalidPostId(_))
    ));
}

#[test]
fn test_update_refreshes_date_and_keeps_id() {
    let mut api = open_blog();
    let post = api.create_post(valid_input("Original title")).unwrap();

    let mut input = valid_input("Updated title!");
    input.category = "general".into();
    let updated = api.update_post(post.id, input).unwrap();

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.title, "Updated title!");
    assert!(updated.date >= post.date);
    assert_eq!(api.get_post(post.id).unwrap(), updated);
}

#[test]
fn test_create_clears_new_draft_slot() {
    let mut api = open_blog();

    let input = valid_input("Drafted post");
    api.drafts().save(DraftSlot::New, &input).unwrap();
    api.create_post(input).unwrap();

    assert!(api.drafts().load(DraftSlot::New).unwrap().is_none());
}

#[test]
fn test_failed_commit_keeps_draft() {
    let mut api = open_blog();

    let input = valid_input("Hi");
    api.drafts().save(DraftSlot::New, &input).unwrap();
    assert!(api.create_post(input).is_err());

    // The draft survives a blocked commit.
    assert_eq!(
        api.drafts().load(DraftSlot::New).unwrap().unwrap().title,
        "Hi"
    );
}

#[test]
fn test_delete_cleans_side_tables() {
    let mut api = open_blog();
    let post = api.create_post(valid_input("Short lived")).unwrap();

    api.toggle_like(post.id).unwrap();
    api.comments().add(post.id, "nice one").unwrap();
    api.drafts()
        .save(DraftSlot::Post(post.id), &valid_input("wip edit"))
        .unwrap();

    api.delete_post(post.id).unwrap();

    assert!(matches!(
        api.get_post(post.id),
        Err(QuillError::PostNotFound(_))
    ));
    assert!(api.comments().list(post.id).unwrap().is_empty());
    assert!(api.drafts().load(DraftSlot::Post(post.id)).unwrap().is_none());
    let like = api.likes().get(post.id, 0).unwrap();
    assert_eq!(like.count, 0);
    assert!(!like.liked);
}

#[test]
fn test_delete_missing_post_is_not_found() {
    let mut api = open_blog();
    assert!(matches!(
        api.delete_post(424242),
        Err(QuillError::PostNotFound(424242))
    ));
}

#[test]
fn test_facet_options_follow_collection() {
    let mut api = open_blog();

    let mut input = valid_input("A zig post appears");
    input.category = "zig".into();
    input.tags = vec!["comptime".into()];
    api.create_post(input).unwrap();

    let options = api.facet_options();
    assert!(options.categories.contains(&"zig".to_string()));
    assert!(options.tags.contains(&"comptime".to_string()));
    assert!(options.authors.contains(&"Ada Moreno".to_string()));
}

#[test]
fn test_write_error_surfaces_from_cold_start() {
    let backend = MemBackend::new();
    backend.set_simulate_write_error(true);

    // The cold-start seed write-through propagates the backend error.
    assert!(BlogApi::open(backend, QuillConfig::default()).is_err());
}
