use anyhow::{bail, Context};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quillapp::comments::{sort_comments, CommentSort};
use quillapp::config::QuillConfig;
use quillapp::filter::FilterState;
use quillapp::model::{Post, PostInput};
use quillapp::pagination::Page;
use quillapp::store::FsBackend;
use quillapp::BlogApi;
use std::io::Read;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store_dir = match cli.store {
        Some(dir) => dir,
        None => default_store_dir()?,
    };

    let config = QuillConfig::load(&store_dir.join("quill.toml"))?;
    let backend = FsBackend::new(store_dir);
    let mut api = BlogApi::open(backend, config)?;

    match cli.command {
        Commands::List {
            category,
            author,
            tag,
            search,
            page,
        } => {
            let filters = FilterState {
                category,
                author,
                tags: tag.into_iter().collect(),
            };
            let term = search.unwrap_or_default();
            let listing = api.page_with_term(&filters, &term, page);
            print_listing(&listing, &term);
        }

        Commands::View { id } => {
            let post = api.get_post_by_route(&id)?;
            let likes = api.like_state(post.id)?;
            let comments = api.comments().list(post.id)?;
            print_post(&post, likes.count, comments.len());
        }

        Commands::New {
            title,
            author,
            content,
            category,
            tag,
            image,
            publish,
        } => {
            let content = match content {
                Some(text) => text,
                None => read_stdin()?,
            };
            let input = PostInput {
                title,
                author,
                content,
                category,
                tags: tag,
                image,
                is_published: publish,
            };
            let post = api.create_post(input)?;
            println!("Post created: {} (id {})", post.title.green(), post.id);
        }

        Commands::Edit {
            id,
            title,
            author,
            content,
            category,
            tag,
            publish,
        } => {
            let post = api.get_post_by_route(&id)?;
            let mut input = PostInput::from_post(&post);
            if let Some(title) = title {
                input.title = title;
            }
            if let Some(author) = author {
                input.author = author;
            }
            if let Some(content) = content {
                input.content = content;
            }
            if let Some(category) = category {
                input.category = category;
            }
            if !tag.is_empty() {
                input.tags = tag;
            }
            if publish {
                input.is_published = true;
            }
            let updated = api.update_post(post.id, input)?;
            println!("Post updated: {}", updated.title.green());
        }

        Commands::Delete { id } => {
            let post = api.get_post_by_route(&id)?;
            api.delete_post(post.id)?;
            println!("Post deleted: {}", post.title.red());
        }

        Commands::Like { id } => {
            let post = api.get_post_by_route(&id)?;
            let state = api.toggle_like(post.id)?;
            let verb = if state.liked { "Liked" } else { "Unliked" };
            println!("{} {} ({} likes)", verb, post.title.bold(), state.count);
        }

        Commands::Comments { id, sort } => {
            let post = api.get_post_by_route(&id)?;
            let sort = parse_sort(&sort)?;
            let thread = sort_comments(&api.comments().list(post.id)?, sort);
            print_thread(&post, &thread);
        }

        Commands::Comment {
            id,
            text,
            reply_to,
            edit,
        } => {
            let post = api.get_post_by_route(&id)?;
            if let Some(comment_id) = edit {
                api.comments().edit(post.id, comment_id, &text)?;
                println!("Comment {} updated", comment_id);
            } else if let Some(comment_id) = reply_to {
                api.comments().reply(post.id, comment_id, &text)?;
                println!("Reply added to comment {}", comment_id);
            } else {
                let comment = api.comments().add(post.id, &text)?;
                println!("Comment {} added on {}", comment.id, post.title.bold());
            }
        }

        Commands::Facets => {
            let options = api.facet_options();
            println!("{}", "Categories".bold());
            for c in &options.categories {
                println!("  {}", c);
            }
            println!("{}", "Authors".bold());
            for a in &options.authors {
                println!("  {}", a);
            }
            println!("{}", "Tags".bold());
            for t in &options.tags {
                println!("  {}", t);
            }
        }
    }

    Ok(())
}

fn default_store_dir() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "quill", "quill")
        .context("could not determine a data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading post content from stdin")?;
    Ok(buffer)
}

fn parse_sort(raw: &str) -> anyhow::Result<CommentSort> {
    match raw {
        "newest" => Ok(CommentSort::Newest),
        "oldest" => Ok(CommentSort::Oldest),
        "most-replies" => Ok(CommentSort::MostReplies),
        other => bail!("unknown sort order {:?} (expected newest, oldest, most-replies)", other),
    }
}

fn ago(date: chrono::DateTime<chrono::Utc>) -> String {
    let elapsed = (chrono::Utc::now() - date).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

fn print_listing(page: &Page<Post>, term: &str) {
    if page.items.is_empty() {
        if term.is_empty() {
            println!("No posts.");
        } else {
            println!("No posts matching {:?}.", term);
        }
        return;
    }

    for post in &page.items {
        let draft_marker = if post.is_published { "" } else { " [draft]" };
        println!(
            "{:>4}  {}{}  {} {} {}",
            post.id.to_string().yellow(),
            post.title.bold(),
            draft_marker.dimmed(),
            format!("by {}", post.author).cyan(),
            format!("[{}]", post.category).magenta(),
            ago(post.date).dimmed(),
        );
        if !post.tags.is_empty() {
            println!("      {}", post.tags.join(", ").dimmed());
        }
    }
    println!(
        "\npage {}/{} ({} posts)",
        page.current_page,
        page.total_pages.max(1),
        page.total_items
    );
}

fn print_post(post: &Post, likes: i64, comment_count: usize) {
    println!("{} {}", post.id.to_string().yellow(), post.title.bold());
    println!(
        "{} {} {}",
        format!("by {}", post.author).cyan(),
        format!("[{}]", post.category).magenta(),
        ago(post.date).dimmed()
    );
    if !post.tags.is_empty() {
        println!("{}", post.tags.join(", ").dimmed());
    }
    println!("{} likes, {} comments", likes, comment_count);
    println!("--------------------------------");
    println!("{}", post.content);
}

fn print_thread(post: &Post, thread: &[quillapp::model::Comment]) {
    println!("Comments on {}", post.title.bold());
    if thread.is_empty() {
        println!("  (none yet)");
        return;
    }
    for comment in thread {
        println!(
            "  {:>4}  {}  {}",
            comment.id.to_string().yellow(),
            comment.text,
            ago(comment.timestamp).dimmed()
        );
        for reply in &comment.replies {
            println!(
                "        {:>4}  {}  {}",
                reply.id.to_string().yellow(),
                reply.text,
                ago(reply.timestamp).dimmed()
            );
        }
    }
}
