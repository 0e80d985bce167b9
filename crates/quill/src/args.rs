use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "A local-first blog in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use a specific store directory instead of the default data dir
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, filtered, searched, and paginated
    #[command(alias = "ls")]
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only this author
        #[arg(short, long)]
        author: Option<String>,

        /// Only posts carrying any of these tags (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Search term (title and content by default)
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// View a single post
    #[command(alias = "v")]
    View {
        /// Post id
        id: String,
    },

    /// Create a post
    #[command(alias = "n")]
    New {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Post body (markdown). Reads stdin when omitted.
        #[arg(long)]
        content: Option<String>,

        #[arg(long, default_value = "general")]
        category: String,

        /// Repeatable; at least one is required
        #[arg(long)]
        tag: Vec<String>,

        /// Optional image reference (jpeg, png, or gif)
        #[arg(long)]
        image: Option<String>,

        /// Publish immediately
        #[arg(long)]
        publish: bool,
    },

    /// Edit fields of an existing post
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Replaces the tag list when given
        #[arg(long)]
        tag: Vec<String>,

        #[arg(long)]
        publish: bool,
    },

    /// Delete a post (and its likes, comments, and draft)
    #[command(alias = "rm")]
    Delete {
        id: String,
    },

    /// Toggle your like on a post
    Like {
        id: String,
    },

    /// Show a post's comment thread
    Comments {
        id: String,

        /// Sort order: newest, oldest, most-replies
        #[arg(long, default_value = "newest")]
        sort: String,
    },

    /// Comment on a post, or reply to / edit a comment
    Comment {
        id: String,

        /// Comment text
        text: String,

        /// Reply to this comment id instead of starting a new thread entry
        #[arg(long, value_name = "COMMENT_ID")]
        reply_to: Option<u64>,

        /// Edit this comment id in place instead of appending
        #[arg(long, value_name = "COMMENT_ID", conflicts_with = "reply_to")]
        edit: Option<u64>,
    },

    /// Show the facet options (categories, authors, tags)
    Facets,
}
