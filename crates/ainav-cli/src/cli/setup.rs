use ainav::api::parse_page;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ainav",
    bin_name = "ainav",
    version = env!("AINAV_VERSION"),
    args_conflicts_with_subcommands = true
)]
#[command(about = "Browse a directory of AI tools and AI news", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub list: ListArgs,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Category id, or "全部" for every tool
    #[arg(short, long)]
    pub category: Option<String>,

    /// Subcategory id within the category
    #[arg(short, long = "sub")]
    pub subcategory: Option<String>,

    /// Search tool names and descriptions (overrides category filters)
    #[arg(short = 'q', long = "search")]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long, value_parser = parse_page)]
    pub page: Option<usize>,

    /// Tools per page (0 shows everything)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools (the default command)
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show the category tree with tool counts
    #[command(alias = "cats", display_order = 2)]
    Categories,

    /// List featured tools
    #[command(display_order = 3)]
    Featured,

    /// Show one tool
    #[command(alias = "v", display_order = 4)]
    Show {
        /// Tool id (e.g. chatgpt)
        id: String,
    },

    /// Add or remove a tool from favorites
    #[command(display_order = 10)]
    Fav {
        /// Tool id (e.g. claude)
        id: String,
    },

    /// List favorite tools
    #[command(display_order = 11)]
    Favs,

    /// Show recent searches
    #[command(display_order = 12)]
    History {
        /// Forget all recent searches
        #[arg(long)]
        clear: bool,
    },

    /// Toggle between the light and dark theme
    #[command(display_order = 13)]
    Theme {
        /// Print the current theme without changing it
        #[arg(long)]
        show: bool,
    },

    /// List AI news articles
    #[command(display_order = 20)]
    News {
        /// Article category, or "全部" for all
        #[arg(short, long)]
        category: Option<String>,

        /// Search title, excerpt and tags
        #[arg(short = 'q', long = "search")]
        search: Option<String>,

        /// Only featured articles
        #[arg(long)]
        featured: bool,
    },

    /// Read one article
    #[command(display_order = 21)]
    Read {
        /// Article id
        id: String,
    },

    /// Show configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g. page-size)
        key: Option<String>,

        /// Print a commented ainav.toml with every setting
        #[arg(long, conflicts_with = "key")]
        template: bool,
    },
}
