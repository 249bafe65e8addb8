//! Context setup and per-command handlers.
//!
//! `run()` parses arguments, installs logging, builds an [`AppContext`] and dispatches.
//! Handlers call one API method each and either render the [`CmdResult`] or, with
//! `--json`, print it as JSON.

use super::render::{
    print_article_tabs, print_articles, print_category_tree, print_config, print_full_article,
    print_heading, print_messages, print_page, print_recent_searches, print_tool_detail,
    print_tools,
};
use super::setup::{Cli, Commands, ListArgs};
use ainav::api::{AinavApi, ArticleQuery};
use ainav::commands::config::ConfigAction;
use ainav::commands::counts::category_total;
use ainav::commands::CmdResult;
use ainav::config::{home_dir, AinavConfig};
use ainav::error::Result;
use ainav::prefs::fs::JsonPrefsStore;
use ainav::selector::ALL_CATEGORY;
use ainav::store::builtin::BuiltinSource;
use ainav::store::fs::JsonDirSource;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: AinavApi<JsonPrefsStore>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List(args)) => handle_list(&mut ctx, args),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Featured) => handle_featured(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx, &id),
        Some(Commands::Favs) => handle_favs(&ctx),
        Some(Commands::History { clear }) => handle_history(&mut ctx, clear),
        Some(Commands::Theme { show }) => handle_theme(&mut ctx, show),
        Some(Commands::News {
            category,
            search,
            featured,
        }) => handle_news(&ctx, category, search, featured),
        Some(Commands::Read { id }) => handle_read(&ctx, &id),
        Some(Commands::Config { key, template }) => handle_config(&ctx, key, template),
        None => handle_list(&mut ctx, cli.list),
    }
}

/// Logs go to stderr so stdout stays clean for `--json`. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = home_dir()?;
    let config = AinavConfig::load(&home)?;
    debug!(home = %home.display(), ?config, "loaded configuration");

    let prefs = JsonPrefsStore::new(&home);
    let api = match config.catalog_dir.clone() {
        Some(dir) => AinavApi::from_source(&JsonDirSource::new(dir), prefs, config)?,
        None => AinavApi::from_source(&BuiltinSource, prefs, config)?,
    };

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

/// Prints `result` as JSON, or hands it to `render` followed by its messages.
fn emit(ctx: &AppContext, result: &CmdResult, render: impl FnOnce(&CmdResult)) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    render(result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let selector = ctx.api.selector_for(
        args.category.as_deref(),
        args.subcategory.as_deref(),
        args.search.as_deref(),
    );
    let mut request = ctx
        .api
        .tool_query(selector)
        .with_page(args.page.unwrap_or(1))
        .recording_history();
    if let Some(size) = args.page_size {
        request = request.with_page_size(size);
    }

    let result = ctx.api.list_tools(request)?;
    emit(ctx, &result, |r| {
        if let Some(heading) = &r.heading {
            print_heading(heading);
        }
        print_tools(&r.listed_tools);
        if let Some(info) = &r.page {
            print_page(info, &r.page_links);
        }
    })
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    emit(ctx, &result, |r| {
        let totals: Vec<usize> = r
            .categories
            .iter()
            .map(|c| category_total(&r.categories, &c.id))
            .collect();
        print_category_tree(&r.categories, &totals);
    })
}

fn handle_featured(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.featured_tools()?;
    emit(ctx, &result, |r| print_tools(&r.listed_tools))
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_tool(id)?;
    emit(ctx, &result, |r| {
        for dt in &r.listed_tools {
            print_tool_detail(&dt.tool, dt.is_favorite);
        }
    })
}

fn handle_fav(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.toggle_favorite(id)?;
    emit(ctx, &result, |_| {})
}

fn handle_favs(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.favorites()?;
    emit(ctx, &result, |r| print_tools(&r.listed_tools))
}

fn handle_history(ctx: &mut AppContext, clear: bool) -> Result<()> {
    let result = if clear {
        ctx.api.clear_search_history()?
    } else {
        ctx.api.search_history()?
    };
    emit(ctx, &result, |r| print_recent_searches(&r.recent_searches))
}

fn handle_theme(ctx: &mut AppContext, show: bool) -> Result<()> {
    let result = if show {
        ctx.api.theme()?
    } else {
        ctx.api.toggle_theme()?
    };
    emit(ctx, &result, |_| {})
}

fn handle_news(
    ctx: &AppContext,
    category: Option<String>,
    search: Option<String>,
    featured_only: bool,
) -> Result<()> {
    let request = ArticleQuery {
        category: category.unwrap_or_else(|| ALL_CATEGORY.to_string()),
        search,
        featured_only,
    };
    let result = ctx.api.list_articles(&request)?;
    emit(ctx, &result, |r| {
        print_article_tabs(&r.article_categories, &request.category);
        print_articles(&r.listed_articles);
    })
}

fn handle_read(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.read_article(id)?;
    emit(ctx, &result, |r| {
        for article in &r.listed_articles {
            print_full_article(article);
        }
    })
}

fn handle_config(ctx: &AppContext, key: Option<String>, template: bool) -> Result<()> {
    let action = match (key, template) {
        (_, true) => ConfigAction::Template,
        (Some(key), false) => ConfigAction::ShowKey(key),
        (None, false) => ConfigAction::ShowAll,
    };
    let result = ctx.api.config(action)?;
    emit(ctx, &result, |r| {
        if let Some(config) = &r.config {
            print_config(config);
        }
    })
}
