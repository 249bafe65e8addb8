use ainav::commands::paginate::{PageInfo, PageLink};
use ainav::commands::title::Heading;
use ainav::commands::{CmdMessage, DisplayTool, MessageLevel};
use ainav::config::AinavConfig;
use ainav::model::{Article, Category, Tool};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 20;
const FAVORITE_MARKER: &str = "★";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_heading(heading: &Heading) {
    println!("{}", heading.title.bold());
    println!("{}", heading.subtitle.dimmed());
    println!();
}

pub(super) fn print_tools(tools: &[DisplayTool]) {
    for dt in tools {
        let idx_str = format!("{:>4}. ", dt.position);
        let marker = if dt.is_favorite {
            format!(" {}", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };

        let name = pad_to_width(&truncate_to_width(&dt.tool.name, NAME_WIDTH), NAME_WIDTH);
        let fixed_width = idx_str.width() + NAME_WIDTH + 1 + marker.width();
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let description = truncate_to_width(&dt.tool.description, available);
        let padding = available.saturating_sub(description.width());

        println!(
            "{}{} {}{}{}",
            idx_str.dimmed(),
            name.bold(),
            description,
            " ".repeat(padding),
            marker.yellow()
        );
    }
}

pub(super) fn print_page(info: &PageInfo, links: &[PageLink]) {
    let Some((start, end)) = info.item_range() else {
        return;
    };
    println!();
    println!(
        "{}",
        format!("Showing {}-{} of {}", start, end, info.total_items).dimmed()
    );
    if links.is_empty() {
        return;
    }

    let strip: Vec<String> = links
        .iter()
        .map(|link| match link {
            PageLink::Number(n) if *n == info.current_page => {
                format!("[{}]", n).bold().to_string()
            }
            PageLink::Number(n) => n.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect();
    let mut line = strip.join(" ");
    if info.has_next() {
        line.push_str(&format!("  (-p {} for more)", info.current_page + 1).dimmed().to_string());
    }
    println!("{}", line);
}

pub(super) fn print_tool_detail(tool: &Tool, is_favorite: bool) {
    let marker = if is_favorite {
        format!(" {}", FAVORITE_MARKER).yellow().to_string()
    } else {
        String::new()
    };
    println!("{}{}", tool.name.bold(), marker);
    println!("--------------------------------");
    println!("{}", tool.description);
    println!();
    let placement = match &tool.subcategory {
        Some(sub) => format!("{} > {}", tool.category, sub),
        None => tool.category.clone(),
    };
    println!("{} {}", "category:".dimmed(), placement);
    println!("{} {}", "url:     ".dimmed(), tool.url.underline());
    println!("{} {}", "id:      ".dimmed(), tool.id);
}

pub(super) fn print_category_tree(categories: &[Category], totals: &[usize]) {
    for (category, total) in categories.iter().zip(totals) {
        println!(
            "{} {} {} {}",
            category.icon,
            category.name.bold(),
            format!("({})", total).dimmed(),
            category.id.dimmed()
        );
        for sub in category.subcategories() {
            let count = sub.count.unwrap_or(0);
            let line = format!(
                "    {} {} {}",
                pad_to_width(&sub.name, 12),
                format!("{:>3}", count),
                format!("{}-{}", category.id, sub.id).dimmed()
            );
            if count == 0 {
                println!("{}", line.dimmed());
            } else {
                println!("{}", line);
            }
        }
    }
}

pub(super) fn print_article_tabs(tabs: &[String], active: &str) {
    let rendered: Vec<String> = tabs
        .iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab).bold().to_string()
            } else {
                tab.clone()
            }
        })
        .collect();
    println!("{}", rendered.join("  "));
    println!();
}

pub(super) fn print_articles(articles: &[Article]) {
    for article in articles {
        let idx_str = format!("{:>4}. ", article.id);
        let available = LINE_WIDTH.saturating_sub(idx_str.width());
        println!(
            "{}{}",
            idx_str.dimmed(),
            truncate_to_width(&article.title, available).bold()
        );
        println!(
            "      {}",
            format!(
                "{} · {} · {} · {}",
                article.category, article.author, article.publish_date, article.read_time
            )
            .dimmed()
        );
        println!("      {}", truncate_to_width(&article.excerpt, available));
    }
}

pub(super) fn print_full_article(article: &Article) {
    println!("{}", article.title.bold());
    println!(
        "{}",
        format!(
            "{} · {} · {}",
            article.author, article.publish_date, article.read_time
        )
        .dimmed()
    );
    if !article.tags.is_empty() {
        let tags: Vec<String> = article.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").cyan());
    }
    println!("--------------------------------");
    println!("{}", article.content);
}

pub(super) fn print_recent_searches(searches: &[String]) {
    for (i, query) in searches.iter().enumerate() {
        println!("{} {}", format!("{:>3}.", i + 1).dimmed(), query);
    }
}

pub(super) fn print_config(config: &AinavConfig) {
    for key in ["page-size", "history-limit", "default-category", "catalog-dir"] {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
