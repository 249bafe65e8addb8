//! Small hand-built catalog shared by unit tests.
//!
//! Kept deliberately smaller than the builtin data so expectations can be read off
//! directly. Note that `editing` exists under two categories and that two subcategory
//! ids contain hyphens.

use crate::model::{Article, Catalog, Category, SubCategory, Tool};

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("common", "常用工具", "⚡").with_subcategories(vec![
            SubCategory::new("chatbot", "对话助手"),
            SubCategory::new("search", "AI搜索"),
            SubCategory::new("productivity", "效率工具"),
        ]),
        Category::new("writing", "AI文字", "✍️").with_subcategories(vec![
            SubCategory::new("copywriting", "文案写作"),
            SubCategory::new("editing", "文本编辑"),
        ]),
        Category::new("image", "AI绘画", "🎨").with_subcategories(vec![
            SubCategory::new("text-to-image", "文本生图"),
            SubCategory::new("image-edit", "图像编辑"),
            SubCategory::new("avatar", "头像生成"),
        ]),
        Category::new("video", "AI视频", "🎬").with_subcategories(vec![
            SubCategory::new("generation", "视频生成"),
            SubCategory::new("editing", "视频编辑"),
        ]),
        Category::new("misc", "其他", "📦"),
    ]
}

pub fn sample_tools() -> Vec<Tool> {
    vec![
        Tool::new("chatgpt", "ChatGPT", "OpenAI 开发的强大AI对话助手", "common")
            .with_subcategory("chatbot")
            .featured(),
        Tool::new(
            "claude",
            "Claude",
            "Anthropic 开发的AI助手，在对话和分析方面表现出色",
            "common",
        )
        .with_subcategory("chatbot")
        .featured(),
        Tool::new("midjourney", "Midjourney", "顶级AI绘画工具，生成艺术作品", "image")
            .with_subcategory("text-to-image")
            .featured(),
        Tool::new("perplexity", "Perplexity", "AI驱动的搜索引擎", "common")
            .with_subcategory("search"),
        Tool::new("grammarly", "Grammarly", "英文写作语法检查", "writing")
            .with_subcategory("editing"),
        Tool::new("kimi", "Kimi", "月之暗面推出的长文本对话助手", "common")
            .with_subcategory("chatbot"),
        Tool::new("dalle", "DALL·E 3", "OpenAI 的图像生成模型", "image")
            .with_subcategory("text-to-image"),
        Tool::new("runway", "Runway", "视频生成与编辑平台", "video").with_subcategory("editing"),
        Tool::new("notion-ai", "Notion AI", "笔记与知识库中的写作助手", "common")
            .with_subcategory("productivity"),
        Tool::new("remove-bg", "Remove.bg", "一键抠图", "image").with_subcategory("image-edit"),
    ]
}

fn article(id: &str, title: &str, category: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("# {}\n\n正文", title),
        excerpt: format!("{}的摘要", title),
        author: "AI研究员".to_string(),
        publish_date: "2024-01-15".to_string(),
        read_time: "5分钟".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
        featured: false,
        image_url: None,
    }
}

pub fn sample_articles() -> Vec<Article> {
    let mut first = article("1", "AI绘画工具的最新发展趋势", "技术趋势", &["AI绘画", "Midjourney"]);
    first.featured = true;
    vec![
        first,
        article("2", "ChatGPT在企业中的实际应用案例", "企业应用", &["ChatGPT", "企业"]),
        article("3", "大模型推理成本下降", "技术趋势", &["LLM"]),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_categories(), sample_tools(), sample_articles())
}
