use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A cataloged AI product or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Tool {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            url: format!("https://{}.example", id),
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            subcategory: None,
            icon: None,
            featured: false,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

/// A news article. `publish_date` is display text and is never parsed for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub publish_date: String,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    // Derived by commands::counts, never authoritative in source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl SubCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_categories: Option<Vec<SubCategory>>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            sub_categories: None,
        }
    }

    pub fn with_subcategories(mut self, subs: Vec<SubCategory>) -> Self {
        self.sub_categories = Some(subs);
        self
    }

    /// Subcategories as a slice; categories without a list yield an empty slice.
    pub fn subcategories(&self) -> &[SubCategory] {
        self.sub_categories.as_deref().unwrap_or(&[])
    }

    pub fn find_subcategory(&self, id: &str) -> Option<&SubCategory> {
        self.subcategories().iter().find(|s| s.id == id)
    }
}

/// The three static collections, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub tools: Vec<Tool>,
    pub articles: Vec<Article>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, tools: Vec<Tool>, articles: Vec<Article>) -> Self {
        Self {
            categories,
            tools,
            articles,
        }
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Reports dangling references in the tool collection.
    ///
    /// Findings are informational: queries tolerate every one of them by returning
    /// fewer (or no) matches.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();
        let mut seen = HashSet::new();

        for tool in &self.tools {
            if !seen.insert(tool.id.as_str()) {
                findings.push(format!("duplicate tool id \"{}\"", tool.id));
            }

            let Some(category) = self.find_category(&tool.category) else {
                findings.push(format!(
                    "tool \"{}\" references unknown category \"{}\"",
                    tool.id, tool.category
                ));
                continue;
            };

            if let Some(sub) = &tool.subcategory {
                if category.find_subcategory(sub).is_none() {
                    findings.push(format!(
                        "tool \"{}\" references subcategory \"{}\" outside category \"{}\"",
                        tool.id, sub, tool.category
                    ));
                }
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_deserializes_with_optional_fields_absent() {
        let json = r#"{"id":"x","name":"X","description":"d","category":"common","url":"https://x"}"#;
        let tool: Tool = serde_json::from_str(json).unwrap();
        assert_eq!(tool.subcategory, None);
        assert_eq!(tool.icon, None);
        assert!(!tool.featured);
    }

    #[test]
    fn article_uses_camel_case_keys() {
        let json = r#"{
            "id": "1", "title": "T", "content": "c", "excerpt": "e", "author": "a",
            "publishDate": "2024-01-15", "readTime": "5分钟", "tags": ["AI"],
            "category": "技术趋势", "imageUrl": "https://img"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.publish_date, "2024-01-15");
        assert_eq!(article.read_time, "5分钟");
        assert_eq!(article.image_url.as_deref(), Some("https://img"));
        assert!(!article.featured);
    }

    #[test]
    fn category_without_subcategories_has_empty_slice() {
        let category = Category::new("misc", "Misc", "*");
        assert!(category.subcategories().is_empty());
        assert!(category.find_subcategory("any").is_none());
    }

    #[test]
    fn validate_reports_dangling_references() {
        let catalog = Catalog::new(
            vec![Category::new("common", "常用工具", "⚡")
                .with_subcategories(vec![SubCategory::new("chatbot", "对话助手")])],
            vec![
                Tool::new("a", "A", "", "common").with_subcategory("chatbot"),
                Tool::new("a", "A again", "", "common"),
                Tool::new("b", "B", "", "nowhere"),
                Tool::new("c", "C", "", "common").with_subcategory("music"),
            ],
            vec![],
        );

        let findings = catalog.validate();
        assert_eq!(findings.len(), 3);
        assert!(findings[0].contains("duplicate tool id \"a\""));
        assert!(findings[1].contains("unknown category \"nowhere\""));
        assert!(findings[2].contains("subcategory \"music\""));
    }
}
