use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display order of the page sections. Shared by the renderer and the
/// fallback generator.
pub const CATEGORIES: &[&str] = &[
    "AI",
    "Sports",
    "Entertainment",
    "Culture",
    "Tech",
    "Business",
    "World",
    "Finance",
];

pub const FALLBACK_SUMMARY: &str = "Latest developments shaping the world.";

/// One entry returned by `GET /api/news`.
///
/// Fields are read leniently: missing, `null` or non-scalar values become
/// empty strings, numbers and booleans are kept as text. An entry that ends
/// up without a known category is simply never displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
}

impl NewsItem {
    /// Convert one element of the news array. Elements that are not objects
    /// become an empty item.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// A category heading together with the items filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: &'static str,
    pub items: Vec<NewsItem>,
}

/// Placeholder news used when retrieval fails: one item per category.
pub fn fallback_news() -> Vec<NewsItem> {
    CATEGORIES
        .iter()
        .map(|&category| NewsItem {
            id: category.to_string(),
            title: format!("{} Update", category),
            summary: FALLBACK_SUMMARY.to_string(),
            category: category.to_string(),
        })
        .collect()
}

/// Group news into the fixed category order. Items keep their relative
/// order within a section; items with an unknown category are dropped.
pub fn group_by_category(news: &[NewsItem]) -> Vec<Section> {
    CATEGORIES
        .iter()
        .map(|&category| Section {
            category,
            items: news
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect(),
        })
        .collect()
}
