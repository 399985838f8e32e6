use chrono::{DateTime, Utc};
use serde::Serialize;

/// Normalized news article
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub image_url: String,
    pub published_at: DateTime<Utc>,
    pub related_symbols: Vec<String>,
}
