use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::info;

use crate::news::NewsItem;

pub const NEWS_PATH: &str = "/api/news";

/// Why a news fetch failed. The page treats every variant the same way;
/// the distinction only feeds the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("news request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("news API responded with {0}")]
    Status(StatusCode),
    #[error("malformed news payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Status(_) => "status",
            FetchError::Parse(_) => "parse",
        }
    }
}

pub struct Fetcher {
    client: Client,
    url: String,
}

impl Fetcher {
    pub fn new(api_base: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("FourWeeks/1.0")
            .build()?;

        Ok(Self {
            client,
            url: Self::news_url(api_base),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn news_url(api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), NEWS_PATH)
    }

    pub async fn fetch_news(&self) -> Result<Vec<NewsItem>, FetchError> {
        info!("Fetching news from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await?;
        let news = Self::parse_news(&bytes)?;

        info!("Received {} news items", news.len());
        Ok(news)
    }

    /// Only a body that is not a JSON array fails; individual entries are
    /// taken as they come.
    pub fn parse_news(bytes: &[u8]) -> Result<Vec<NewsItem>, serde_json::Error> {
        let entries: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
        Ok(entries.into_iter().map(NewsItem::from_value).collect())
    }
}
