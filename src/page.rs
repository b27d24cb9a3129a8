use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use askama::Template;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::fetcher::Fetcher;
use crate::layout::PageMeta;
use crate::news::{fallback_news, group_by_category, NewsItem, Section};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub meta: PageMeta,
    pub sections: Vec<Section>,
}

impl HomeTemplate {
    pub fn new(news: &[NewsItem]) -> Self {
        Self {
            meta: PageMeta::default(),
            sections: group_by_category(news),
        }
    }
}

/// The home page and its only piece of state: the news collection.
///
/// The collection starts empty and is replaced wholesale, once, by the
/// task started in [`HomePage::mount`].
pub struct HomePage {
    news: RwLock<Vec<NewsItem>>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            news: RwLock::new(Vec::new()),
        }
    }

    pub async fn news(&self) -> Vec<NewsItem> {
        self.news.read().await.clone()
    }

    pub async fn template(&self) -> HomeTemplate {
        let news = self.news.read().await;
        HomeTemplate::new(&news)
    }

    pub async fn render(&self) -> askama::Result<String> {
        self.template().await.render()
    }

    /// Start the one-shot news load. The page keeps rendering its current
    /// state while the fetch is in flight.
    pub fn mount(self: &Arc<Self>, fetcher: Fetcher) -> Mount {
        let abandoned = Arc::new(AtomicBool::new(false));

        let page = Arc::clone(self);
        let flag = Arc::clone(&abandoned);
        let handle = tokio::spawn(async move {
            let news = load_news(&fetcher).await;
            page.replace_news(news, &flag).await;
        });

        Mount {
            handle: Some(handle),
            abandoned,
        }
    }

    /// Returns false when the page was unmounted first; the state is left alone.
    pub(crate) async fn replace_news(&self, news: Vec<NewsItem>, abandoned: &AtomicBool) -> bool {
        let mut state = self.news.write().await;
        if abandoned.load(Ordering::Acquire) {
            info!("Page unmounted before news settled, discarding {} items", news.len());
            return false;
        }
        *state = news;
        true
    }
}

/// Fetch news, substituting the placeholder set on any failure.
pub async fn load_news(fetcher: &Fetcher) -> Vec<NewsItem> {
    match fetcher.fetch_news().await {
        Ok(news) => news,
        Err(e) => {
            warn!(kind = e.kind(), "News fetch failed, showing placeholders: {}", e);
            fallback_news()
        }
    }
}

/// Ties the news load to the page's lifetime. Dropping it unmounts the
/// page: the pending update becomes a no-op and the task is aborted.
pub struct Mount {
    handle: Option<JoinHandle<()>>,
    abandoned: Arc<AtomicBool>,
}

impl Mount {
    /// Wait for the news load to finish.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    error!("News load task failed: {}", e);
                }
            }
        }
    }

    pub fn unmount(self) {}
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.abandoned.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
