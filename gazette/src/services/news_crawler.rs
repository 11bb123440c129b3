use crate::{
    configuration::CrawlerSettings,
    domain::article::{completeness_filter, Article},
};

use super::{extract_fields, Browser};

/// Why a category crawl ended. None of these are failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlStop {
    PageLimit,
    NoNextControl,
    PageTimeout,
    NavigationFailed,
}

#[derive(Debug)]
pub struct CategoryCrawl {
    pub url: String,
    pub articles: Vec<Article>,
    pub pages_visited: u32,
    pub stop: CrawlStop,
}

enum CrawlState<H> {
    FetchingPage { previous: Option<H> },
    ExtractingItems,
    CheckingNext { first_item: Option<H> },
    Stopped(CrawlStop),
}

/// Walks one category listing page by page, keeping complete records in
/// page-then-item order. Records gathered before a stop are always kept.
pub async fn crawl_category<B: Browser>(
    browser: &B,
    url: &str,
    settings: &CrawlerSettings,
) -> CategoryCrawl {
    let selectors = &settings.selectors;
    let timeout = settings.wait_timeout();

    let mut articles = vec![];
    let mut pages_visited: u32 = 0;
    let mut state = CrawlState::FetchingPage { previous: None };

    let stop = loop {
        state = match state {
            CrawlState::FetchingPage { .. }
                if settings.max_pages.is_some_and(|max| pages_visited >= max) =>
            {
                CrawlState::Stopped(CrawlStop::PageLimit)
            }
            CrawlState::FetchingPage { previous } => {
                if pages_visited == 0 {
                    if let Err(e) = browser.navigate(url).await {
                        log::warn!("Failed to open category {}: {}", url, e);
                        break CrawlStop::NavigationFailed;
                    }
                }
                // After a click the old listing stays in the DOM until the next one replaces it.
                let swapped = match previous {
                    Some(previous) => browser.wait_for_stale(&previous, timeout).await,
                    None => true,
                };
                match swapped && browser.wait_for_present(&selectors.item_list, timeout).await {
                    true => CrawlState::ExtractingItems,
                    false => CrawlState::Stopped(CrawlStop::PageTimeout),
                }
            }
            CrawlState::ExtractingItems => {
                let items = browser.find_all(&selectors.item).await.unwrap_or_else(|e| {
                    log::warn!("Failed to list items on {} page {}: {}", url, pages_visited + 1, e);
                    vec![]
                });

                for item in items.iter() {
                    let draft =
                        extract_fields(browser, item, selectors, settings.strip_title_date).await;
                    if let Some(article) = completeness_filter(draft) {
                        articles.push(article);
                    }
                }
                pages_visited += 1;

                log::debug!("Read {} items on {} page {}", items.len(), url, pages_visited);
                CrawlState::CheckingNext {
                    first_item: items.into_iter().next(),
                }
            }
            CrawlState::CheckingNext { .. }
                if settings.max_pages.is_some_and(|max| pages_visited >= max) =>
            {
                CrawlState::Stopped(CrawlStop::PageLimit)
            }
            CrawlState::CheckingNext { first_item } => match browser
                .wait_for_clickable(&selectors.next_page, timeout)
                .await
            {
                None => CrawlState::Stopped(CrawlStop::NoNextControl),
                Some(next) => match browser.click(&next).await {
                    Ok(()) => CrawlState::FetchingPage {
                        previous: first_item,
                    },
                    Err(e) => {
                        log::warn!("Next control on {} was not clickable: {}", url, e);
                        CrawlState::Stopped(CrawlStop::NoNextControl)
                    }
                },
            },
            CrawlState::Stopped(reason) => break reason,
        };
    };

    log::info!(
        "Crawled {}: {} articles over {} pages, stopped on {:?}",
        url,
        articles.len(),
        pages_visited,
        stop
    );

    CategoryCrawl {
        url: url.to_string(),
        articles,
        pages_visited,
        stop,
    }
}
