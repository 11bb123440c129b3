use std::{collections::HashMap, sync::Mutex, time::Duration};

use async_trait::async_trait;

use crate::{
    configuration::{
        ApplicationSettings, CrawlerSettings, DatabaseSettings, PipelineSettings, Settings,
        SiteSelectors,
    },
    error::BrowserError,
    services::{Browser, FieldQuery, FieldSource, Launcher},
};

#[derive(Debug, Clone, Default)]
pub struct FakeItem {
    values: HashMap<String, String>,
}

impl FakeItem {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn article(
        date: Option<&str>,
        title: Option<&str>,
        kicker: Option<&str>,
        image: Option<&str>,
        link: Option<&str>,
    ) -> Self {
        let selectors = SiteSelectors::default();
        let mut item = FakeItem::default();
        for (key, value) in [
            (selectors.date.clone(), date),
            (selectors.title.clone(), title),
            (format!("{}@title", selectors.kicker), kicker),
            (format!("{}@src", selectors.image), image),
            (format!("{}@href", selectors.link), link),
        ] {
            if let Some(value) = value {
                item = item.with(&key, value);
            }
        }
        item
    }

    pub fn complete(n: usize) -> Self {
        let title = format!("14-03-2025 Headline number {}", n);
        let kicker = format!("Kicker for story {}", n);
        let image = format!("https://cdn.example.com/{}.jpg", n);
        let link = format!("https://www.example.com/news/{}", n);
        Self::article(
            Some("14-03-2025"),
            Some(&title),
            Some(&kicker),
            Some(&image),
            Some(&link),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakePage {
    pub items: Vec<FakeItem>,
    pub has_next: bool,
    pub never_loads: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FakeHandle {
    Item { page: usize, index: usize },
    MenuTab,
    MenuItem(usize),
    Next,
}

#[derive(Debug, Default)]
struct FakeState {
    site: Option<String>,
    page: usize,
    /// Page a click has requested but the DOM does not show yet.
    pending: Option<usize>,
    stale_reads: usize,
    hovered: bool,
    clicks: usize,
    navigations: Vec<String>,
}

#[derive(Default)]
pub struct FakeBrowser {
    selectors: SiteSelectors,
    sites: HashMap<String, Vec<FakePage>>,
    menu: Option<Vec<FakeItem>>,
    click_lag: usize,
    state: Mutex<FakeState>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(mut self, url: &str, pages: Vec<FakePage>) -> Self {
        self.sites.insert(url.to_string(), pages);
        self
    }

    pub fn with_menu(mut self, hrefs: &[&str]) -> Self {
        let link_key = format!("{}@href", self.selectors.category_link);
        self.menu = Some(
            hrefs
                .iter()
                .map(|href| FakeItem::default().with(&link_key, href))
                .collect(),
        );
        self
    }

    /// After a click, the old page keeps being served for `reads` DOM reads.
    pub fn with_click_lag(mut self, reads: usize) -> Self {
        self.click_lag = reads;
        self
    }

    pub fn clicks(&self) -> usize {
        self.state.lock().unwrap().clicks
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.lock().unwrap().navigations.clone()
    }

    fn current_page(&self) -> Option<(usize, FakePage)> {
        let mut state = self.state.lock().unwrap();
        if let Some(next) = state.pending {
            if state.stale_reads == 0 {
                state.page = next;
                state.pending = None;
            } else {
                state.stale_reads -= 1;
            }
        }
        let site = state.site.as_ref()?;
        let page = self.sites.get(site)?.get(state.page).cloned()?;
        Some((state.page, page))
    }
}

#[async_trait]
impl Browser for FakeBrowser {
    type Handle = FakeHandle;

    async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        state.navigations.push(url.to_string());
        state.site = Some(url.to_string());
        state.page = 0;
        state.pending = None;
        state.hovered = false;
        Ok(())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<FakeHandle>, BrowserError> {
        if selector == self.selectors.category_menu {
            return Ok(match self.menu {
                Some(_) => vec![FakeHandle::MenuTab],
                None => vec![],
            });
        }
        if selector == self.selectors.category_item {
            let hovered = self.state.lock().unwrap().hovered;
            let count = match (&self.menu, hovered) {
                (Some(menu), true) => menu.len(),
                _ => 0,
            };
            return Ok((0..count).map(FakeHandle::MenuItem).collect());
        }
        if selector == self.selectors.item {
            return Ok(match self.current_page() {
                Some((page, current)) => (0..current.items.len())
                    .map(|index| FakeHandle::Item { page, index })
                    .collect(),
                None => vec![],
            });
        }
        Err(BrowserError::new(format!("unknown selector {}", selector)))
    }

    async fn find_one(&self, handle: &FakeHandle, query: &FieldQuery) -> Option<String> {
        let item = match handle {
            FakeHandle::Item { page, index } => {
                let (current, listing) = self.current_page()?;
                if current != *page {
                    return None;
                }
                listing.items.get(*index)?.clone()
            }
            FakeHandle::MenuItem(i) => self.menu.as_ref()?.get(*i)?.clone(),
            _ => return None,
        };
        let key = match &query.source {
            FieldSource::Text => query.selector.clone(),
            FieldSource::Attribute(name) => format!("{}@{}", query.selector, name),
        };
        item.values.get(&key).cloned()
    }

    async fn wait_for_present(&self, _selector: &str, _timeout: Duration) -> bool {
        self.current_page()
            .map(|(_, p)| !p.never_loads)
            .unwrap_or(false)
    }

    async fn wait_for_clickable(&self, _selector: &str, _timeout: Duration) -> Option<FakeHandle> {
        self.current_page()
            .filter(|(_, p)| p.has_next)
            .map(|_| FakeHandle::Next)
    }

    async fn wait_for_stale(&self, handle: &FakeHandle, _timeout: Duration) -> bool {
        let FakeHandle::Item { page, .. } = handle else {
            return false;
        };
        // Polls until the pending swap lands or there is nothing left to wait for.
        loop {
            let Some((current, _)) = self.current_page() else {
                return true;
            };
            if current != *page {
                return true;
            }
            if self.state.lock().unwrap().pending.is_none() {
                return false;
            }
        }
    }

    async fn click(&self, handle: &FakeHandle) -> Result<(), BrowserError> {
        if *handle != FakeHandle::Next {
            return Err(BrowserError::new("not clickable"));
        }
        let mut state = self.state.lock().unwrap();
        state.clicks += 1;
        state.pending = Some(state.page + 1);
        state.stale_reads = self.click_lag;
        Ok(())
    }

    async fn hover(&self, handle: &FakeHandle) -> Result<(), BrowserError> {
        if *handle == FakeHandle::MenuTab {
            self.state.lock().unwrap().hovered = true;
        }
        Ok(())
    }
}

pub struct FakeLauncher {
    build: fn() -> FakeBrowser,
    fail: bool,
}

impl FakeLauncher {
    pub fn new(build: fn() -> FakeBrowser) -> Self {
        Self { build, fail: false }
    }

    pub fn unreachable() -> Self {
        Self {
            build: FakeBrowser::new,
            fail: true,
        }
    }
}

#[async_trait]
impl Launcher for FakeLauncher {
    type Session = FakeBrowser;

    async fn launch(&self, _settings: &CrawlerSettings) -> Result<FakeBrowser, BrowserError> {
        if self.fail {
            return Err(BrowserError::new("webdriver unreachable"));
        }
        Ok((self.build)())
    }

    async fn close(&self, _session: FakeBrowser) {}
}

const SLOTS: &str = "https://www.example.com/international/categories/slots";

pub fn sample_settings(checkpoint_path: Option<String>) -> Settings {
    Settings {
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "password".to_string(),
            port: 5432,
            host: "localhost".to_string(),
            database_name: "news".to_string(),
            require_ssl: false,
        },
        application: ApplicationSettings {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        crawler: CrawlerSettings {
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            entry_url: "https://www.example.com/international/".to_string(),
            category_limit: 16,
            max_pages: Some(1),
            wait_timeout_secs: 1,
            poll_interval_ms: 10,
            strip_title_date: true,
            selectors: SiteSelectors::default(),
        },
        pipeline: PipelineSettings {
            keyword_count: 10,
            target_table: "news_articles".to_string(),
            checkpoint_path,
        },
    }
}

pub fn one_category_site() -> FakeBrowser {
    FakeBrowser::new()
        .with_menu(&["/international/categories/slots"])
        .with_site(
            SLOTS,
            vec![FakePage {
                items: vec![FakeItem::complete(1), FakeItem::complete(2)],
                ..Default::default()
            }],
        )
}
