use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::{error::WebDriverError, prelude::*, ChromiumLikeCapabilities};

use crate::{configuration::CrawlerSettings, error::BrowserError};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldSource {
    Text,
    Attribute(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldQuery {
    pub selector: String,
    pub source: FieldSource,
}

impl FieldQuery {
    pub fn text(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            source: FieldSource::Text,
        }
    }

    pub fn attribute(selector: &str, name: &str) -> Self {
        Self {
            selector: selector.to_string(),
            source: FieldSource::Attribute(name.to_string()),
        }
    }
}

/// One logical browsing session. The current page is implicit state, so a
/// session must never be driven from two places at once.
#[async_trait]
pub trait Browser: Send + Sync {
    type Handle: Send + Sync;

    async fn navigate(&self, url: &str) -> Result<(), BrowserError>;

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Handle>, BrowserError>;

    async fn find_one(&self, handle: &Self::Handle, query: &FieldQuery) -> Option<String>;

    async fn wait_for_present(&self, selector: &str, timeout: Duration) -> bool;

    async fn wait_for_clickable(&self, selector: &str, timeout: Duration) -> Option<Self::Handle>;

    /// `true` once `handle` has been detached from the document.
    async fn wait_for_stale(&self, handle: &Self::Handle, timeout: Duration) -> bool;

    async fn click(&self, handle: &Self::Handle) -> Result<(), BrowserError>;

    async fn hover(&self, handle: &Self::Handle) -> Result<(), BrowserError>;
}

#[async_trait]
pub trait Launcher: Send + Sync {
    type Session: Browser;

    async fn launch(&self, settings: &CrawlerSettings) -> Result<Self::Session, BrowserError>;

    async fn close(&self, session: Self::Session);
}

pub struct Droid {
    pub driver: WebDriver,
    poll_interval: Duration,
}

impl Droid {
    pub async fn new(settings: &CrawlerSettings) -> Result<Self, WebDriverError> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.add_arg("--headless")?;
        }
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;

        let driver = WebDriver::new(&settings.webdriver_url, caps).await?;
        if !settings.headless {
            driver.maximize_window().await?;
        }

        Ok(Droid {
            driver,
            poll_interval: settings.poll_interval(),
        })
    }

    pub async fn quit(self) -> Result<(), WebDriverError> {
        self.driver.quit().await
    }
}

#[async_trait]
impl Browser for Droid {
    type Handle = WebElement;

    async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<WebElement>, BrowserError> {
        Ok(self.driver.find_all(By::Css(selector)).await?)
    }

    async fn find_one(&self, handle: &WebElement, query: &FieldQuery) -> Option<String> {
        let element = match handle.find(By::Css(&query.selector)).await {
            Ok(element) => element,
            Err(e) => {
                log::debug!("No element for {}: {:?}", query.selector, e);
                return None;
            }
        };

        let value = match &query.source {
            FieldSource::Text => element.text().await.map(Some),
            FieldSource::Attribute(name) => element.attr(name.as_str()).await,
        };

        match value {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Unreadable value for {}: {:?}", query.selector, e);
                None
            }
        }
    }

    async fn wait_for_present(&self, selector: &str, timeout: Duration) -> bool {
        self.driver
            .query(By::Css(selector))
            .wait(timeout, self.poll_interval)
            .exists()
            .await
            .unwrap_or(false)
    }

    async fn wait_for_clickable(&self, selector: &str, timeout: Duration) -> Option<WebElement> {
        self.driver
            .query(By::Css(selector))
            .wait(timeout, self.poll_interval)
            .and_clickable()
            .first()
            .await
            .ok()
    }

    async fn wait_for_stale(&self, handle: &WebElement, timeout: Duration) -> bool {
        handle
            .wait_until()
            .wait(timeout, self.poll_interval)
            .stale()
            .await
            .is_ok()
    }

    async fn click(&self, handle: &WebElement) -> Result<(), BrowserError> {
        handle.click().await?;
        Ok(())
    }

    async fn hover(&self, handle: &WebElement) -> Result<(), BrowserError> {
        self.driver
            .action_chain()
            .move_to_element_center(handle)
            .perform()
            .await?;
        Ok(())
    }
}

pub struct ChromeLauncher;

#[async_trait]
impl Launcher for ChromeLauncher {
    type Session = Droid;

    async fn launch(&self, settings: &CrawlerSettings) -> Result<Droid, BrowserError> {
        Ok(Droid::new(settings).await?)
    }

    async fn close(&self, session: Droid) {
        if let Err(e) = session.quit().await {
            log::warn!("Failed to close browser session: {:?}", e);
        }
    }
}
