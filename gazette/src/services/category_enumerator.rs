use url::Url;

use crate::{configuration::CrawlerSettings, error::PipelineError};

use super::{Browser, FieldQuery};

pub async fn enumerate_categories<B: Browser>(
    browser: &B,
    settings: &CrawlerSettings,
) -> Result<Vec<String>, PipelineError> {
    let selectors = &settings.selectors;
    let entry_url = settings.entry_url.as_str();
    let navigation_error = |reason: String| PipelineError::Navigation {
        url: entry_url.to_string(),
        reason,
    };

    browser
        .navigate(entry_url)
        .await
        .map_err(|e| navigation_error(e.to_string()))?;

    let menu = browser
        .find_all(&selectors.category_menu)
        .await
        .map_err(|e| navigation_error(e.to_string()))?
        .into_iter()
        .next()
        .ok_or_else(|| navigation_error(format!("no element matches {}", selectors.category_menu)))?;

    // Menu entries are only rendered once the tab is hovered.
    browser
        .hover(&menu)
        .await
        .map_err(|e| navigation_error(e.to_string()))?;

    let items = browser
        .find_all(&selectors.category_item)
        .await
        .map_err(|e| navigation_error(e.to_string()))?;

    let base = Url::parse(entry_url).ok();
    let link_query = FieldQuery::attribute(&selectors.category_link, "href");

    let mut links = vec![];
    for item in items.iter() {
        let Some(href) = browser.find_one(item, &link_query).await else {
            log::debug!("Skipping category entry without a link");
            continue;
        };
        let absolute = match base.as_ref().map(|b| b.join(&href)) {
            Some(Ok(url)) => url.to_string(),
            _ => href,
        };
        links.push(absolute);
    }

    links.truncate(settings.category_limit);
    log::info!("Found {} categories on {}", links.len(), entry_url);

    Ok(links)
}
