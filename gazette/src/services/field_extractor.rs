use crate::{
    configuration::SiteSelectors,
    domain::article::{strip_leading_date, ArticleDraft},
};

use super::{Browser, FieldQuery};

pub async fn extract_fields<B: Browser>(
    browser: &B,
    item: &B::Handle,
    selectors: &SiteSelectors,
    strip_title_date: bool,
) -> ArticleDraft {
    let title = browser
        .find_one(item, &FieldQuery::text(&selectors.title))
        .await
        .map(|title| match strip_title_date {
            true => strip_leading_date(&title),
            false => title,
        });
    let kicker = browser
        .find_one(item, &FieldQuery::attribute(&selectors.kicker, "title"))
        .await;
    let image_url = browser
        .find_one(item, &FieldQuery::attribute(&selectors.image, "src"))
        .await;
    let link = browser
        .find_one(item, &FieldQuery::attribute(&selectors.link, "href"))
        .await;
    let date = browser
        .find_one(item, &FieldQuery::text(&selectors.date))
        .await;

    ArticleDraft {
        date,
        title,
        kicker,
        image_url,
        link,
    }
}
