use chrono::NaiveDate;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ArticleDraft {
    pub date: Option<String>,
    pub title: Option<String>,
    pub kicker: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub date: String,
    pub title: String,
    pub kicker: String,
    pub image_url: String,
    pub link: String,
}

/// Keeps a draft only when all five fields were found.
pub fn completeness_filter(draft: ArticleDraft) -> Option<Article> {
    Some(Article {
        date: draft.date?,
        title: draft.title?,
        kicker: draft.kicker?,
        image_url: draft.image_url?,
        link: draft.link?,
    })
}

/// Listing titles are rendered as "<date> <headline>"; drops the first token.
pub fn strip_leading_date(title: &str) -> String {
    title
        .split_whitespace()
        .skip(1)
        .collect::<Vec<&str>>()
        .join(" ")
}

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

pub fn parse_publication_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
}
