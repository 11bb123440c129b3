pub mod article;
pub mod enriched_article;
