pub mod aggregator;
pub mod category_enumerator;
pub mod checkpoint;
pub mod data_persistance;
pub mod droid;
#[cfg(test)]
pub mod fake_browser;
#[cfg(test)]
pub mod fake_sink;
pub mod feature_engineering;
pub mod field_extractor;
pub mod harvester;
pub mod keyword_vocabulary;
pub mod news_crawler;
pub mod pipeline;
pub mod sentiment;
pub mod text_metrics;

pub use aggregator::*;
pub use category_enumerator::*;
pub use checkpoint::*;
pub use data_persistance::*;
pub use droid::*;
pub use feature_engineering::*;
pub use field_extractor::*;
pub use harvester::*;
pub use keyword_vocabulary::*;
pub use news_crawler::*;
pub use pipeline::*;
pub use sentiment::*;
pub use text_metrics::*;
