pub mod article_db;
