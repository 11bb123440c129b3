use std::time::Duration;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::services::DEFAULT_KEYWORD_COUNT;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    pub crawler: CrawlerSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    #[serde(default)]
    pub require_ssl: bool,
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(&self.password)
            .port(self.port)
            .ssl_mode(ssl_mode)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct CrawlerSettings {
    pub webdriver_url: String,
    #[serde(default)]
    pub headless: bool,
    pub entry_url: String,
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,
    /// `None` crawls until the listing runs out of "next" controls.
    #[serde(default)]
    pub max_pages: Option<u32>,
    #[serde(
        default = "default_wait_timeout_secs",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub wait_timeout_secs: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_true")]
    pub strip_title_date: bool,
    #[serde(default)]
    pub selectors: SiteSelectors,
}

impl CrawlerSettings {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteSelectors {
    pub category_menu: String,
    pub category_item: String,
    pub category_link: String,
    pub item_list: String,
    pub item: String,
    pub title: String,
    pub kicker: String,
    pub image: String,
    pub link: String,
    pub date: String,
    pub next_page: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            category_menu: ".item_menu.transition_02.tiene_hijos.categorias".to_string(),
            category_item: ".contenedor_items_hijos .item_menu.hijo".to_string(),
            category_link: "a".to_string(),
            item_list: ".item_noticias".to_string(),
            item: ".item_noticias".to_string(),
            title: ".fuente_roboto_slab".to_string(),
            kicker: "a".to_string(),
            image: "img".to_string(),
            link: "a".to_string(),
            date: ".fecha_item_listado_noticias".to_string(),
            next_page: ".boton_paginador.siguiente".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct PipelineSettings {
    #[serde(default = "default_keyword_count")]
    pub keyword_count: usize,
    pub target_table: String,
    #[serde(default)]
    pub checkpoint_path: Option<String>,
}

fn default_category_limit() -> usize {
    16
}

fn default_wait_timeout_secs() -> u64 {
    20
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_keyword_count() -> usize {
    DEFAULT_KEYWORD_COUNT
}

fn default_true() -> bool {
    true
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
