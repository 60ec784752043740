//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_LARGE_MENU_WARN_THRESHOLD, DEFAULT_LOG_LEVEL, DEFAULT_MENU_ENDPOINT};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub navigation: NavigationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    /// Backend path the menu records are fetched from.
    pub menu_endpoint: String,
    /// Build a `fullPath -> node` index alongside every tree.
    pub build_path_index: bool,
    pub large_menu_warn_threshold: usize,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            menu_endpoint: DEFAULT_MENU_ENDPOINT.to_string(),
            build_path_index: false,
            large_menu_warn_threshold: DEFAULT_LARGE_MENU_WARN_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Layered load: defaults, `config/default`, `config/{APP_ENV}`, then `APP__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Built-in defaults only, no files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_defaults()?.build()?.try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "menu-navigation")?
            .set_default("app.log_level", DEFAULT_LOG_LEVEL)?
            .set_default("navigation.menu_endpoint", DEFAULT_MENU_ENDPOINT)?
            .set_default("navigation.build_path_index", false)?
            .set_default(
                "navigation.large_menu_warn_threshold",
                DEFAULT_LARGE_MENU_WARN_THRESHOLD as i64,
            )
    }
}
