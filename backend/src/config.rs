//! Server configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `config/default.toml`, then `config/local.toml` (both optional)
//! 3. `BOOKCLUB__<SECTION>__<KEY>` environment variables
//!    (e.g. `BOOKCLUB__STORE__ANON_KEY`)

use common::notion::NOTION_VERSION;
use common::requests::ClientConfig;
use ::config::builder::{ConfigBuilder, DefaultState};
use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "BOOKCLUB";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub notion: NotionConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the app in the default browser once the server is up.
    pub open_browser: bool,
    /// Largest accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotionConfig {
    pub api_base: String,
    pub version: String,
}

/// The hosted store. Both values are public and handed to the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.open_browser", false)?
            .set_default("server.json_limit", 1024 * 1024)?
            .set_default("notion.api_base", "https://api.notion.com")?
            .set_default("notion.version", NOTION_VERSION)?
            .set_default("store.url", "")?
            .set_default("store.anon_key", "")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            store_url: self.store.url.trim_end_matches('/').to_string(),
            store_anon_key: self.store.anon_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_alone_are_a_complete_config() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.url(), "http://127.0.0.1:8080");
        assert!(!config.server.open_browser);
        assert_eq!(config.server.json_limit, 1024 * 1024);
        assert_eq!(config.notion.api_base, "https://api.notion.com");
        assert_eq!(config.notion.version, "2025-09-03");
        assert!(!config.client_config().is_configured());
    }

    #[test]
    fn client_config_drops_trailing_slash() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("store.url", "https://abc.supabase.co/")
            .unwrap()
            .set_override("store.anon_key", "anon")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        let client = config.client_config();
        assert_eq!(client.store_url, "https://abc.supabase.co");
        assert!(client.is_configured());
    }
}
