use std::str::FromStr;

use schoolbook_core::config::{AppConfig, ConfigError, ConfigProperties};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub const DEFAULT_URL: &str = "sqlite://schoolbook.db?mode=rwc";

/// `app.datasource.*` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasourceConfig {
    pub url: String,
    pub connections: u32,
    /// Apply the bundled schema on bootstrap.
    pub migrate: bool,
}

impl Default for DatasourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            connections: 5,
            migrate: true,
        }
    }
}

impl ConfigProperties for DatasourceConfig {
    fn prefix() -> &'static str {
        "app.datasource"
    }

    fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            url: config.get_or(&Self::key("url"), defaults.url)?,
            connections: config.get_or(&Self::key("connections"), defaults.connections)?,
            migrate: config.get_or(&Self::key("migrate"), defaults.migrate)?,
        })
    }
}

impl DatasourceConfig {
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            ..Self::default()
        }
    }

    /// Whether the URL names a private in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Open a pool for this datasource.
    ///
    /// Each connection to an in-memory database sees its own empty database,
    /// so those pools hold exactly one connection that is never recycled.
    pub async fn connect(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?;
        let pool = if self.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(self.connections.max(1))
        };
        tracing::debug!(url = %self.url, "opening datasource");
        pool.connect_with(options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolbook_core::config::ConfigValue;

    #[test]
    fn defaults_apply_when_section_is_absent() {
        let ds: DatasourceConfig = AppConfig::empty().section().unwrap();
        assert_eq!(ds, DatasourceConfig::default());
    }

    #[test]
    fn env_style_string_values_convert() {
        let mut config = AppConfig::empty();
        config.set("app.datasource.connections", ConfigValue::String("2".into()));
        config.set("app.datasource.migrate", ConfigValue::String("false".into()));
        let ds: DatasourceConfig = config.section().unwrap();
        assert_eq!(ds.connections, 2);
        assert!(!ds.migrate);
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(DatasourceConfig::in_memory().is_in_memory());
        assert!(!DatasourceConfig::default().is_in_memory());
    }
}
