use super::{AppConfig, ConfigError};

/// Trait for strongly-typed configuration sections.
///
/// Implemented by hand for each section:
///
/// ```ignore
/// impl ConfigProperties for DatasourceConfig {
///     fn prefix() -> &'static str { "app.datasource" }
///     fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
///         Ok(Self { url: config.get(&Self::key("url"))? })
///     }
/// }
/// ```
pub trait ConfigProperties: Sized {
    /// The configuration key prefix (e.g., `"app.datasource"`).
    fn prefix() -> &'static str;

    /// Construct from an `AppConfig` instance.
    fn from_config(config: &AppConfig) -> Result<Self, ConfigError>;

    /// Absolute key for a property of this section.
    fn key(property: &str) -> String {
        format!("{}.{}", Self::prefix(), property)
    }
}
