use schoolbook_core::config::{AppConfig, ConfigError, ConfigProperties, ConfigValue, PROFILE_ENV};
use serial_test::serial;

#[test]
fn test_empty_config() {
    let config = AppConfig::empty();
    assert!(matches!(
        config.get::<String>("nonexistent"),
        Err(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_set_and_get() {
    let mut config = AppConfig::empty();
    config.set("app.name", ConfigValue::String("test".into()));
    assert_eq!(config.get::<String>("app.name").unwrap(), "test");
}

#[test]
fn test_get_or_default() {
    let mut config = AppConfig::empty();
    assert_eq!(config.get_or("missing", 42i64).unwrap(), 42);

    config.set("bad", ConfigValue::String("not-a-number".into()));
    assert!(config.get_or("bad", 1i64).is_err());
}

#[test]
fn test_type_conversions() {
    let mut config = AppConfig::empty();
    config.set("int_val", ConfigValue::Integer(42));
    config.set("bool_val", ConfigValue::Bool(true));
    config.set("bool_str", ConfigValue::String("yes".into()));
    config.set("null_val", ConfigValue::Null);

    assert_eq!(config.get::<i64>("int_val").unwrap(), 42);
    assert_eq!(config.get::<u32>("int_val").unwrap(), 42);
    assert!(config.get::<bool>("bool_val").unwrap());
    assert!(config.get::<bool>("bool_str").unwrap());
    assert_eq!(config.get::<String>("int_val").unwrap(), "42");
    assert!(config.get::<Option<String>>("null_val").unwrap().is_none());
}

#[test]
fn test_negative_into_unsigned_is_mismatch() {
    let mut config = AppConfig::empty();
    config.set("n", ConfigValue::Integer(-1));
    assert!(matches!(
        config.get::<u32>("n"),
        Err(ConfigError::TypeMismatch { expected: "u32", .. })
    ));
}

#[test]
fn test_flatten_yaml() {
    let yaml = r#"
app:
  datasource:
    url: "sqlite::memory:"
    connections: 1
  beans:
    inventory: true
"#;
    let config = AppConfig::from_yaml_str(yaml, "test").unwrap();

    assert_eq!(
        config.get::<String>("app.datasource.url").unwrap(),
        "sqlite::memory:"
    );
    assert_eq!(config.get::<u32>("app.datasource.connections").unwrap(), 1);
    assert!(config.get::<bool>("app.beans.inventory").unwrap());
    assert!(config.contains_key("app.beans.inventory"));
    assert!(!config.contains_key("app.beans"));
}

#[test]
fn test_sequence_is_a_single_list_value() {
    let yaml = r#"
app:
  seeds:
    - "666"
    - "777"
"#;
    let config = AppConfig::from_yaml_str(yaml, "test").unwrap();
    assert!(config.contains_key("app.seeds"));
    assert!(matches!(
        config.get::<String>("app.seeds"),
        Err(ConfigError::TypeMismatch { expected: "String", .. })
    ));
}

#[test]
fn test_invalid_yaml_is_load_error() {
    let err = AppConfig::from_yaml_str("app: [unclosed", "test").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

struct Section {
    url: String,
    connections: u32,
}

impl ConfigProperties for Section {
    fn prefix() -> &'static str {
        "app.datasource"
    }

    fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Section {
            url: config.get(&Self::key("url"))?,
            connections: config.get_or(&Self::key("connections"), 5)?,
        })
    }
}

#[test]
fn test_typed_section_with_default() {
    let config = AppConfig::from_yaml_str("app:\n  datasource:\n    url: x\n", "test").unwrap();
    let section: Section = config.section().unwrap();
    assert_eq!(section.url, "x");
    assert_eq!(section.connections, 5);
}

#[test]
#[serial]
fn test_load_from_directory_with_profile_override() {
    std::env::remove_var(PROFILE_ENV);
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("application.yaml"),
        "app:\n  datasource:\n    url: base\n    connections: 3\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("application-prod.yaml"),
        "app:\n  datasource:\n    url: prod\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path(), "prod").unwrap();
    assert_eq!(config.profile(), "prod");
    assert_eq!(config.get::<String>("app.datasource.url").unwrap(), "prod");
    assert_eq!(config.get::<u32>("app.datasource.connections").unwrap(), 3);
}

#[test]
#[serial]
fn test_env_overrides_yaml() {
    std::env::remove_var(PROFILE_ENV);
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("application.yaml"),
        "app:\n  datasource:\n    url: from-yaml\n",
    )
    .unwrap();

    std::env::set_var("APP_DATASOURCE_URL", "from-env");
    let config = AppConfig::load_from(dir.path(), "dev");
    std::env::remove_var("APP_DATASOURCE_URL");

    assert_eq!(
        config.unwrap().get::<String>("app.datasource.url").unwrap(),
        "from-env"
    );
}

#[test]
#[serial]
fn test_profile_env_var_wins() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(PROFILE_ENV, "staging");
    let config = AppConfig::load_from(dir.path(), "dev");
    std::env::remove_var(PROFILE_ENV);

    assert_eq!(config.unwrap().profile(), "staging");
}

#[test]
#[serial]
fn test_missing_files_are_not_errors() {
    std::env::remove_var(PROFILE_ENV);
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(dir.path(), "dev").unwrap();
    assert_eq!(config.profile(), "dev");
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_utf8_env_entries_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    std::env::remove_var(PROFILE_ENV);
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("APP_BROKEN_VALUE", OsStr::from_bytes(b"caf\xe9"));
    std::env::set_var("APP_DATASOURCE_URL", "from-env");
    let config = AppConfig::load_from(dir.path(), "dev");
    std::env::remove_var("APP_BROKEN_VALUE");
    std::env::remove_var("APP_DATASOURCE_URL");

    let config = config.unwrap();
    assert!(!config.contains_key("app.broken.value"));
    assert_eq!(
        config.get::<String>("app.datasource.url").unwrap(),
        "from-env"
    );
}
