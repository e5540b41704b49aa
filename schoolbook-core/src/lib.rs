pub mod beans;
pub mod config;
pub mod layers;
pub mod lifecycle;
pub mod managed;

pub use beans::{BeanContext, BeanError, BeanInfo, BeanRegistry};
pub use config::{AppConfig, ConfigError, ConfigProperties, ConfigValue, FromConfigValue};
pub use layers::init_tracing;
pub use lifecycle::{bean_inventory_printer, run_startup_hooks, StartupHook};
pub use managed::ManagedResource;
