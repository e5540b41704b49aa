use std::fmt;

use schoolbook_core::beans::{BeanContext, BeanError, BeanRegistry};
use schoolbook_core::config::{AppConfig, ConfigError};
use schoolbook_core::lifecycle::{bean_inventory_printer, run_startup_hooks, StartupHook};
use schoolbook_data::DataError;
use schoolbook_data_sqlx::SqlxErrorExt;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::SqlitePool;

use crate::config::DatasourceConfig;
use crate::mapper::{StudentMapper, TeacherMapper};
use crate::service::{StudentServiceImpl, TeacherServiceImpl};

/// Schema bundled from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors raised while bringing the application up.
#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Data(DataError),
    Migrate(MigrateError),
    Bean(BeanError),
    Hook(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(e) => write!(f, "configuration error: {e}"),
            BootstrapError::Data(e) => write!(f, "datasource error: {e}"),
            BootstrapError::Migrate(e) => write!(f, "schema migration failed: {e}"),
            BootstrapError::Bean(e) => write!(f, "wiring error: {e}"),
            BootstrapError::Hook(e) => write!(f, "startup hook failed: {e}"),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::Config(e) => Some(e),
            BootstrapError::Data(e) => Some(e),
            BootstrapError::Migrate(e) => Some(e),
            BootstrapError::Bean(e) => Some(e),
            BootstrapError::Hook(e) => Some(e.as_ref()),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(e: ConfigError) -> Self {
        BootstrapError::Config(e)
    }
}

impl From<DataError> for BootstrapError {
    fn from(e: DataError) -> Self {
        BootstrapError::Data(e)
    }
}

impl From<MigrateError> for BootstrapError {
    fn from(e: MigrateError) -> Self {
        BootstrapError::Migrate(e)
    }
}

impl From<BeanError> for BootstrapError {
    fn from(e: BeanError) -> Self {
        BootstrapError::Bean(e)
    }
}

/// The wired application: a pool plus every component, retrievable by type.
pub struct Application {
    pool: SqlitePool,
    context: BeanContext,
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("beans", &self.context.len())
            .finish()
    }
}

impl Application {
    /// Open the datasource described by `config`, apply the schema when
    /// `app.datasource.migrate` is set, and wire every component.
    pub async fn bootstrap(config: &AppConfig) -> Result<Self, BootstrapError> {
        let datasource: DatasourceConfig = config.section()?;
        let pool = datasource
            .connect()
            .await
            .map_err(SqlxErrorExt::into_data_error)?;

        if datasource.migrate {
            MIGRATOR.run(&pool).await?;
            tracing::info!("database schema applied");
        }

        Self::from_pool(pool, config)
    }

    /// Wire every component around an existing pool.
    ///
    /// Mappers are built first, then handed to the services that use them.
    /// Startup hooks run once, after the context is frozen.
    pub fn from_pool(pool: SqlitePool, config: &AppConfig) -> Result<Self, BootstrapError> {
        let print_inventory: bool = config.get_or("app.beans.inventory", false)?;

        let student_mapper = StudentMapper::new();
        let teacher_mapper = TeacherMapper::new();
        let student_service = StudentServiceImpl::new(pool.clone(), student_mapper);
        let teacher_service = TeacherServiceImpl::new(pool.clone(), teacher_mapper);

        let mut registry = BeanRegistry::new();
        registry
            .provide(config.clone())
            .provide(pool.clone())
            .provide(student_mapper)
            .provide(teacher_mapper)
            .provide(student_service)
            .provide(teacher_service);
        let context = registry.resolve()?;

        let hooks: Vec<StartupHook> = vec![bean_inventory_printer(print_inventory)];
        run_startup_hooks(hooks, &context).map_err(BootstrapError::Hook)?;

        tracing::info!(beans = context.len(), "application started");
        Ok(Self { pool, context })
    }

    /// Retrieve a component by type.
    pub fn get<T: Clone + 'static>(&self) -> Result<T, BeanError> {
        self.context.get()
    }

    pub fn context(&self) -> &BeanContext {
        &self.context
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn student_service(&self) -> Result<StudentServiceImpl, BeanError> {
        self.get()
    }

    pub fn teacher_service(&self) -> Result<TeacherServiceImpl, BeanError> {
        self.get()
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn shutdown(self) {
        self.pool.close().await;
        tracing::debug!("datasource closed");
    }
}
