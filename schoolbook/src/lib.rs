//! # schoolbook
//!
//! Student and teacher records over SQLite.
//!
//! Callers go through a service, the service forwards to a statement
//! mapper, and the mapper binds a SQL template and maps the result row back
//! into an entity:
//!
//! ```ignore
//! let config = AppConfig::load("dev")?;
//! let app = Application::bootstrap(&config).await?;
//!
//! let students = app.student_service()?;
//! students.add(&Student::new("777", "zyx", "m")).await?;
//! let found = students.query_student_by_sno("777").await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod entity;
pub mod mapper;
pub mod service;

pub use bootstrap::{Application, BootstrapError, MIGRATOR};
pub use config::DatasourceConfig;
pub use entity::{Student, Teacher};
pub use mapper::{StudentMapper, TeacherMapper};
pub use service::{StudentService, StudentServiceImpl, TeacherService, TeacherServiceImpl};
