use std::future::Future;

use schoolbook_data::DataError;
use schoolbook_data_sqlx::{session, HasPool};
use sqlx::{Sqlite, SqlitePool};

use crate::entity::Teacher;
use crate::mapper::TeacherMapper;

/// Business operations on teachers.
pub trait TeacherService: Send + Sync {
    fn query_teacher_by_name_and_to_class(
        &self,
        name: &str,
        to_class: &str,
    ) -> impl Future<Output = Result<Option<Teacher>, DataError>> + Send;
}

#[derive(Debug, Clone)]
pub struct TeacherServiceImpl {
    pool: SqlitePool,
    mapper: TeacherMapper,
}

impl TeacherServiceImpl {
    pub fn new(pool: SqlitePool, mapper: TeacherMapper) -> Self {
        Self { pool, mapper }
    }
}

impl HasPool<Sqlite> for TeacherServiceImpl {
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl TeacherService for TeacherServiceImpl {
    async fn query_teacher_by_name_and_to_class(
        &self,
        name: &str,
        to_class: &str,
    ) -> Result<Option<Teacher>, DataError> {
        tracing::debug!(name, to_class, "query teacher by name and class");
        let mut conn = session::acquire(self).await?;
        self.mapper
            .query_teacher_by_name_and_to_class(&mut *conn, name, to_class)
            .await
    }
}
