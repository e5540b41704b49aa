use std::future::Future;

use schoolbook_data::DataError;
use schoolbook_data_sqlx::{session, HasPool, Tx};
use sqlx::{Sqlite, SqlitePool};

use crate::entity::Student;
use crate::mapper::StudentMapper;

/// Business operations on students.
pub trait StudentService: Send + Sync {
    /// Insert a student. Returns the affected row count.
    fn add(&self, student: &Student) -> impl Future<Output = Result<u64, DataError>> + Send;

    /// Update the student with the same `sno`. Returns 0 if none exists.
    fn update(&self, student: &Student) -> impl Future<Output = Result<u64, DataError>> + Send;

    fn delete_by_sno(&self, sno: &str) -> impl Future<Output = Result<u64, DataError>> + Send;

    fn query_student_by_sno(
        &self,
        sno: &str,
    ) -> impl Future<Output = Result<Option<Student>, DataError>> + Send;

    /// Look a student up by `sno` and `name` inside a transaction.
    fn query_student_by_sno_and_name(
        &self,
        sno: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Student>, DataError>> + Send;
}

#[derive(Debug, Clone)]
pub struct StudentServiceImpl {
    pool: SqlitePool,
    mapper: StudentMapper,
}

impl StudentServiceImpl {
    pub fn new(pool: SqlitePool, mapper: StudentMapper) -> Self {
        Self { pool, mapper }
    }
}

impl HasPool<Sqlite> for StudentServiceImpl {
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl StudentService for StudentServiceImpl {
    async fn add(&self, student: &Student) -> Result<u64, DataError> {
        tracing::debug!(sno = %student.sno, "add student");
        let mut conn = session::acquire(self).await?;
        self.mapper.add(&mut *conn, student).await
    }

    async fn update(&self, student: &Student) -> Result<u64, DataError> {
        tracing::debug!(sno = %student.sno, "update student");
        let mut conn = session::acquire(self).await?;
        self.mapper.update(&mut *conn, student).await
    }

    async fn delete_by_sno(&self, sno: &str) -> Result<u64, DataError> {
        tracing::debug!(sno, "delete student");
        let mut conn = session::acquire(self).await?;
        self.mapper.delete_by_sno(&mut *conn, sno).await
    }

    async fn query_student_by_sno(&self, sno: &str) -> Result<Option<Student>, DataError> {
        tracing::debug!(sno, "query student by sno");
        let mut conn = session::acquire(self).await?;
        self.mapper.query_student_by_sno(&mut *conn, sno).await
    }

    async fn query_student_by_sno_and_name(
        &self,
        sno: &str,
        name: &str,
    ) -> Result<Option<Student>, DataError> {
        tracing::debug!(sno, name, "query student by sno and name");
        let mut tx: Tx<'static, Sqlite> = Tx::begin(self).await?;
        let result = self
            .mapper
            .query_student_by_sno_and_name(tx.as_mut(), sno, name)
            .await;
        tx.finish(result.is_ok()).await?;
        result
    }
}
