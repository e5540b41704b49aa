use schoolbook_data::prelude::*;
use schoolbook_data_sqlx::session;
use sqlx::SqliteConnection;

use crate::entity::Teacher;

pub const ADD: Statement = Statement::insert(
    "teacher.add",
    "insert into teacher(name,age,toClass) values (#{name},#{age},#{toClass})",
);

pub const UPDATE: Statement = Statement::update(
    "teacher.update",
    "update teacher set name=#{name},age=#{age},toClass=#{toClass} where id=#{id}",
);

pub const DELETE_BY_ID: Statement =
    Statement::delete("teacher.deleteById", "delete from teacher where id=#{id}");

pub const QUERY_BY_NAME_AND_TO_CLASS: Statement = Statement::select(
    "teacher.queryTeacherByNameAndToClass",
    "select * from teacher where name=#{name} and toClass=#{toClass}",
);

pub const TEACHER_MAP: ResultMap = ResultMap::new(
    "teacher",
    &[
        ResultMapping::new("id", "id", ValueType::Integer),
        ResultMapping::new("name", "name", ValueType::Text),
        ResultMapping::new("age", "age", ValueType::Integer),
        ResultMapping::new("to_class", "toClass", ValueType::Text),
    ],
);

/// Statement mapper for the `teacher` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeacherMapper;

impl TeacherMapper {
    pub fn new() -> Self {
        Self
    }

    /// Insert `teacher`; the store assigns the id.
    pub async fn add(
        &self,
        conn: &mut SqliteConnection,
        teacher: &Teacher,
    ) -> Result<u64, DataError> {
        session::execute(conn, &ADD, teacher).await
    }

    /// Rewrite the row with `teacher.id`. An unsaved teacher binds a NULL id
    /// and so matches nothing.
    pub async fn update(
        &self,
        conn: &mut SqliteConnection,
        teacher: &Teacher,
    ) -> Result<u64, DataError> {
        session::execute(conn, &UPDATE, teacher).await
    }

    pub async fn delete_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i32,
    ) -> Result<u64, DataError> {
        let params = Params::new().with_value("id", id);
        session::execute(conn, &DELETE_BY_ID, &params).await
    }

    pub async fn query_teacher_by_name_and_to_class(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
        to_class: &str,
    ) -> Result<Option<Teacher>, DataError> {
        let params = Params::new()
            .with_value("name", name)
            .with_value("toClass", to_class);
        session::select_one(conn, &QUERY_BY_NAME_AND_TO_CLASS, &TEACHER_MAP, &params).await
    }
}
