use schoolbook_data::prelude::*;
use schoolbook_data_sqlx::session;
use sqlx::SqliteConnection;

use crate::entity::Student;

pub const ADD: Statement = Statement::insert(
    "student.add",
    "insert into student(sno,name,sex) values (#{sno},#{name},#{sex})",
);

pub const UPDATE: Statement = Statement::update(
    "student.update",
    "update student set name=#{name},sex=#{sex} where sno=#{sno}",
);

pub const DELETE_BY_SNO: Statement =
    Statement::delete("student.deleteBySno", "delete from student where sno=#{sno}");

pub const QUERY_BY_SNO: Statement = Statement::select(
    "student.queryStudentBySno",
    "select sno,name,sex from student where sno=#{sno}",
);

pub const QUERY_BY_SNO_AND_NAME: Statement = Statement::select(
    "student.queryStudentBySnoAndName",
    "select sno,name,sex from student where sno=#{sno} and name=#{name}",
);

pub const STUDENT_MAP: ResultMap = ResultMap::new(
    "student",
    &[
        ResultMapping::new("sno", "sno", ValueType::Text),
        ResultMapping::new("name", "name", ValueType::Text),
        ResultMapping::new("sex", "sex", ValueType::Text),
    ],
);

/// Statement mapper for the `student` table.
///
/// Stateless: every method runs on the connection it is handed, either one
/// checked out of the pool or the one held by an open
/// [`Tx`](schoolbook_data_sqlx::Tx).
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentMapper;

impl StudentMapper {
    pub fn new() -> Self {
        Self
    }

    pub async fn add(
        &self,
        conn: &mut SqliteConnection,
        student: &Student,
    ) -> Result<u64, DataError> {
        session::execute(conn, &ADD, student).await
    }

    /// Rewrite `name` and `sex` of the row with `student.sno`.
    ///
    /// Returns 0 when no such row exists.
    pub async fn update(
        &self,
        conn: &mut SqliteConnection,
        student: &Student,
    ) -> Result<u64, DataError> {
        session::execute(conn, &UPDATE, student).await
    }

    pub async fn delete_by_sno(
        &self,
        conn: &mut SqliteConnection,
        sno: &str,
    ) -> Result<u64, DataError> {
        let params = Params::new().with_value("sno", sno);
        session::execute(conn, &DELETE_BY_SNO, &params).await
    }

    pub async fn query_student_by_sno(
        &self,
        conn: &mut SqliteConnection,
        sno: &str,
    ) -> Result<Option<Student>, DataError> {
        let params = Params::new().with_value("sno", sno);
        session::select_one(conn, &QUERY_BY_SNO, &STUDENT_MAP, &params).await
    }

    pub async fn query_student_by_sno_and_name(
        &self,
        conn: &mut SqliteConnection,
        sno: &str,
        name: &str,
    ) -> Result<Option<Student>, DataError> {
        let params = Params::new().with_value("sno", sno).with_value("name", name);
        session::select_one(conn, &QUERY_BY_SNO_AND_NAME, &STUDENT_MAP, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolbook_data_sqlx::DIALECT;

    #[test]
    fn templates_render_to_positional_placeholders() {
        let (sql, names) = ADD.render(DIALECT).unwrap();
        assert_eq!(sql, "insert into student(sno,name,sex) values (?,?,?)");
        assert_eq!(names, vec!["sno", "name", "sex"]);

        let (_, names) = UPDATE.render(DIALECT).unwrap();
        assert_eq!(names, vec!["name", "sex", "sno"]);
    }

    #[test]
    fn every_statement_binds_from_a_student() {
        let s = Student::new("777", "zyx", "m");
        for statement in [ADD, UPDATE, DELETE_BY_SNO, QUERY_BY_SNO, QUERY_BY_SNO_AND_NAME] {
            assert!(statement.bind(DIALECT, &s).is_ok(), "{}", statement.id());
        }
    }
}
