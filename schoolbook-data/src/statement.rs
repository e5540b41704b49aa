//! SQL statement templates with `#{name}` placeholders.
//!
//! A [`Statement`] is declared as a constant next to the mapper method that
//! runs it:
//!
//! ```ignore
//! const ADD: Statement = Statement::insert(
//!     "student.add",
//!     "insert into student(sno,name,sex) values (#{sno},#{name},#{sex})",
//! );
//! let bound = ADD.bind(Dialect::Sqlite, &student)?;
//! assert_eq!(bound.sql, "insert into student(sno,name,sex) values (?,?,?)");
//! ```

use crate::error::DataError;
use crate::value::{ParameterSource, SqlValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Generic SQL using `?` placeholders (default).
    Generic,
    /// SQLite-style `?` placeholders.
    Sqlite,
    /// MySQL-style `?` placeholders.
    MySql,
    /// Postgres-style `$1, $2, ...` placeholders.
    Postgres,
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Generic | Dialect::Sqlite | Dialect::MySql => "?".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Insert,
    Update,
    Delete,
    Select,
}

/// A named SQL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    id: &'static str,
    kind: StatementKind,
    template: &'static str,
}

/// A statement rendered for a dialect, with its values in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    pub id: &'static str,
    pub kind: StatementKind,
    pub sql: String,
    pub values: Vec<SqlValue>,
}

impl Statement {
    pub const fn new(id: &'static str, kind: StatementKind, template: &'static str) -> Self {
        Self { id, kind, template }
    }

    pub const fn insert(id: &'static str, template: &'static str) -> Self {
        Self::new(id, StatementKind::Insert, template)
    }

    pub const fn update(id: &'static str, template: &'static str) -> Self {
        Self::new(id, StatementKind::Update, template)
    }

    pub const fn delete(id: &'static str, template: &'static str) -> Self {
        Self::new(id, StatementKind::Delete, template)
    }

    pub const fn select(id: &'static str, template: &'static str) -> Self {
        Self::new(id, StatementKind::Select, template)
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Replace every `#{name}` with the dialect placeholder.
    ///
    /// Returns the SQL text and the parameter names in placeholder order.
    /// A name may appear more than once; it is bound once per occurrence.
    pub fn render(&self, dialect: Dialect) -> Result<(String, Vec<&'static str>), DataError> {
        let mut sql = String::with_capacity(self.template.len());
        let mut names = Vec::new();
        let mut rest = self.template;

        while let Some(start) = rest.find("#{") {
            sql.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or_else(|| self.template_error("unterminated `#{` placeholder"))?;
            let name = after[..end].trim();
            if !is_valid_name(name) {
                return Err(self.template_error(format!("invalid parameter name '{name}'")));
            }
            names.push(name);
            sql.push_str(&dialect.placeholder(names.len()));
            rest = &after[end + 1..];
        }
        sql.push_str(rest);

        Ok((sql, names))
    }

    /// Render the template and pull every parameter value from `source`.
    pub fn bind<P>(&self, dialect: Dialect, source: &P) -> Result<BoundStatement, DataError>
    where
        P: ParameterSource + ?Sized,
    {
        let (sql, names) = self.render(dialect)?;
        let values = names
            .into_iter()
            .map(|name| {
                source
                    .parameter(name)
                    .ok_or_else(|| DataError::MissingParameter {
                        statement: self.id,
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BoundStatement {
            id: self.id,
            kind: self.kind,
            sql,
            values,
        })
    }

    fn template_error(&self, message: impl Into<String>) -> DataError {
        DataError::Template {
            statement: self.id,
            message: message.into(),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Params;

    const FIND: Statement = Statement::select(
        "student.find",
        "select sno,name,sex from student where sno=#{sno} and name=#{name}",
    );

    #[test]
    fn test_render_sqlite() {
        let (sql, names) = FIND.render(Dialect::Sqlite).unwrap();
        assert_eq!(sql, "select sno,name,sex from student where sno=? and name=?");
        assert_eq!(names, vec!["sno", "name"]);
    }

    #[test]
    fn test_render_postgres() {
        let (sql, _) = FIND.render(Dialect::Postgres).unwrap();
        assert_eq!(sql, "select sno,name,sex from student where sno=$1 and name=$2");
    }

    #[test]
    fn test_render_without_placeholders() {
        let stmt = Statement::select("all", "select * from teacher");
        let (sql, names) = stmt.render(Dialect::Generic).unwrap();
        assert_eq!(sql, "select * from teacher");
        assert!(names.is_empty());
    }

    #[test]
    fn test_bind_orders_values() {
        let params = Params::new().with_value("name", "zyx").with_value("sno", "777");
        let bound = FIND.bind(Dialect::Sqlite, &params).unwrap();
        assert_eq!(bound.id, "student.find");
        assert_eq!(bound.kind, StatementKind::Select);
        assert_eq!(
            bound.values,
            vec![SqlValue::Text("777".into()), SqlValue::Text("zyx".into())]
        );
    }

    #[test]
    fn test_bind_missing_parameter() {
        let params = Params::new().with_value("sno", "777");
        let err = FIND.bind(Dialect::Sqlite, &params).unwrap_err();
        match err {
            DataError::MissingParameter { statement, name } => {
                assert_eq!(statement, "student.find");
                assert_eq!(name, "name");
            }
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_placeholder() {
        let stmt = Statement::delete("broken", "delete from student where sno=#{sno");
        let err = stmt.render(Dialect::Sqlite).unwrap_err();
        assert!(matches!(err, DataError::Template { statement: "broken", .. }));
    }

    #[test]
    fn test_invalid_parameter_name() {
        let stmt = Statement::delete("broken", "delete from student where sno=#{ }");
        assert!(stmt.render(Dialect::Sqlite).is_err());
        let stmt = Statement::delete("broken", "delete from student where sno=#{1sno}");
        assert!(stmt.render(Dialect::Sqlite).is_err());
    }
}
