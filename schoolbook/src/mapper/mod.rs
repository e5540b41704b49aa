//! Statement mappers: one `Statement` constant per operation, one
//! `ResultMap` per entity.

pub mod student;
pub mod teacher;

pub use student::StudentMapper;
pub use teacher::TeacherMapper;
