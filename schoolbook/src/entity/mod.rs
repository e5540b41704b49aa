mod student;
mod teacher;

pub use student::Student;
pub use teacher::Teacher;
