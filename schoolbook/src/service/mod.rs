mod student;
mod teacher;

pub use student::{StudentService, StudentServiceImpl};
pub use teacher::{TeacherService, TeacherServiceImpl};
