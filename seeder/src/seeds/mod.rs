pub mod attendance;
pub mod course;
pub mod lecturer;
pub mod student;
