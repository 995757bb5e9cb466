pub mod attendance_record;
pub mod course;
pub mod lecturer;
pub mod student;

pub use attendance_record::Entity as AttendanceRecord;
pub use course::Entity as Course;
pub use lecturer::Entity as Lecturer;
pub use student::Entity as Student;
