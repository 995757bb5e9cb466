pub mod m202601150001_create_students;
pub mod m202601150002_create_lecturers;
pub mod m202601150003_create_courses;
pub mod m202601150004_create_attendance_records;
