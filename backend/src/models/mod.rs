pub mod course;

pub use course::{Course, CourseId, CourseSummary, NewCourse, MIN_TITLE_LEN};
