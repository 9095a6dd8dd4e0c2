mod course;
pub use course::Course;

mod module;
pub use module::Module;

mod lesson;
pub use lesson::{Lesson, LessonType};
