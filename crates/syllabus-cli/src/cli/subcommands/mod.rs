mod author;
mod course;
mod lesson;

pub use author::AuthorCommands;
pub use course::CourseCommands;
pub use lesson::LessonCommands;
