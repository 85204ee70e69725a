//! Entity structs for the persisted course tree.
//!
//! Each entity maps to one table in the libSQL schema (see
//! `syllabus-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema export.

mod author;
mod course;
mod lesson;
mod question;

pub use author::Author;
pub use course::{Course, CourseStats};
pub use lesson::{Lesson, LessonContent};
pub use question::{Question, QuestionOption};
