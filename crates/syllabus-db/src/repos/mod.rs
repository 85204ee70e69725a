//! Engine operations, grouped by concern.
//!
//! Each module adds methods to `CourseService` via `impl CourseService` blocks.

pub mod author;
pub mod catalog;
pub mod course;
pub mod publish;
