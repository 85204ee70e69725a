use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{AuthorCommands, CourseCommands, LessonCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write the project config and create the database.
    Init,
    /// Author registry.
    Author {
        #[command(subcommand)]
        action: AuthorCommands,
    },
    /// Course authoring, publishing, and catalog.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Lessons.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Tags carried by published courses.
    Tags,
    /// Print the JSON Schema of a payload or read model.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    CourseCreate,
    CourseUpdate,
    Course,
    Lesson,
}
