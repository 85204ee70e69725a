use clap::Subcommand;

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// Show a lesson with its content and quiz.
    Show { id: String },
}
