use std::path::PathBuf;

use clap::Subcommand;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// Create a draft from a JSON payload.
    Create {
        /// Author ID or email.
        #[arg(long)]
        author: String,
        /// Payload file, or `-` for stdin.
        #[arg(long)]
        file: PathBuf,
    },
    /// Apply a partial update to a draft.
    Update {
        id: String,
        /// Author ID or email.
        #[arg(long)]
        author: String,
        /// Payload file, or `-` for stdin.
        #[arg(long)]
        file: PathBuf,
    },
    /// Publish a course (every call cuts a new version).
    Publish {
        id: String,
        /// Author ID or email.
        #[arg(long)]
        author: String,
    },
    /// Show one course.
    Show {
        id: String,
        /// Only show the course if it is at this version.
        #[arg(long)]
        version: Option<u32>,
    },
    /// List published courses.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        language: Option<String>,
        /// Repeatable; a course must carry every tag.
        #[arg(long)]
        tag: Vec<String>,
        /// newest, oldest, title, popular, top-rated
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List an author's courses, drafts included.
    Mine {
        /// Author ID or email.
        #[arg(long)]
        author: String,
    },
}
