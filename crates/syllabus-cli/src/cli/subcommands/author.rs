use clap::Subcommand;

/// Author registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthorCommands {
    /// Register an author.
    Add {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
    },
    /// Show an author.
    Get { id: String },
}
