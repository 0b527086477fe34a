use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Act as this user; remembered for future runs
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Path to the logbook storage file
    #[arg(long, global = true, default_value = "logbook.json")]
    pub store: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Add a new entry
    Add {
        /// Title for the entry
        title: String,

        /// Body of the entry
        content: String,
    },
    /// Edit an existing entry
    Edit {
        /// Id of the entry to edit
        id: Uuid,

        /// Replacement title (current one is kept if omitted)
        #[arg(long)]
        title: Option<String>,

        /// Replacement body (current one is kept if omitted)
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Id of the entry to delete
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List all entries, newest first
    List,
    /// Search entries by title or content
    Search {
        /// Text to look for
        query: String,
    },
}
