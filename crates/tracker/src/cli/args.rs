use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(version)]
#[command(about = "Track timestamped records with tags", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new record
    #[command(alias = "a")]
    Add {
        /// Title words (prompted for when empty)
        #[arg(num_args = 0..)]
        title: Vec<String>,

        /// Comma-separated list of tags
        #[arg(long)]
        tags: Option<String>,

        /// When it happened: 2024-06-01[T18:00], now, today, yesterday, monday, 3/15 ...
        #[arg(long, visible_alias = "time")]
        date: Option<String>,
    },

    /// List records from latest to oldest
    #[command(alias = "ls")]
    List {
        /// Start of the range, inclusive (defaults to 3 days ago)
        #[arg(long)]
        from: Option<String>,

        /// End of the range, inclusive (defaults to now)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show a single record
    #[command(alias = "v")]
    Show {
        /// Record id
        id: u64,
    },

    /// Change the title or tags of a record (prompts when no option is given)
    #[command(alias = "e")]
    Edit {
        /// Record id
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New comma-separated tags (empty string clears them)
        #[arg(long)]
        tags: Option<String>,
    },

    /// Log another occurrence of an existing record
    #[command(name = "continue", alias = "c")]
    Continue {
        /// Record id to copy
        id: u64,

        /// When the new occurrence happened (defaults to now)
        #[arg(long, visible_alias = "time")]
        date: Option<String>,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Record id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the path of the data file
    Path,
}
