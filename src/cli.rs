use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdeck", about = "Task administration console", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive console (default)
    Console,

    /// List all tasks
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Create a new task
    Create {
        /// Display name
        name: String,
        /// Task type (e.g. "script", "rebuild-index")
        #[arg(short, long, default_value = "script")]
        kind: String,
        /// Simulated run duration in seconds
        #[arg(long, default_value = "30")]
        duration: u64,
        /// Recurrence schedule (omit for a one-shot task)
        #[arg(short, long)]
        schedule: Option<String>,
    },

    /// Run a task
    Run {
        /// Task id
        id: u64,
    },

    /// Stop a running task
    Stop {
        /// Task id
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },
}
