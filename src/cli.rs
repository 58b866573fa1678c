use std::path::PathBuf;

use clap::Parser;

use crate::board;

#[derive(Parser)]
#[command(name = "rota")]
#[command(
    author,
    version,
    about = "Reschedules recurring kanban tasks onto weekday lists and keeps each list sorted by due date"
)]
pub struct Cli {
    /// Credentials file: board identifier, API key, API token, one per line
    pub config: PathBuf,

    /// Log intended changes without issuing any mutation
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also append JSON logs to a daily-rolling file at this path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Board API base URL
    #[arg(long, default_value = board::DEFAULT_API_URL)]
    pub api_url: String,
}
