use std::path::PathBuf;

use clap::Parser;
use wayfinder::input::voice::DEFAULT_ATTEMPTS;
use wayfinder::session::SessionOptions;

#[derive(Parser, Debug)]
#[command(name = "wayfinder", version, about = "Find the quickest route between two places")]
pub struct Cli {
    /// CSV file with source, dest and dist columns; asks interactively when absent
    #[arg(long, env = "WAYFINDER_CSV")]
    pub csv: Option<PathBuf>,

    /// Attempts allowed for recognizing each location
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub attempts: u64,

    /// Answer a single query and exit
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            attempts: self.attempts as usize,
            once: self.once,
        }
    }
}
