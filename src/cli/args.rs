use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mihrab", version, author, about = "A terminal prayer-times companion for your local masjid")]
pub struct Cli {
    /// Day schedule JSON (defaults to the synced file in the data directory)
    #[arg(long, global = true)]
    pub schedule: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's timetable and the countdown to the next adhan
    Times,
    /// Show only the next event
    Next {
        /// Count down to the next iqamah instead of the next adhan
        #[arg(long)]
        iqamah: bool,
    },
    /// Register this device's push token with the venue backend
    Register,
}
