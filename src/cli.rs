use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skycrew-roster")]
#[command(version, about = "Generate and manage SkyCrew flight rosters")]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Roster database path, overrides the config file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Base URL of the record services, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate (or regenerate) the roster for a flight and store it
    Generate {
        /// Flight number, e.g. SC1001
        flight_id: String,
    },

    /// Print a stored roster
    Show {
        flight_id: String,
    },

    /// List stored rosters
    List,

    /// Write a stored roster to a JSON file
    Export {
        flight_id: String,

        /// Output file
        output: PathBuf,
    },

    /// Print the seat plan of a stored roster
    Seats {
        flight_id: String,
    },

    /// Delete a stored roster
    Delete {
        flight_id: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
