use clap::{Parser, Subcommand};

/// Command-line interface definition for taudit
/// CLI time-audit worksheet with in-memory sessions
#[derive(Parser)]
#[command(
    name = "taudit",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time-audit worksheet CLI: log admin task time, earn points, export to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "goal", help = "Set the daily challenge goal in minutes")]
        goal: Option<u32>,

        #[arg(
            long = "gamification",
            value_parser = ["on", "off"],
            help = "Enable or disable the gamification layer"
        )]
        gamification: Option<String>,
    },

    /// Start an interactive worksheet session (state lives in memory only)
    Session {
        /// Daily challenge goal in minutes, overrides the configured value
        #[arg(long = "goal", help = "Daily challenge goal in minutes")]
        goal: Option<u32>,

        /// Force the gamification layer on for this session
        #[arg(long = "gamification", conflicts_with = "no_gamification")]
        gamification: bool,

        /// Force the gamification layer off for this session
        #[arg(long = "no-gamification")]
        no_gamification: bool,
    },
}
