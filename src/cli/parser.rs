use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for timeledger
#[derive(Parser)]
#[command(
    name = "timeledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log freelance work sessions into per-project CSV ledgers and report unpaid totals",
    long_about = None
)]
pub struct Cli {
    /// Override the ledger directory (useful for tests or a second workspace)
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Without a command the interactive add flow runs
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record one work session (interactive)
    Add {
        /// Skip the project menu and use this existing project
        #[arg(long = "project", short = 'p')]
        project: Option<String>,
    },

    /// Show unpaid hours and value
    Totals {
        /// Project name or file; every project when omitted
        project: Option<String>,
    },

    /// List projects with their hourly rate and unpaid totals
    Projects,

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,
    },
}
