use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Trace hideout station prerequisites and total the resources they need
#[derive(Parser, Debug)]
#[command(name = "hideout-planner")]
#[command(version)]
#[command(about = "Trace hideout station prerequisites and total the resources they need", long_about = None)]
pub struct Args {
    /// Dataset path or http(s) URL [default: hideout.json]
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,

    /// File holding the pinned selection between runs
    #[arg(long, global = true, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Keep the selection in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Output format: text, json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to hideout-planner.config.yml in the working directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every station with its prerequisites
    Stations,
    /// Print a station and everything it transitively requires
    Closure {
        /// Station id, e.g. workbench-1
        station: String,
    },
    /// Total the requirements for one or more stations (like extend-clicking each)
    Summary {
        #[arg(required = true, num_args = 1..)]
        stations: Vec<String>,
    },
    /// Show the selection restored from the state file
    Show,
    /// Apply an event script (hover/leave/click/extend/show/summary/quit)
    Session {
        /// Script file; reads stdin when omitted or "-"
        script: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
