//! Clap argument definitions for the `orgtree` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "orgtree", version)]
#[command(about = "Browse and search organization rosters")]
pub struct Cli {
    /// Log verbosity (-v for progress, -vv for row-level detail)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `orgtree tree`.
#[derive(Args, Debug, Clone)]
pub struct TreeCommand {
    /// Roster CSV file
    pub csv: PathBuf,

    /// Position code at or below which members are marked as leaders [default: 100]
    #[arg(short = 'l', long)]
    pub leader_threshold: Option<u32>,

    /// Hide members and show units only
    #[arg(long)]
    pub units_only: bool,
}

/// Arguments for `orgtree search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Roster CSV file
    pub csv: PathBuf,

    /// Text to look for in unit names and codes and in member names, numbers and titles
    pub query: String,

    /// Maximum results to return [default: 10]
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `orgtree export`.
#[derive(Args, Debug, Clone)]
pub struct ExportCommand {
    /// Roster CSV file
    pub csv: PathBuf,

    /// Write the snapshot to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Position code at or below which members are marked as leaders [default: 100]
    #[arg(short = 'l', long)]
    pub leader_threshold: Option<u32>,
}

/// Arguments for `orgtree stats`.
#[derive(Args, Debug, Clone)]
pub struct StatsCommand {
    /// Roster CSV file
    pub csv: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `orgtree init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global config (~/.orgtree.toml) instead of local
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

/// Supported `orgtree` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the organization tree with headcounts and leaders
    #[command(after_help = "\
Units are listed by code, members by position code and then employee number.
Each unit shows its direct headcount, the total including sub-units, and the
number of direct members per position. Leaders are marked with ★.")]
    Tree(TreeCommand),

    /// Search units and members
    #[command(after_help = "\
EXAMPLES:
  orgtree search roster.csv 総務          Units or members containing 総務
  orgtree search roster.csv 1001 -n 3     Top three matches for an employee number
  orgtree search roster.csv 課長 --json   Machine-readable results")]
    Search(SearchCommand),

    /// Write the tree and search index as a JSON snapshot
    Export(ExportCommand),

    /// Show how the roster was read
    Stats(StatsCommand),

    /// Initialize orgtree configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
