use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "accessormap")]
#[command(about = "Detects trivial getter and setter methods in Java sources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a Java file or directory and report accessor methods
    Scan {
        /// File or directory to scan
        path: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .accessormap.toml)
        #[arg(long, env = "ACCESSORMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Number of worker threads (0 = one per CPU)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// List every method, not only accessors
        #[arg(long)]
        all: bool,
    },

    /// Print whether one method is an accessor
    Check {
        /// Java source file
        file: PathBuf,

        /// Method as Class.method (nested classes as Outer.Inner.method)
        method: String,
    },

    /// Initialize a .accessormap.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
