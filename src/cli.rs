use clap::Parser;
use std::path::PathBuf;

use crate::config::ErrorPolicy;

/// folder-tree - Print a directory tree as an ASCII diagram
#[derive(Parser, Debug)]
#[command(name = "folder-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to print (defaults to the configured root, "Assets")
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// How to handle directories that fail to list for reasons other than permissions
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<ErrorPolicy>,
}
