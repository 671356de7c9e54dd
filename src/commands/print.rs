//! Print command implementation

use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{Config, ErrorPolicy};
use crate::error::Result;
use crate::tree::TreePrinter;

/// Settings for one run, after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSettings {
    pub root: PathBuf,
    pub on_error: ErrorPolicy,
}

impl PrintSettings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            root: cli.path.clone().unwrap_or_else(|| config.tree.root.clone()),
            on_error: cli.on_error.unwrap_or(config.tree.on_error),
        }
    }
}

/// Run the print command
pub fn run(settings: PrintSettings) -> Result<()> {
    tracing::info!(root = %settings.root.display(), policy = ?settings.on_error, "Printing tree");

    let stdout = io::stdout();
    let mut printer =
        TreePrinter::new(BufWriter::new(stdout.lock())).with_error_policy(settings.on_error);
    printer.print_root(&settings.root)
}
