//! Dump command implementation

use super::args::init_logging;
use crate::{error::CliError, input::FileReader};
use anyhow::{Context, Result};
use clap::Args;
use std::{fs, path::PathBuf};
use tansaku_engine::Trie;

/// Arguments for the dump command
#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Keyword file, one keyword per line
    #[arg(short, long, value_name = "FILE")]
    pub keywords: PathBuf,

    /// Fold ASCII letters, as `scan --ignore-case` does
    #[arg(long)]
    pub ignore_case: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DumpArgs {
    /// Execute the dump command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let keywords = FileReader::read_keywords(&self.keywords)?;
        let mut builder = Trie::builder().add_keywords(keywords);
        if self.ignore_case {
            builder = builder.case_insensitive();
        }
        let trie = builder
            .build()
            .map_err(|e| CliError::MatchingError(e.to_string()))?;
        log::info!(
            "Dumping {} states for {} keywords",
            trie.state_count(),
            trie.keyword_count()
        );

        let dump = trie.automaton().dump().to_string();
        match &self.output {
            Some(path) => fs::write(path, dump)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?,
            None => print!("{dump}"),
        }
        Ok(())
    }
}
