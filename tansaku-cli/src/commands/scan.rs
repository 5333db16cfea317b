//! Scan command implementation

use super::args::MatchArgs;
use anyhow::Result;
use clap::Args;
use std::time::Instant;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: MatchArgs,

    /// Report the number of matches per source instead of the matches
    #[arg(long)]
    pub count: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting keyword scan");
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let trie = self.common.build_trie(config.matching.clone())?;
        let documents = self.common.read_documents()?;

        let start = Instant::now();
        let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
        let results = trie.par_parse_texts(&texts);
        log::info!(
            "Scanned {} sources in {:.2?}",
            documents.len(),
            start.elapsed()
        );

        let mut formatter = self.common.create_formatter(&config)?;
        for (document, emits) in documents.iter().zip(&results) {
            if self.count {
                formatter.format_count(&document.source, emits.len())?;
                continue;
            }
            for emit in emits {
                formatter.format_match(&document.source, emit, &document.text[emit.range()])?;
            }
        }
        formatter.finish()?;

        let total: usize = results.iter().map(Vec::len).sum();
        log::info!("Reported {total} matches");
        Ok(())
    }
}
