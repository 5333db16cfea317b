//! Tokenize command implementation

use super::args::MatchArgs;
use anyhow::Result;
use clap::Args;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub common: MatchArgs,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let trie = self.common.build_trie(config.matching.clone())?;
        let documents = self.common.read_documents()?;

        let mut formatter = self.common.create_formatter(&config)?;
        for document in &documents {
            let tokens = trie.tokenize(&document.text);
            log::debug!("{}: {} tokens", document.source, tokens.len());
            formatter.format_tokens(&document.source, &tokens)?;
        }
        formatter.finish()
    }
}
