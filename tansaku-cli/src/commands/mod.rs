//! CLI command implementations

use clap::Subcommand;

pub mod args;
pub mod dump;
pub mod scan;
pub mod tokenize;

pub use args::{MatchArgs, OutputFormat};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report every keyword match in the input files
    Scan(scan::ScanArgs),

    /// Split the input files into matched and unmatched segments
    Tokenize(tokenize::TokenizeArgs),

    /// Print the keyword trie, one state per line
    Dump(dump::DumpArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text - One match per line as source:start..=end and keyword");
                println!("  json - JSON array with match metadata");
            }
        }
    }
}
