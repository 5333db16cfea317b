//! Arguments shared by the matching commands

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_patterns, FileReader},
    output::{JsonFormatter, OutputFormatter, TextFormatter},
};
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use tansaku_engine::{DuplicatePolicy, MatchConfig, Trie};

/// Keyword, input and matching options
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Keyword file, one keyword per line
    #[arg(short, long, value_name = "FILE")]
    pub keywords: PathBuf,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Resolve overlapping matches, keeping the longest
    #[arg(long)]
    pub no_overlaps: bool,

    /// Only report matches that are whole words
    #[arg(short, long)]
    pub whole_words: bool,

    /// Match ASCII letters regardless of case
    #[arg(long)]
    pub ignore_case: bool,

    /// Collapse repeated keywords into one
    #[arg(long)]
    pub dedupe: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one match per line
    Text,
    /// JSON array with match metadata
    Json,
}

/// An input file and its contents
#[derive(Debug)]
pub struct Document {
    /// Display name of the source
    pub source: String,
    /// UTF-8 contents
    pub text: String,
}

/// Initialize logging from a `-v` count unless `quiet` is set
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // a logger may already be installed when commands run in-process
        let _ =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init();
    }
}

impl MatchArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        init_logging(self.verbose, self.quiet);
    }

    /// Load the config file, if any, with command-line flags layered on top
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        self.apply_flags(&mut config.matching);
        if let Some(format) = self.format {
            config.output.default_format = format;
        }
        Ok(config)
    }

    fn apply_flags(&self, matching: &mut MatchConfig) {
        if self.no_overlaps {
            matching.allow_overlaps = false;
        }
        if self.whole_words {
            matching.only_whole_words = true;
        }
        if self.ignore_case {
            matching.case_insensitive = true;
        }
        if self.dedupe {
            matching.duplicates = DuplicatePolicy::Deduplicate;
        }
    }

    /// Read the keyword file and build the trie
    pub fn build_trie(&self, matching: MatchConfig) -> Result<Trie> {
        let keywords = FileReader::read_keywords(&self.keywords)?;
        log::info!(
            "Loaded {} keywords from {}",
            keywords.len(),
            self.keywords.display()
        );

        Trie::builder()
            .config(matching)
            .add_keywords(keywords)
            .build()
            .map_err(|e| CliError::MatchingError(e.to_string()).into())
    }

    /// Resolve input patterns and read every file in parallel
    pub fn read_documents(&self) -> Result<Vec<Document>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Reading {} input files", files.len());

        files
            .par_iter()
            .map(|path| -> Result<Document> {
                Ok(Document {
                    source: path.display().to_string(),
                    text: FileReader::read_text(path)?,
                })
            })
            .collect()
    }

    /// Create the formatter selected by the merged configuration
    pub fn create_formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match config.output.default_format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer).pretty(config.output.pretty_json))
            }
        };
        Ok(formatter)
    }
}
