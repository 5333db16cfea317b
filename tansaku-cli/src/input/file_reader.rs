//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        String::from_utf8(bytes)
            .map_err(|_| CliError::InvalidUtf8(path.display().to_string()).into())
    }

    /// Read a keyword file: one keyword per line, blank lines ignored
    ///
    /// Trailing `\r` is stripped so CRLF files behave like LF files. Other
    /// whitespace is part of the keyword.
    pub fn read_keywords(path: &Path) -> Result<Vec<String>> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = Self::read_text(path)?;

        Ok(content
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
