//! Batch scanning across threads

use crate::trie::Trie;
use rayon::prelude::*;
use tansaku_core::Emit;

impl Trie {
    /// Scan many texts concurrently against the shared automaton
    ///
    /// Results are returned in input order; each entry equals what
    /// [`Trie::parse_text`] yields for the corresponding text.
    pub fn par_parse_texts<S>(&self, texts: &[S]) -> Vec<Vec<Emit>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("scanning {} texts in parallel", texts.len());
        texts
            .par_iter()
            .map(|text| self.parse_text(text.as_ref()))
            .collect()
    }
}
