//! Whole-word filtering of scan results

use tansaku_core::{Emit, Intervalable};

/// Keep only emits not touching an alphabetic character on either side
///
/// The character before `start` and the one after `end` are inspected when
/// they exist; text edges count as boundaries.
pub fn retain_whole_words(emits: &mut Vec<Emit>, text: &str) {
    emits.retain(|emit| is_whole_word(emit, text));
}

fn is_whole_word(emit: &Emit, text: &str) -> bool {
    let before = text
        .get(..emit.start())
        .and_then(|head| head.chars().next_back());
    let after = text
        .get(emit.end() + 1..)
        .and_then(|tail| tail.chars().next());

    !before.is_some_and(char::is_alphabetic) && !after.is_some_and(char::is_alphabetic)
}
