//! Automaton states stored in an index arena

use std::collections::{BTreeMap, BTreeSet};

/// Index of a state inside an automaton's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The root state of every automaton
    pub const ROOT: StateId = StateId(0);

    /// Position of the state in the arena
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Insertion rank of a keyword, also its slot in the keyword table
pub type KeywordId = usize;

/// One trie node
///
/// Children are owned through the arena; `failure` is a plain id pointing
/// up or across the trie and never implies ownership.
#[derive(Debug, Clone, Default)]
pub struct State {
    depth: usize,
    transitions: BTreeMap<u8, StateId>,
    failure: Option<StateId>,
    emits: BTreeSet<KeywordId>,
}

impl State {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    /// Distance from the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child reached on `byte`, if any
    pub fn transition(&self, byte: u8) -> Option<StateId> {
        self.transitions.get(&byte).copied()
    }

    /// Outgoing transitions in byte order
    pub fn transitions(&self) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.transitions.iter().map(|(&byte, &id)| (byte, id))
    }

    /// Failure link; `None` for the root or before construction
    pub fn failure(&self) -> Option<StateId> {
        self.failure
    }

    /// Keywords recognized upon entering this state, by ascending rank
    pub fn emits(&self) -> impl Iterator<Item = KeywordId> + '_ {
        self.emits.iter().copied()
    }

    pub(crate) fn add_transition(&mut self, byte: u8, target: StateId) {
        self.transitions.insert(byte, target);
    }

    pub(crate) fn set_failure(&mut self, failure: Option<StateId>) {
        self.failure = failure;
    }

    pub(crate) fn add_emit(&mut self, keyword: KeywordId) {
        self.emits.insert(keyword);
    }

    pub(crate) fn add_emits(&mut self, keywords: impl IntoIterator<Item = KeywordId>) {
        self.emits.extend(keywords);
    }

    pub(crate) fn emit_set(&self) -> &BTreeSet<KeywordId> {
        &self.emits
    }

    pub(crate) fn reset_links(&mut self) {
        self.failure = None;
        self.emits.clear();
    }
}
