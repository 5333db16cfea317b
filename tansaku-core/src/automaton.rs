//! Aho-Corasick automaton: trie construction, failure links and scanning

use crate::{
    emit::Emit,
    error::{CoreError, Result},
    state::{KeywordId, State, StateId},
};
use std::{ascii, collections::VecDeque, fmt};

/// A keyword as inserted, plus the state that recognizes it
#[derive(Debug, Clone)]
struct Keyword {
    text: String,
    terminal: StateId,
}

/// Keyword trie with breadth-first failure links
///
/// Keywords are inserted first; [`Automaton::build`] then computes failure
/// links and propagates suffix emits exactly once. A built automaton is
/// read-only during scans and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    keywords: Vec<Keyword>,
    case_insensitive: bool,
    constructed: bool,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// Create an automaton holding only the root state
    pub fn new() -> Self {
        Self {
            states: vec![State::new(0)],
            keywords: Vec::new(),
            case_insensitive: false,
            constructed: false,
        }
    }

    /// Create an automaton that folds ASCII letters to lowercase on both
    /// insertion and scan
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::new()
        }
    }

    /// Whether ASCII case is folded
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether failure links are built
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Number of non-empty keywords inserted so far
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Number of states including the root
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Keyword text for an insertion rank
    pub fn keyword(&self, id: KeywordId) -> Option<&str> {
        self.keywords.get(id).map(|keyword| keyword.text.as_str())
    }

    /// State for an id handed out by this automaton
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// Insert a keyword and return its insertion rank
    ///
    /// The empty keyword is ignored and yields `None`. Identical keywords are
    /// not merged: each insertion gets its own rank. Inserting into a built
    /// automaton discards its failure links; call [`Automaton::build`] again.
    pub fn insert(&mut self, keyword: &str) -> Option<KeywordId> {
        if keyword.is_empty() {
            return None;
        }
        if self.constructed {
            self.discard_links();
        }

        let mut current = StateId::ROOT;
        for byte in keyword.bytes() {
            let byte = self.fold(byte);
            current = match self.states[current.0].transition(byte) {
                Some(next) => next,
                None => self.add_state(current, byte),
            };
        }

        let id = self.keywords.len();
        self.keywords.push(Keyword {
            text: keyword.to_string(),
            terminal: current,
        });
        self.states[current.0].add_emit(id);
        Some(id)
    }

    /// Compute failure links and propagate emits breadth-first
    ///
    /// Idempotent: a second call on a built automaton does nothing.
    pub fn build(&mut self) {
        if self.constructed {
            return;
        }

        let mut queue = VecDeque::new();
        let depth_one: Vec<StateId> = self.states[StateId::ROOT.0]
            .transitions()
            .map(|(_, id)| id)
            .collect();
        for state in depth_one {
            self.states[state.0].set_failure(Some(StateId::ROOT));
            queue.push_back(state);
        }

        while let Some(current) = queue.pop_front() {
            let transitions: Vec<(u8, StateId)> = self.states[current.0].transitions().collect();
            for (byte, target) in transitions {
                let mut trace = self.failure_of(current);
                let failure = loop {
                    match self.next_state(trace, byte, false) {
                        Some(state) => break state,
                        None => trace = self.failure_of(trace),
                    }
                };

                self.states[target.0].set_failure(Some(failure));
                let inherited: Vec<KeywordId> =
                    self.states[failure.0].emit_set().iter().copied().collect();
                self.states[target.0].add_emits(inherited);
                queue.push_back(target);
            }
        }

        self.constructed = true;
    }

    /// Transition from `current` on `byte`
    ///
    /// A missing transition from the root loops back to the root unless
    /// `ignore_root` is set; from any other state it yields `None`.
    pub fn next_state(&self, current: StateId, byte: u8, ignore_root: bool) -> Option<StateId> {
        match self.states[current.0].transition(byte) {
            Some(next) => Some(next),
            None if current == StateId::ROOT && !ignore_root => Some(StateId::ROOT),
            None => None,
        }
    }

    /// Resolve the state reached on `byte`, following failure links on
    /// mismatch
    pub fn get_state(&self, current: StateId, byte: u8) -> StateId {
        let mut state = current;
        loop {
            if let Some(next) = self.next_state(state, self.fold(byte), false) {
                return next;
            }
            state = self.failure_of(state);
        }
    }

    /// Scan a byte sequence and report every keyword occurrence
    ///
    /// Emits are ordered by end position, then by ascending insertion rank.
    /// Overlapping and nested occurrences are all reported.
    pub fn scan<I>(&self, haystack: I) -> Result<Vec<Emit>>
    where
        I: IntoIterator<Item = u8>,
    {
        if !self.constructed {
            return Err(CoreError::NotConstructed);
        }
        Ok(self.scan_built(haystack))
    }

    /// Build failure links and wrap the automaton for infallible scanning
    pub fn freeze(mut self) -> BuiltAutomaton {
        self.build();
        BuiltAutomaton { inner: self }
    }

    /// Pre-order listing of the trie, one state per line
    ///
    /// Each line is the state's byte, indented by depth, followed by
    /// `#rank` for every keyword ending there. Children follow in byte order.
    pub fn dump(&self) -> TrieDump<'_> {
        TrieDump { automaton: self }
    }

    fn scan_built<I>(&self, haystack: I) -> Vec<Emit>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut emits = Vec::new();
        let mut current = StateId::ROOT;
        for (pos, byte) in haystack.into_iter().enumerate() {
            current = self.get_state(current, byte);
            for id in self.states[current.0].emits() {
                let keyword = &self.keywords[id];
                let start = pos + 1 - keyword.text.len();
                emits.push(Emit::new(start, pos, keyword.text.clone(), id));
            }
        }
        emits
    }

    fn failure_of(&self, state: StateId) -> StateId {
        self.states[state.0].failure().unwrap_or(StateId::ROOT)
    }

    fn fold(&self, byte: u8) -> u8 {
        if self.case_insensitive {
            byte.to_ascii_lowercase()
        } else {
            byte
        }
    }

    fn add_state(&mut self, parent: StateId, byte: u8) -> StateId {
        let id = StateId(self.states.len());
        let depth = self.states[parent.0].depth() + 1;
        self.states.push(State::new(depth));
        self.states[parent.0].add_transition(byte, id);
        id
    }

    fn discard_links(&mut self) {
        for state in &mut self.states {
            state.reset_links();
        }
        for (id, keyword) in self.keywords.iter().enumerate() {
            self.states[keyword.terminal.0].add_emit(id);
        }
        self.constructed = false;
    }
}

/// An automaton whose failure links are built
///
/// Obtained from [`Automaton::freeze`]. It cannot be modified, so scanning
/// cannot fail.
#[derive(Debug, Clone)]
pub struct BuiltAutomaton {
    inner: Automaton,
}

impl BuiltAutomaton {
    /// Scan a byte sequence and report every keyword occurrence
    ///
    /// Same ordering as [`Automaton::scan`].
    pub fn scan<I>(&self, haystack: I) -> Vec<Emit>
    where
        I: IntoIterator<Item = u8>,
    {
        self.inner.scan_built(haystack)
    }

    /// The underlying automaton
    pub fn automaton(&self) -> &Automaton {
        &self.inner
    }

    /// Unwrap into a modifiable automaton
    pub fn into_inner(self) -> Automaton {
        self.inner
    }
}

/// Display adapter returned by [`Automaton::dump`]
#[derive(Debug)]
pub struct TrieDump<'a> {
    automaton: &'a Automaton,
}

impl fmt::Display for TrieDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let automaton = self.automaton;
        let mut terminals: Vec<Vec<KeywordId>> = vec![Vec::new(); automaton.states.len()];
        for (id, keyword) in automaton.keywords.iter().enumerate() {
            terminals[keyword.terminal.0].push(id);
        }

        writeln!(f, "root")?;
        // explicit stack: long keywords make deep tries
        let mut stack: Vec<(u8, StateId)> = automaton.states[StateId::ROOT.0]
            .transitions()
            .collect();
        stack.reverse();

        while let Some((byte, id)) = stack.pop() {
            let state = &automaton.states[id.0];
            write!(
                f,
                "{:indent$}{}",
                "",
                ascii::escape_default(byte),
                indent = state.depth() * 2
            )?;
            for rank in &terminals[id.0] {
                write!(f, " #{rank}")?;
            }
            writeln!(f)?;

            let first_child = stack.len();
            stack.extend(state.transitions());
            stack[first_child..].reverse();
        }
        Ok(())
    }
}
