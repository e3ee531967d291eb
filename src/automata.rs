// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Deterministic finite-state automata
//!
//! An [Automaton] is an immutable value: an alphabet, a set of states, one
//! initial state, a set of final states, and a total transition function.
//! States are dense integer handles from 0 to N-1 where N is the number of
//! states; callers with arbitrary state labels go through
//! [AutomatonBuilder], which maps labels to handles at the boundary.
//!
//! The structural invariants (initial state in the state set, final states
//! a subset of the state set, transition table total over states and
//! alphabet) are validated once, in [Automaton::new]. Because the value is
//! immutable afterwards, they are never re-checked.
//!
//! Every "modifying" operation ([replace](Automaton::replace),
//! [automerge](Automaton::automerge), and the algebraic operators) returns
//! a new automaton. Equivalence of two states is a *one-step* test: same
//! finality and same transitions after identifying one state with the
//! other. Full behavioral equivalence emerges from repeated merging, not
//! from one call; see [automerge](Automaton::automerge).
//!

use std::{collections::HashMap, fmt::Display, hash::Hash};

use crate::{
    alphabets::{Alphabet, Symbol},
    errors::Error,
};

///
/// Deterministic finite-state automaton
///
/// States are integer handles between 0 and `num_states() - 1`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    // the alphabet; its fixed symbol order indexes transition rows
    alphabet: Alphabet,
    // index of the initial state
    initial: usize,
    // finals[s] is true iff state s is accepting; length = number of states
    finals: Box<[bool]>,
    // transitions[s][k] = successor of state s via the k-th alphabet symbol
    transitions: Box<[Box<[usize]>]>,
}

impl Automaton {
    ///
    /// Construct a validated automaton
    ///
    /// - `num_states`: size of the state set; states are `0..num_states`
    /// - `initial`: the initial state
    /// - `finals`: the accepting states
    /// - `transitions`: one row per state, one entry per alphabet symbol in
    ///   the alphabet's fixed order
    ///
    /// # Errors
    ///
    /// - [Error::BadInitialState] if `initial` is not in `0..num_states`
    /// - [Error::BadFinalState] if some final state is not in `0..num_states`
    /// - [Error::BadTransitionTable] if the table does not have exactly
    ///   `num_states` rows of `alphabet.len()` entries, or if some entry is
    ///   not in `0..num_states`
    ///
    /// # Example
    ///
    /// ```
    /// use dfa_algebra::{alphabets::Alphabet, automata::Automaton};
    ///
    /// // accepts strings of a's of even length
    /// let even = Automaton::new(
    ///     Alphabet::from_chars("a".chars()),
    ///     2,
    ///     0,
    ///     vec![0],
    ///     vec![vec![1], vec![0]],
    /// )
    /// .unwrap();
    /// assert!(even.accepts_str(""));
    /// assert!(!even.accepts_str("a"));
    /// assert!(even.accepts_str("aa"));
    /// ```
    pub fn new(
        alphabet: Alphabet,
        num_states: usize,
        initial: usize,
        finals: impl IntoIterator<Item = usize>,
        transitions: Vec<Vec<usize>>,
    ) -> Result<Automaton, Error> {
        if initial >= num_states {
            return Err(Error::BadInitialState);
        }
        let mut final_flags = vec![false; num_states];
        for s in finals {
            if s >= num_states {
                return Err(Error::BadFinalState);
            }
            final_flags[s] = true;
        }
        if transitions.len() != num_states {
            return Err(Error::BadTransitionTable);
        }
        let mut table = Vec::with_capacity(num_states);
        for row in transitions {
            if row.len() != alphabet.len() || row.iter().any(|&t| t >= num_states) {
                return Err(Error::BadTransitionTable);
            }
            table.push(row.into());
        }
        Ok(Automaton {
            alphabet,
            initial,
            finals: final_flags.into(),
            transitions: table.into(),
        })
    }

    // Construct without validation. For internal use where validity holds
    // by construction (crawl, replace, renumbering).
    pub(crate) fn from_parts(
        alphabet: Alphabet,
        initial: usize,
        finals: Vec<bool>,
        transitions: Vec<Vec<usize>>,
    ) -> Automaton {
        debug_assert!(initial < finals.len());
        debug_assert!(transitions.len() == finals.len());
        debug_assert!(transitions
            .iter()
            .all(|r| r.len() == alphabet.len() && r.iter().all(|&t| t < finals.len())));
        Automaton {
            alphabet,
            initial,
            finals: finals.into(),
            transitions: transitions.into_iter().map(|r| r.into()).collect(),
        }
    }

    /// The alphabet this automaton ranges over
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of states
    pub fn num_states(&self) -> usize {
        self.finals.len()
    }

    /// The initial state
    pub fn initial_state(&self) -> usize {
        self.initial
    }

    /// Check whether a state is final
    ///
    /// # Panics
    ///
    /// If the state is out of range.
    pub fn is_final(&self, state: usize) -> bool {
        self.finals[state]
    }

    /// Iterate over the final states in increasing order
    pub fn final_states(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_states()).filter(move |&s| self.finals[s])
    }

    ///
    /// Successor of a state via a symbol
    ///
    /// # Panics
    ///
    /// If the state is out of range or the symbol is not in the alphabet.
    /// Feeding a symbol outside the alphabet is a precondition violation,
    /// not a runtime condition the automaton handles: the transition
    /// function is total over the alphabet, wildcard included.
    ///
    pub fn next(&self, state: usize, symbol: Symbol) -> usize {
        match self.alphabet.index_of(symbol) {
            Some(k) => self.transitions[state][k],
            None => panic!("symbol {} is not in the alphabet", symbol),
        }
    }

    ///
    /// Check whether a symbol sequence is accepted
    ///
    /// Walks the transition function from the initial state, consuming the
    /// sequence left to right; the empty sequence is accepted iff the
    /// initial state is final.
    ///
    /// # Panics
    ///
    /// If some symbol in the sequence is not in the alphabet.
    ///
    pub fn accepts(&self, input: impl IntoIterator<Item = Symbol>) -> bool {
        let last = input.into_iter().fold(self.initial, |s, c| self.next(s, c));
        self.finals[last]
    }

    ///
    /// Check whether a string is accepted
    ///
    /// Each character is classified through the alphabet: listed characters
    /// map to themselves, anything else to the wildcard.
    ///
    /// # Panics
    ///
    /// If the string contains an unlisted character and the alphabet has no
    /// wildcard to absorb it.
    ///
    /// # Example
    ///
    /// ```
    /// use dfa_algebra::{alphabets::Alphabet, automata::Automaton};
    ///
    /// // accepts exactly "a": everything unexpected falls into state 2
    /// let a = Automaton::new(
    ///     Alphabet::with_wildcard("a".chars()),
    ///     3,
    ///     0,
    ///     vec![1],
    ///     vec![vec![1, 2], vec![2, 2], vec![2, 2]],
    /// )
    /// .unwrap();
    /// assert!(a.accepts_str("a"));
    /// assert!(!a.accepts_str("z"));
    /// assert!(!a.accepts_str(""));
    /// ```
    pub fn accepts_str(&self, input: &str) -> bool {
        self.accepts(input.chars().map(|c| self.alphabet.classify(c)))
    }

    ///
    /// Check whether two states are functionally equivalent
    ///
    /// True iff `s1` and `s2` have the same finality and, for every
    /// alphabet symbol, the same successor once `s2` is identified with
    /// `s1`: a transition into `s2` counts as a transition into `s1` on
    /// both sides of the comparison.
    ///
    /// This is a one-step test, not a bisimulation closure. Two states that
    /// only become equivalent after *other* states merge are reported
    /// inequivalent here; [automerge](Self::automerge) reaches them by
    /// repeated application.
    ///
    /// # Panics
    ///
    /// If either state is out of range.
    ///
    pub fn equivalent(&self, s1: usize, s2: usize) -> bool {
        if self.finals[s1] != self.finals[s2] {
            return false;
        }
        for k in 0..self.alphabet.len() {
            let mut next1 = self.transitions[s1][k];
            let mut next2 = self.transitions[s2][k];
            if next1 == s2 {
                next1 = s1;
            }
            if next2 == s2 {
                next2 = s1;
            }
            if next1 != next2 {
                return false;
            }
        }
        true
    }

    ///
    /// Merge a state into another
    ///
    /// Returns a new automaton in which every occurrence of `old` (as the
    /// initial state, as a final state, as a transition source or target)
    /// is rewritten to `new`, and `old` is removed from the state set. The
    /// remaining states are renumbered densely, so handles above `old`
    /// shift down by one.
    ///
    /// # Panics
    ///
    /// If either state is out of range or `old == new`.
    ///
    pub fn replace(&self, old: usize, new: usize) -> Automaton {
        let n = self.num_states();
        assert!(old < n && new < n && old != new);

        // handle of state s after old is rewritten to new and removed
        let remap = |s: usize| {
            let t = if s == old { new } else { s };
            if t < old {
                t
            } else {
                t - 1
            }
        };

        let mut finals = vec![false; n - 1];
        for s in 0..n {
            if self.finals[s] {
                finals[remap(s)] = true;
            }
        }
        let mut transitions = Vec::with_capacity(n - 1);
        for s in (0..n).filter(|&s| s != old) {
            let row = self.transitions[s].iter().map(|&t| remap(t)).collect();
            transitions.push(row);
        }
        Automaton::from_parts(self.alphabet.clone(), remap(self.initial), finals, transitions)
    }

    ///
    /// Merge equivalent states until none remain
    ///
    /// Repeatedly scans all pairs of distinct states for an
    /// [equivalent](Self::equivalent) pair and merges the higher handle
    /// into the lower one, restarting the scan after every merge. This is a
    /// fixpoint, not a one-pass reduction: merging two states can newly
    /// equate two others. Terminates because every merge strictly reduces
    /// the state count.
    ///
    pub fn automerge(&self) -> Automaton {
        let mut result = self.clone();
        while let Some((keep, drop)) = result.find_mergeable_pair() {
            result = result.replace(drop, keep);
        }
        result
    }

    // first pair (i, j) with i < j and equivalent(i, j), if any
    fn find_mergeable_pair(&self) -> Option<(usize, usize)> {
        let n = self.num_states();
        for i in 0..n {
            for j in i + 1..n {
                if self.equivalent(i, j) {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} states over {}", self.num_states(), self.alphabet)?;
        writeln!(f, "initial state: s{}", self.initial)?;
        write!(f, "final states:")?;
        for s in self.final_states() {
            write!(f, " s{}", s)?;
        }
        writeln!(f)?;
        writeln!(f, "transitions:")?;
        for s in 0..self.num_states() {
            for (k, symbol) in self.alphabet.iter().enumerate() {
                writeln!(f, "  \u{03B4}(s{}, {}) = s{}", s, symbol, self.transitions[s][k])?;
            }
        }
        Ok(())
    }
}

///
/// An automaton accepting nothing, not even the empty string
///
/// One non-final state with all transitions looping on itself.
///
pub fn null(alphabet: &Alphabet) -> Automaton {
    let row = vec![0; alphabet.len()];
    Automaton::from_parts(alphabet.clone(), 0, vec![false], vec![row])
}

///
/// An automaton accepting only the empty string
///
/// This is the identity element of concatenation.
///
/// # Example
///
/// ```
/// use dfa_algebra::{alphabets::Alphabet, automata::epsilon};
///
/// let e = epsilon(&Alphabet::from_chars("a".chars()));
/// assert!(e.accepts_str(""));
/// assert!(!e.accepts_str("a"));
/// ```
pub fn epsilon(alphabet: &Alphabet) -> Automaton {
    let to_sink = vec![1; alphabet.len()];
    let sink = vec![1; alphabet.len()];
    Automaton::from_parts(alphabet.clone(), 0, vec![true, false], vec![to_sink, sink])
}

// State under construction: finality plus one optional target per symbol
#[derive(Debug)]
struct StateInConstruction {
    is_final: bool,
    targets: Box<[Option<usize>]>,
}

///
/// Automaton builder
///
/// Maps arbitrary caller-supplied state labels to dense handles. Handles
/// are assigned in first-mention order: the first label passed to any
/// builder method becomes state 0, and so on. [build](Self::build)
/// validates the result through [Automaton::new], so a state left without
/// a transition for some alphabet symbol fails with
/// [Error::BadTransitionTable] and a missing initial state fails with
/// [Error::BadInitialState].
///
#[derive(Debug)]
pub struct AutomatonBuilder<T> {
    alphabet: Alphabet,
    id_map: HashMap<T, usize>,
    states: Vec<StateInConstruction>,
    initial: Option<usize>,
}

impl<T: Eq + Hash + Clone> AutomatonBuilder<T> {
    ///
    /// Create a new builder over an alphabet
    ///
    pub fn new(alphabet: Alphabet) -> Self {
        AutomatonBuilder {
            alphabet,
            id_map: HashMap::new(),
            states: Vec::new(),
            initial: None,
        }
    }

    fn get_state_id(&mut self, state: &T) -> usize {
        match self.id_map.get(state) {
            Some(i) => *i,
            None => {
                let i = self.states.len();
                self.states.push(StateInConstruction {
                    is_final: false,
                    targets: vec![None; self.alphabet.len()].into(),
                });
                self.id_map.insert(state.clone(), i);
                i
            }
        }
    }

    /// Handle assigned to a label, if the label has been mentioned
    pub fn state_id(&self, state: &T) -> Option<usize> {
        self.id_map.get(state).copied()
    }

    ///
    /// Nominate the initial state
    ///
    pub fn set_initial(&mut self, state: &T) -> &mut Self {
        let i = self.get_state_id(state);
        self.initial = Some(i);
        self
    }

    ///
    /// Mark a final state
    ///
    pub fn mark_final(&mut self, state: &T) -> &mut Self {
        let i = self.get_state_id(state);
        self.states[i].is_final = true;
        self
    }

    ///
    /// Add a transition
    ///
    /// A later call for the same state and symbol overwrites the earlier
    /// target.
    ///
    /// # Panics
    ///
    /// If the symbol is not in the builder's alphabet.
    ///
    pub fn set_transition(&mut self, state: &T, symbol: Symbol, next: &T) -> &mut Self {
        let k = match self.alphabet.index_of(symbol) {
            Some(k) => k,
            None => panic!("symbol {} is not in the alphabet", symbol),
        };
        let i = self.get_state_id(state);
        let j = self.get_state_id(next);
        self.states[i].targets[k] = Some(j);
        self
    }

    ///
    /// Construct the automaton
    ///
    /// # Errors
    ///
    /// - [Error::BadInitialState] if no initial state was nominated
    /// - [Error::BadTransitionTable] if some state lacks a transition for
    ///   some alphabet symbol
    ///
    pub fn build(&self) -> Result<Automaton, Error> {
        let initial = self.initial.ok_or(Error::BadInitialState)?;
        let finals = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_final)
            .map(|(i, _)| i);
        let mut transitions = Vec::with_capacity(self.states.len());
        for s in &self.states {
            let row: Result<Vec<usize>, Error> = s
                .targets
                .iter()
                .map(|t| t.ok_or(Error::BadTransitionTable))
                .collect();
            transitions.push(row?);
        }
        Automaton::new(
            self.alphabet.clone(),
            self.states.len(),
            initial,
            finals,
            transitions,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn binary_alphabet() -> Alphabet {
        Alphabet::from_chars("01".chars())
    }

    // The two-letter machine accepting exactly "a"
    fn just_a() -> Automaton {
        let mut builder = AutomatonBuilder::new(Alphabet::from_chars("ab".chars()));
        builder
            .set_initial(&"start")
            .mark_final(&"hit")
            .set_transition(&"start", Symbol::Char('a'), &"hit")
            .set_transition(&"start", Symbol::Char('b'), &"ob")
            .set_transition(&"hit", Symbol::Char('a'), &"ob")
            .set_transition(&"hit", Symbol::Char('b'), &"ob")
            .set_transition(&"ob", Symbol::Char('a'), &"ob")
            .set_transition(&"ob", Symbol::Char('b'), &"ob");
        builder.build().unwrap()
    }

    #[test]
    fn test_validation_initial() {
        let r = Automaton::new(binary_alphabet(), 1, 1, vec![], vec![vec![0, 0]]);
        assert_eq!(r.unwrap_err(), Error::BadInitialState);

        // no states at all: the initial state can't exist
        let r = Automaton::new(binary_alphabet(), 0, 0, vec![], vec![]);
        assert_eq!(r.unwrap_err(), Error::BadInitialState);
    }

    #[test]
    fn test_validation_finals() {
        let r = Automaton::new(binary_alphabet(), 1, 0, vec![3], vec![vec![0, 0]]);
        assert_eq!(r.unwrap_err(), Error::BadFinalState);
    }

    #[test]
    fn test_validation_table() {
        // missing row
        let r = Automaton::new(binary_alphabet(), 2, 0, vec![], vec![vec![0, 0]]);
        assert_eq!(r.unwrap_err(), Error::BadTransitionTable);

        // row of the wrong arity
        let r = Automaton::new(binary_alphabet(), 1, 0, vec![], vec![vec![0]]);
        assert_eq!(r.unwrap_err(), Error::BadTransitionTable);

        // target outside the state set
        let r = Automaton::new(binary_alphabet(), 1, 0, vec![], vec![vec![0, 1]]);
        assert_eq!(r.unwrap_err(), Error::BadTransitionTable);
    }

    #[test]
    fn test_builder_incomplete() {
        let mut builder: AutomatonBuilder<u32> = AutomatonBuilder::new(binary_alphabet());
        builder.set_initial(&0);
        builder.set_transition(&0, Symbol::Char('0'), &0);
        assert_eq!(builder.build().unwrap_err(), Error::BadTransitionTable);

        builder.set_transition(&0, Symbol::Char('1'), &0);
        assert!(builder.build().is_ok());

        let no_initial: AutomatonBuilder<u32> = AutomatonBuilder::new(binary_alphabet());
        assert_eq!(no_initial.build().unwrap_err(), Error::BadInitialState);
    }

    #[test]
    fn test_accepts() {
        let a = just_a();
        assert!(!a.accepts_str(""));
        assert!(a.accepts_str("a"));
        assert!(!a.accepts_str("b"));
        assert!(!a.accepts_str("aa"));
        println!("{}", a);
    }

    #[test]
    fn test_accepts_empty_is_initial_finality() {
        let e = epsilon(&binary_alphabet());
        let n = null(&binary_alphabet());
        let a = just_a();
        for fsm in &[e, n, a] {
            assert_eq!(fsm.accepts_str(""), fsm.is_final(fsm.initial_state()));
        }
    }

    #[test]
    fn test_null_and_epsilon() {
        let alphabet = Alphabet::from_chars("a".chars());
        assert!(!null(&alphabet).accepts_str("a"));
        assert!(!null(&alphabet).accepts_str(""));
        assert!(epsilon(&alphabet).accepts_str(""));
        assert!(!epsilon(&alphabet).accepts_str("a"));
    }

    #[test]
    fn test_wildcard_transitions() {
        // accepts any single character other than 'a' or 'b'
        let alphabet = Alphabet::with_wildcard("ab".chars());
        let mut builder = AutomatonBuilder::new(alphabet);
        builder
            .set_initial(&0)
            .mark_final(&1)
            .set_transition(&0, Symbol::Char('a'), &2)
            .set_transition(&0, Symbol::Char('b'), &2)
            .set_transition(&0, Symbol::Other, &1)
            .set_transition(&1, Symbol::Char('a'), &2)
            .set_transition(&1, Symbol::Char('b'), &2)
            .set_transition(&1, Symbol::Other, &2)
            .set_transition(&2, Symbol::Char('a'), &2)
            .set_transition(&2, Symbol::Char('b'), &2)
            .set_transition(&2, Symbol::Other, &2);
        let fsm = builder.build().unwrap();
        assert!(fsm.accepts_str("z"));
        assert!(fsm.accepts_str("!"));
        assert!(!fsm.accepts_str("a"));
        assert!(!fsm.accepts_str("zz"));
    }

    // Machine where states 2 and 3 (labels) are one-step equivalent, and
    // merging them makes 1 and the merged state equivalent in turn.
    // The language is "0*1" in heavy disguise.
    fn merge_me() -> (AutomatonBuilder<&'static str>, Automaton) {
        let mut builder = AutomatonBuilder::new(binary_alphabet());
        builder
            .set_initial(&"1")
            .mark_final(&"4")
            .set_transition(&"1", Symbol::Char('0'), &"2")
            .set_transition(&"1", Symbol::Char('1'), &"4")
            .set_transition(&"2", Symbol::Char('0'), &"3")
            .set_transition(&"2", Symbol::Char('1'), &"4")
            .set_transition(&"3", Symbol::Char('0'), &"3")
            .set_transition(&"3", Symbol::Char('1'), &"4")
            .set_transition(&"4", Symbol::Char('0'), &"oblivion")
            .set_transition(&"4", Symbol::Char('1'), &"oblivion")
            .set_transition(&"oblivion", Symbol::Char('0'), &"oblivion")
            .set_transition(&"oblivion", Symbol::Char('1'), &"oblivion");
        let fsm = builder.build().unwrap();
        (builder, fsm)
    }

    #[test]
    fn test_equivalent() {
        let (builder, fsm) = merge_me();
        let id = |label: &'static str| builder.state_id(&label).unwrap();

        // reflexivity
        for s in 0..fsm.num_states() {
            assert!(fsm.equivalent(s, s));
        }

        assert!(!fsm.equivalent(id("1"), id("2")));
        assert!(!fsm.equivalent(id("1"), id("3")));
        assert!(!fsm.equivalent(id("1"), id("4")));
        assert!(!fsm.equivalent(id("1"), id("oblivion")));
        // the important one: 2 and 3 merge even though 3 loops on itself
        assert!(fsm.equivalent(id("2"), id("3")));
        assert!(!fsm.equivalent(id("2"), id("4")));
        assert!(!fsm.equivalent(id("3"), id("4")));
        assert!(!fsm.equivalent(id("4"), id("oblivion")));
    }

    #[test]
    fn test_replace() {
        let (builder, fsm) = merge_me();
        let id = |label: &'static str| builder.state_id(&label).unwrap();

        let s2 = id("2");
        let s3 = id("3");
        let merged = fsm.replace(s3, s2);
        assert_eq!(merged.num_states(), 4);
        // the merged state now loops on itself via '0' (formerly 2 -> 3)
        let s2_after = if s2 > s3 { s2 - 1 } else { s2 };
        assert_eq!(merged.next(s2_after, Symbol::Char('0')), s2_after);
        // language unchanged
        assert!(merged.accepts_str("1"));
        assert!(merged.accepts_str("001"));
        assert!(!merged.accepts_str("10"));
        // merging exposed the next pair
        assert!(merged.equivalent(merged.initial_state(), s2_after));
    }

    #[test]
    fn test_automerge_fixpoint() {
        // scenario: 5 states collapse to 3, which needs the second round:
        // 1 and 2&3 only become equivalent once 2 and 3 have merged
        let (_, fsm) = merge_me();
        let merged = fsm.automerge();
        assert_eq!(merged.num_states(), 3);
        assert!(merged.num_states() <= fsm.num_states());

        // no two distinct states remain equivalent
        for i in 0..merged.num_states() {
            for j in i + 1..merged.num_states() {
                assert!(!merged.equivalent(i, j));
            }
        }

        // still "0*1"
        assert!(merged.accepts_str("1"));
        assert!(merged.accepts_str("01"));
        assert!(merged.accepts_str("0001"));
        assert!(!merged.accepts_str(""));
        assert!(!merged.accepts_str("0"));
        assert!(!merged.accepts_str("11"));
    }

    #[test]
    fn test_automerge_two_finals() {
        // (0|1)0*: states 2 and 3 have different targets but identical
        // behavior, so they merge
        let mut builder = AutomatonBuilder::new(binary_alphabet());
        builder
            .set_initial(&1)
            .mark_final(&2)
            .mark_final(&3)
            .set_transition(&1, Symbol::Char('0'), &2)
            .set_transition(&1, Symbol::Char('1'), &3)
            .set_transition(&2, Symbol::Char('0'), &2)
            .set_transition(&2, Symbol::Char('1'), &4)
            .set_transition(&3, Symbol::Char('0'), &3)
            .set_transition(&3, Symbol::Char('1'), &4)
            .set_transition(&4, Symbol::Char('0'), &4)
            .set_transition(&4, Symbol::Char('1'), &4);
        let fsm = builder.build().unwrap();

        let s2 = builder.state_id(&2).unwrap();
        let s3 = builder.state_id(&3).unwrap();
        assert!(fsm.equivalent(s2, s3));

        let merged = fsm.automerge();
        assert_eq!(merged.num_states(), 3);
        let initial = merged.initial_state();
        assert_eq!(
            merged.next(initial, Symbol::Char('0')),
            merged.next(initial, Symbol::Char('1'))
        );
        assert!(merged.accepts_str("0"));
        assert!(merged.accepts_str("100"));
        assert!(!merged.accepts_str("01"));
    }
}
