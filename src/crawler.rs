// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Generic on-demand automaton construction
//!
//! [crawl] explores an abstract "superstate" space breadth-first and
//! materializes it into a concrete [Automaton]. A superstate is anything
//! with value equality: during concatenation it is a set of tagged states
//! of the two operands, during alternation a pair. Every
//! algebraic operator in this crate is a thin wrapper that picks a
//! superstate type and hands it to crawl.
//!
//! The returned automaton is minimized and canonically numbered: its
//! initial state is handle 0 and the remaining handles follow breadth-first
//! discovery order from it, so two crawls of structurally identical input
//! return identical automata.
//!

use std::hash::Hash;

use crate::{
    alphabets::{Alphabet, Symbol},
    automata::Automaton,
    worklists::IndexedWorklist,
};

///
/// Crawl a superstate space into an automaton
///
/// - `initial`: the superstate the exploration starts from
/// - `is_final(s)`: whether superstate `s` is accepting
/// - `next(s, symbol)`: the superstate reached from `s` via `symbol`
///
/// Superstates are discovered breadth-first, deduplicated by value
/// equality, and numbered by discovery index; alphabet symbols are iterated
/// in the alphabet's fixed order. Once the space is exhausted, equivalent
/// states are merged ([automerge](Automaton::automerge)) and the result is
/// renumbered canonically (initial state 0, breadth-first order).
///
/// `next` must be pure and defined for every alphabet symbol, wildcard
/// included, and must reach only finitely many distinct superstates.
/// Violating this cannot be detected here: an ever-growing superstate
/// space makes crawl loop forever appending fresh states. This is a caller
/// obligation, not a checked error.
///
/// # Example
///
/// ```
/// use dfa_algebra::{alphabets::{Alphabet, Symbol}, crawler::crawl};
///
/// // strings over {a, b} with an even number of b's
/// let alphabet = Alphabet::from_chars("ab".chars());
/// let even_b = crawl(
///     &alphabet,
///     true,
///     |&even: &bool| even,
///     |&even, symbol| if symbol == Symbol::Char('b') { !even } else { even },
/// );
/// assert!(even_b.accepts_str("abba"));
/// assert!(!even_b.accepts_str("ab"));
/// ```
pub fn crawl<S, F, N>(alphabet: &Alphabet, initial: S, mut is_final: F, mut next: N) -> Automaton
where
    S: Eq + Hash + Clone,
    F: FnMut(&S) -> bool,
    N: FnMut(&S, Symbol) -> S,
{
    let mut discovered = IndexedWorklist::new();
    discovered.get_or_insert(initial);

    let mut finals = Vec::new();
    let mut transitions = Vec::new();
    let mut i = 0;
    while i < discovered.len() {
        let state = discovered.get(i).clone();
        finals.push(is_final(&state));
        let mut row = Vec::with_capacity(alphabet.len());
        for symbol in alphabet.iter() {
            row.push(discovered.get_or_insert(next(&state, symbol)));
        }
        transitions.push(row);
        i += 1;
    }

    let result = Automaton::from_parts(alphabet.clone(), 0, finals, transitions);
    renumber_from_initial(&result.automerge())
}

// Renumber states in breadth-first order from the initial state, so the
// initial state becomes 0. Unreachable states (none, for crawl output)
// would be dropped.
fn renumber_from_initial(fsm: &Automaton) -> Automaton {
    let mut order = IndexedWorklist::new();
    order.get_or_insert(fsm.initial_state());
    let mut i = 0;
    while i < order.len() {
        let s = *order.get(i);
        for symbol in fsm.alphabet().iter() {
            order.get_or_insert(fsm.next(s, symbol));
        }
        i += 1;
    }

    let n = order.len();
    let mut finals = Vec::with_capacity(n);
    let mut transitions = Vec::with_capacity(n);
    for new_id in 0..n {
        let old = *order.get(new_id);
        finals.push(fsm.is_final(old));
        let row = fsm
            .alphabet()
            .iter()
            .map(|symbol| order.get_or_insert(fsm.next(old, symbol)))
            .collect();
        transitions.push(row);
    }
    Automaton::from_parts(fsm.alphabet().clone(), 0, finals, transitions)
}
