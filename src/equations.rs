// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Extraction of symbolic patterns from automata
//!
//! This is the inverse of the algebraic operators: given an automaton, find
//! a regular-expression-like description of exactly the sequences it
//! accepts, with no residual automaton structure.
//!
//! The automaton is read as a system of algebraic equations. Each equation
//! describes one *state-set* `R`: it maps every state-set `L` with a direct
//! one-symbol transition into `R` to the pattern of symbols realizing that
//! transition, plus a synthetic *outside* entry when `R` contains the
//! initial state (reaching `R` by consuming nothing). Starting
//! from the full final-state set, equation discovery closes transitively
//! over the left sides; elimination then walks the list backward, folding
//! each equation's self-reference into a Kleene-closure multiplier and
//! substituting the equation into every earlier one. What survives as the
//! first equation's outside entry is the answer; if nothing survives, the
//! automaton accepts no sequences at all.
//!
//! Patterns are built through the [PatternAlgebra] capability, so the
//! algorithm has no opinion about their representation: a regex AST, a
//! rendered string, even another automaton. All iteration here follows
//! fixed total orders, so extracting from structurally identical automata
//! produces identical output, call after call.
//!

use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};

use crate::{alphabets::Symbol, automata::Automaton};

///
/// Pattern constructors the extraction algorithm emits into
///
/// The methods mirror the usual regular-expression combinators. They take
/// `&mut self` so that managed implementations (hash-consing stores,
/// arena allocators) fit without interior mutability.
///
pub trait PatternAlgebra {
    /// The pattern representation being built
    type Pattern: Clone;

    /// The pattern matching no sequence at all
    fn empty_language(&mut self) -> Self::Pattern;

    /// The pattern matching exactly the empty sequence
    fn empty_string(&mut self) -> Self::Pattern;

    /// The pattern matching exactly one listed character
    fn literal(&mut self, c: char) -> Self::Pattern;

    /// The pattern matching any single character *not* in `listed`
    ///
    /// This is what the alphabet's wildcard symbol extracts to; `listed`
    /// is the alphabet's explicit characters.
    fn other_than(&mut self, listed: &[char]) -> Self::Pattern;

    /// The pattern matching either of two patterns
    fn alternate(&mut self, a: Self::Pattern, b: Self::Pattern) -> Self::Pattern;

    /// The pattern matching one pattern followed by another
    fn concat(&mut self, a: Self::Pattern, b: Self::Pattern) -> Self::Pattern;

    /// The pattern matching zero or more repetitions of a pattern
    fn closure(&mut self, a: Self::Pattern) -> Self::Pattern;
}

// Left side of an equation entry: either a state-set, or the synthetic
// marker for "before any transition has been consumed". Outside is
// different from the empty state-set: from the empty set every transition
// leads back to the empty set, while from outside, consuming the empty
// sequence puts you at the initial state.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
enum Source {
    Outside,
    States(BTreeSet<usize>),
}

// One equation of the system: all the one-step ways to reach `right`.
// Equations are scratch state, mutated in place during elimination.
#[derive(Debug)]
struct Equation<P> {
    right: BTreeSet<usize>,
    lefts: BTreeMap<Source, P>,
}

impl<P: Clone> Equation<P> {
    // Build the equation for the state-set `right`: for every alphabet
    // symbol, the set of states transitioning into `right` via that symbol
    // contributes the symbol's pattern, merged by alternation when several
    // symbols share a left set.
    fn new<A>(fsm: &Automaton, right: BTreeSet<usize>, listed: &[char], alg: &mut A) -> Self
    where
        A: PatternAlgebra<Pattern = P>,
    {
        let mut eq = Equation {
            right,
            lefts: BTreeMap::new(),
        };
        for symbol in fsm.alphabet().iter() {
            let left: BTreeSet<usize> = (0..fsm.num_states())
                .filter(|&s| eq.right.contains(&fsm.next(s, symbol)))
                .collect();
            let pattern = match symbol {
                Symbol::Char(c) => alg.literal(c),
                Symbol::Other => alg.other_than(listed),
            };
            eq.add_route(Source::States(left), pattern, alg);
        }
        // the initial state alone can be reached via the empty sequence
        if eq.right.contains(&fsm.initial_state()) {
            let empty = alg.empty_string();
            eq.add_route(Source::Outside, empty, alg);
        }
        eq
    }

    fn add_route<A>(&mut self, source: Source, pattern: P, alg: &mut A)
    where
        A: PatternAlgebra<Pattern = P>,
    {
        match self.lefts.entry(source) {
            Entry::Occupied(mut known) => {
                let merged = alg.alternate(known.get().clone(), pattern);
                *known.get_mut() = merged;
            }
            Entry::Vacant(slot) => {
                slot.insert(pattern);
            }
        }
    }

    // Remove the self-transition: "A x | B y = A" becomes "B y x* = A".
    fn apply_loops<A>(&mut self, alg: &mut A)
    where
        A: PatternAlgebra<Pattern = P>,
    {
        if let Some(looping) = self.lefts.remove(&Source::States(self.right.clone())) {
            let multiplier = alg.closure(looping);
            for pattern in self.lefts.values_mut() {
                *pattern = alg.concat(pattern.clone(), multiplier.clone());
            }
        }
    }

    // Substitute another equation into this one, cancelling out the
    // reference to it: any route into `other` composed with the route from
    // `other` to here counts as a route to here.
    fn eliminate<A>(&mut self, other: &Equation<P>, alg: &mut A)
    where
        A: PatternAlgebra<Pattern = P>,
    {
        let key = Source::States(other.right.clone());
        let route = match self.lefts.remove(&key) {
            Some(route) => route,
            None => return,
        };
        for (source, pattern) in &other.lefts {
            // other must have had its self-transition folded already
            debug_assert!(*source != key);
            let composed = alg.concat(pattern.clone(), route.clone());
            self.add_route(source.clone(), composed, alg);
        }
    }
}

impl Automaton {
    ///
    /// Extract a pattern describing exactly the accepted sequences
    ///
    /// The pattern is built through the supplied [PatternAlgebra]. If the
    /// automaton accepts nothing, the result is the algebra's
    /// [empty_language](PatternAlgebra::empty_language) constant.
    ///
    /// Two calls on structurally identical automata produce identical
    /// output: every iteration in the algorithm follows a fixed total
    /// order.
    ///
    pub fn to_pattern<A: PatternAlgebra>(&self, alg: &mut A) -> A::Pattern {
        let listed: Vec<char> = self.alphabet().chars().collect();
        let finals: BTreeSet<usize> = self.final_states().collect();

        // discover equations over a growing list, starting from the full
        // final-state set
        let mut seen = BTreeSet::new();
        seen.insert(finals.clone());
        let mut equations = vec![Equation::new(self, finals, &listed, alg)];
        let mut i = 0;
        while i < equations.len() {
            let discovered: Vec<BTreeSet<usize>> = equations[i]
                .lefts
                .keys()
                .filter_map(|source| match source {
                    Source::States(set) if !seen.contains(set) => Some(set.clone()),
                    _ => None,
                })
                .collect();
            for set in discovered {
                seen.insert(set.clone());
                equations.push(Equation::new(self, set, &listed, alg));
            }
            i += 1;
        }

        // fill backward: fold each equation's self-loop, then substitute it
        // into every earlier equation referencing it
        for i in (0..equations.len()).rev() {
            let (head, tail) = equations.split_at_mut(i);
            let current = &mut tail[0];
            current.apply_loops(alg);
            for earlier in head.iter_mut().rev() {
                earlier.eliminate(current, alg);
            }
        }

        // only the outside entry survives full back-substitution; if it
        // doesn't exist, no sequence reaches the final states
        match equations[0].lefts.get(&Source::Outside) {
            Some(pattern) => pattern.clone(),
            None => alg.empty_language(),
        }
    }
}
