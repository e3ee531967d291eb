// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Repetition ranges
//!
//! A repetition range bounds how many copies of an automaton's language a
//! repeated automaton accepts: `(loop i j A)` accepts any concatenation of
//! k words of A with i <= k <= j. The upper bound may be infinite, which
//! covers the usual regex quantifiers:
//! 1) A? is `(loop 0 1 A)`
//! 2) A<sup>+</sup> is `(loop 1 +infinity A)`
//! 3) A<sup>*</sup> is `(loop 0 +infinity A)`
//! 4) A<sup>k</sup> is `(loop k k A)`
//!
//! See [repeat](crate::automata::Automaton::repeat) for the automaton
//! construction.
//!

use std::fmt::Display;

use crate::errors::Error;

///
/// Repetition range
///
/// Either a finite interval [i, j] or an infinite interval [i, ..]:
/// - a finite interval is represented as `LoopRange(i, Some(j))` where i <= j
/// - an infinite interval is represented as `LoopRange(i, None)`.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct LoopRange(u32, Option<u32>);

impl Display for LoopRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoopRange(0, Some(1)) => write!(f, "?"),
            LoopRange(0, None) => write!(f, "*"),
            LoopRange(1, None) => write!(f, "+"),
            LoopRange(i, Some(j)) => {
                if i == j {
                    write!(f, "{{{}}}", i)
                } else {
                    write!(f, "{{{},{}}}", i, j)
                }
            }
            LoopRange(i, None) => write!(f, "{{{},}}", i),
        }
    }
}

impl LoopRange {
    ///
    /// Construct a range [i, j], where `None` means an infinite upper bound
    ///
    /// # Errors
    ///
    /// Produces [Error::EmptyLoopRange] if `j < i`: such a range contains
    /// no repetition count.
    ///
    /// # Example
    ///
    /// ```
    /// use dfa_algebra::{errors::Error, loop_ranges::LoopRange};
    ///
    /// assert!(LoopRange::new(2, Some(5)).is_ok());
    /// assert!(LoopRange::new(2, None).is_ok());
    /// assert_eq!(LoopRange::new(2, Some(1)), Err(Error::EmptyLoopRange));
    /// ```
    pub fn new(i: u32, j: Option<u32>) -> Result<LoopRange, Error> {
        match j {
            Some(j) if j < i => Err(Error::EmptyLoopRange),
            _ => Ok(LoopRange(i, j)),
        }
    }

    /// Construct the range [k, k]
    pub fn point(k: u32) -> LoopRange {
        LoopRange(k, Some(k))
    }

    /// Construct the range [k, +infinity]
    pub fn at_least(k: u32) -> LoopRange {
        LoopRange(k, None)
    }

    /// Construct the range [0, 1]
    pub fn opt() -> LoopRange {
        LoopRange(0, Some(1))
    }

    /// Construct the range [0, +infinity]
    pub fn star() -> LoopRange {
        LoopRange(0, None)
    }

    /// Lower bound of the range
    pub fn min(&self) -> u32 {
        self.0
    }

    /// Upper bound of the range; `None` if infinite
    pub fn max(&self) -> Option<u32> {
        self.1
    }

    /// Check whether the upper bound is infinite
    pub fn is_unbounded(&self) -> bool {
        self.1.is_none()
    }
}
