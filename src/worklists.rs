// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Discovery list for breadth-first exploration
//!

use std::{collections::HashMap, hash::Hash};

///
/// An IndexedWorklist is an append-only list without duplicate elements.
/// - get_or_insert appends an element if it hasn't been seen before and
///   returns the element's index; the index of the first occurrence wins.
/// - elements keep the index they were discovered at, so discovery order
///   doubles as a dense numbering of the discovered elements.
///
#[derive(Debug)]
pub struct IndexedWorklist<T> {
    items: Vec<T>,
    index: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> IndexedWorklist<T> {
    ///
    /// Create an empty worklist
    ///
    pub fn new() -> Self {
        IndexedWorklist {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    ///
    /// Index of an element, appending it if it's not been seen before
    ///
    pub fn get_or_insert(&mut self, item: T) -> usize {
        if let Some(&i) = self.index.get(&item) {
            return i;
        }
        let i = self.items.len();
        self.items.push(item.clone());
        self.index.insert(item, i);
        i
    }

    ///
    /// Number of discovered elements
    ///
    pub fn len(&self) -> usize {
        self.items.len()
    }

    ///
    /// Element at a discovery index
    ///
    /// Panics if the index is out of range.
    ///
    pub fn get(&self, i: usize) -> &T {
        &self.items[i]
    }
}
