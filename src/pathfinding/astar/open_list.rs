//! Open list (search frontier).

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use super::types::SearchNode;

/// Frontier ordered by `(f, g, id)` with at most one entry per identity.
///
/// Decrease-key is emulated by a sorted set plus an identity index: a better
/// candidate evicts the stale entry, anything else is dropped.
#[derive(Clone, Debug)]
pub struct OpenList<Id> {
    /// Entries in pop order
    nodes: BTreeSet<SearchNode<Id>>,
    /// Live entry for each identity
    index: HashMap<Id, SearchNode<Id>>,
}

impl<Id> Default for OpenList<Id> {
    fn default() -> Self {
        Self {
            nodes: BTreeSet::new(),
            index: HashMap::new(),
        }
    }
}

impl<Id: Copy + Ord + Hash> OpenList<Id> {
    /// Create an empty open list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node`, or replace the entry for its identity if `node` has a
    /// strictly lower `f`.
    ///
    /// Returns true if the list changed.
    pub fn insert(&mut self, node: SearchNode<Id>) -> bool {
        if let Some(existing) = self.index.get(&node.id) {
            if existing.f() <= node.f() {
                return false;
            }
            self.nodes.remove(existing);
        }

        self.nodes.insert(node);
        self.index.insert(node.id, node);
        true
    }

    /// Remove and return the entry with the smallest `(f, g, id)`
    pub fn pop_lowest(&mut self) -> Option<SearchNode<Id>> {
        let node = self.nodes.pop_first()?;
        self.index.remove(&node.id);
        Some(node)
    }

    /// Live entry for `id`, if any
    pub fn get(&self, id: Id) -> Option<&SearchNode<Id>> {
        self.index.get(&id)
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the frontier empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
