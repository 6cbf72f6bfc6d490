//! Closed list (visited set).

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{PathError, Result};

use super::types::SearchNode;

/// Finalized nodes by identity
#[derive(Clone, Debug)]
pub struct ClosedList<Id> {
    nodes: HashMap<Id, SearchNode<Id>>,
}

impl<Id> Default for ClosedList<Id> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<Id: Copy + Eq + Hash + Debug> ClosedList<Id> {
    /// Create an empty closed list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the finalized node for its identity
    pub fn add(&mut self, node: SearchNode<Id>) {
        self.nodes.insert(node.id, node);
    }

    /// Has `id` been finalized?
    pub fn contains(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Finalized record for `id`
    pub fn get(&self, id: Id) -> Result<&SearchNode<Id>> {
        self.nodes
            .get(&id)
            .ok_or_else(|| PathError::NodeNotFinalized(format!("{:?}", id)))
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Number of finalized nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
