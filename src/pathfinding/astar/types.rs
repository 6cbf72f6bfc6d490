//! A* search types.

use std::cmp::Ordering;

use crate::core::Cost;

/// A node in the A* search.
///
/// `f` is always derived from `g + h` and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchNode<Id> {
    /// Node identity
    pub id: Id,
    /// Node this one was reached from (`None` for the start)
    pub parent: Option<Id>,
    /// Cost from start
    pub g: Cost,
    /// Heuristic estimate to the goal
    pub h: Cost,
}

impl<Id> SearchNode<Id> {
    /// Create a node reached from `parent`
    #[inline]
    pub fn new(id: Id, parent: Option<Id>, g: Cost, h: Cost) -> Self {
        Self { id, parent, g, h }
    }

    /// Create the start node
    #[inline]
    pub fn start(id: Id, h: Cost) -> Self {
        Self::new(id, None, 0, h)
    }

    /// Total estimated cost `g + h`
    #[inline]
    pub fn f(&self) -> Cost {
        self.g.saturating_add(self.h)
    }
}

impl<Id: Ord> Ord for SearchNode<Id> {
    /// `(f, g, id)` ascending.
    ///
    /// `parent` only separates nodes with equal `(f, g, id)`, which never sit
    /// in the open list together; it keeps the order consistent with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.f()
            .cmp(&other.f())
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.parent.cmp(&other.parent))
    }
}

impl<Id: Ord> PartialOrd for SearchNode<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Summary of a successful search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Cost of the path from start to goal
    pub cost: Cost,
    /// Number of nodes closed before the goal was popped
    pub nodes_expanded: usize,
}
