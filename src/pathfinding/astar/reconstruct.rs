//! Path reconstruction from parent links.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

use super::closed_list::ClosedList;
use super::types::SearchNode;

/// Walk parent links from `terminal` back to the start.
///
/// The returned sequence is goal-first: `terminal` comes first and the start
/// node (the one without a parent) last. Every parent must be in `closed`.
pub fn reconstruct_path<Id>(terminal: &SearchNode<Id>, closed: &ClosedList<Id>) -> Result<Vec<Id>>
where
    Id: Copy + Eq + Hash + Debug,
{
    let mut path = vec![terminal.id];
    let mut node = *terminal;

    while let Some(parent) = node.parent {
        node = *closed.get(parent)?;
        path.push(node.id);
    }

    Ok(path)
}
