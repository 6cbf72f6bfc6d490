//! A* engine.

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::environment::Environment;
use crate::error::{PathError, Result};

use super::closed_list::ClosedList;
use super::open_list::OpenList;
use super::reconstruct::reconstruct_path;
use super::types::{SearchNode, SearchStats};

/// Reusable A* search engine.
///
/// All search state lives in the engine and is reset at the start of every
/// [`find_path`](Self::find_path), so one instance can serve any number of
/// sequential queries. Searching takes `&mut self`; give each thread its own
/// engine.
#[derive(Clone, Debug)]
pub struct AStar<Id> {
    open: OpenList<Id>,
    closed: ClosedList<Id>,
    /// Goal record of the last successful search
    result: Option<SearchNode<Id>>,
    /// Identities in the order they were closed
    expansion_order: Vec<Id>,
}

impl<Id> Default for AStar<Id> {
    fn default() -> Self {
        Self {
            open: OpenList::default(),
            closed: ClosedList::default(),
            result: None,
            expansion_order: Vec::new(),
        }
    }
}

impl<Id: Copy + Eq + Ord + Hash + Debug> AStar<Id> {
    /// Create an engine with empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for a minimum-cost path from `start` to `goal`.
    ///
    /// Returns the path cost and expansion count on success. Fails with
    /// [`PathError::InvalidNode`] before searching if either endpoint is
    /// outside the environment or not traversable, with
    /// [`PathError::NoPathFound`] when the frontier runs dry, and with
    /// [`PathError::CostOverflow`] if a path cost leaves the [`Cost`] range.
    ///
    /// [`Cost`]: crate::core::Cost
    pub fn find_path<E>(&mut self, env: &E, start: Id, goal: Id) -> Result<SearchStats>
    where
        E: Environment<NodeId = Id>,
    {
        self.search(env, start, goal, None)
    }

    /// [`find_path`](Self::find_path) that gives up with
    /// [`PathError::ExpansionLimitReached`] instead of closing more than
    /// `max_expansions` nodes.
    pub fn find_path_bounded<E>(
        &mut self,
        env: &E,
        start: Id,
        goal: Id,
        max_expansions: usize,
    ) -> Result<SearchStats>
    where
        E: Environment<NodeId = Id>,
    {
        self.search(env, start, goal, Some(max_expansions))
    }

    /// Goal-first path of the last successful search
    pub fn result_path(&self) -> Result<Vec<Id>> {
        let result = self
            .result
            .as_ref()
            .ok_or(PathError::ReconstructionWithoutResult)?;
        reconstruct_path(result, &self.closed)
    }

    /// Goal record of the last successful search
    pub fn result(&self) -> Option<&SearchNode<Id>> {
        self.result.as_ref()
    }

    /// Identities closed by the last search, in order
    pub fn expansion_order(&self) -> &[Id] {
        &self.expansion_order
    }

    /// Number of nodes closed by the last search
    pub fn nodes_expanded(&self) -> usize {
        self.expansion_order.len()
    }

    fn reset(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.result = None;
        self.expansion_order.clear();
    }

    fn search<E>(
        &mut self,
        env: &E,
        start: Id,
        goal: Id,
        max_expansions: Option<usize>,
    ) -> Result<SearchStats>
    where
        E: Environment<NodeId = Id>,
    {
        self.reset();

        trace!("[AStar] find_path: start={:?} goal={:?}", start, goal);

        check_endpoint(env, start, "start")?;
        check_endpoint(env, goal, "goal")?;

        self.open
            .insert(SearchNode::start(start, env.heuristic(start, goal)));

        while let Some(current) = self.open.pop_lowest() {
            if current.id == goal {
                let stats = SearchStats {
                    cost: current.g,
                    nodes_expanded: self.expansion_order.len(),
                };
                trace!(
                    "[AStar] SUCCESS: cost={}, nodes_expanded={}",
                    stats.cost, stats.nodes_expanded
                );
                self.result = Some(current);
                return Ok(stats);
            }

            if let Some(limit) = max_expansions
                && self.expansion_order.len() >= limit
            {
                debug!("[AStar] FAILED: ExpansionLimitReached ({} nodes)", limit);
                return Err(PathError::ExpansionLimitReached { limit });
            }

            self.closed.add(current);
            self.expansion_order.push(current.id);

            for neighbor in env.neighbors(current.id) {
                if self.closed.contains(neighbor.id) {
                    continue;
                }

                let h = env.heuristic(neighbor.id, goal);
                let Some(g) = current
                    .g
                    .checked_add(neighbor.cost)
                    .filter(|g| g.checked_add(h).is_some())
                else {
                    debug!(
                        "[AStar] FAILED: CostOverflow expanding {:?} -> {:?}",
                        current.id, neighbor.id
                    );
                    return Err(PathError::CostOverflow);
                };
                self.open
                    .insert(SearchNode::new(neighbor.id, Some(current.id), g, h));
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            self.expansion_order.len()
        );
        Err(PathError::NoPathFound)
    }
}

fn check_endpoint<E: Environment>(env: &E, id: E::NodeId, role: &str) -> Result<()> {
    if !env.contains(id) {
        debug!("[AStar] FAILED: {} {:?} outside environment", role, id);
        return Err(PathError::InvalidNode(format!(
            "{} {:?} is outside the environment",
            role, id
        )));
    }
    if !env.is_traversable(id) {
        debug!("[AStar] FAILED: {} {:?} blocked", role, id);
        return Err(PathError::InvalidNode(format!(
            "{} {:?} is not traversable",
            role, id
        )));
    }
    Ok(())
}
