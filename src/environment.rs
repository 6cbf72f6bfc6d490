//! Search environment capability.
//!
//! The A* engine only sees this trait: neighbor enumeration, a heuristic and
//! an obstacle test. It never touches coordinates, so any graph that can
//! enumerate weighted neighbors can be searched.
//!
//! The heuristic must be admissible (never overestimate) and consistent
//! (`h(a) <= cost(a, b) + h(b)` for every edge). The engine never reopens a
//! closed node, so an inconsistent heuristic breaks optimality.

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::Cost;

/// A reachable neighbor and the cost of the edge leading to it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbor<Id> {
    /// Neighbor identity
    pub id: Id,
    /// Edge cost from the expanded node
    pub cost: Cost,
}

impl<Id> Neighbor<Id> {
    /// Create a new neighbor entry
    #[inline]
    pub fn new(id: Id, cost: Cost) -> Self {
        Self { id, cost }
    }
}

/// Graph capability consumed by the A* engine.
pub trait Environment {
    /// Opaque node identity
    type NodeId: Copy + Eq + Ord + Hash + Debug;

    /// Passable nodes adjacent to `id`, with edge costs
    fn neighbors(&self, id: Self::NodeId) -> Vec<Neighbor<Self::NodeId>>;

    /// Admissible, consistent cost estimate from `from` to `to`
    fn heuristic(&self, from: Self::NodeId, to: Self::NodeId) -> Cost;

    /// Obstacle test
    fn is_traversable(&self, id: Self::NodeId) -> bool;

    /// Is `id` a node of this environment at all?
    fn contains(&self, id: Self::NodeId) -> bool;

    /// Cost of the direct edge `from -> to`, if `to` is a neighbor of `from`
    fn edge_cost(&self, from: Self::NodeId, to: Self::NodeId) -> Option<Cost> {
        self.neighbors(from)
            .into_iter()
            .find(|n| n.id == to)
            .map(|n| n.cost)
    }
}

/// Sum of edge costs along `path`.
///
/// Works in either direction as long as edges are symmetric. Returns `None`
/// if two consecutive nodes are not neighbors or the sum overflows. An empty
/// or single-node path costs 0.
pub fn path_cost<E: Environment>(env: &E, path: &[E::NodeId]) -> Option<Cost> {
    path.windows(2).try_fold(0, |total: Cost, w| {
        total.checked_add(env.edge_cost(w[0], w[1])?)
    })
}
