/*!
Graph algorithms that the bubble decomposition needs from its graph:
undirected side adjacency, directed successors, self-loop detection,
a bounded depth-first walk, and a deterministic topological order.
*/

use crate::{
    handle::{Direction, Handle, NodeId},
    handlegraph::*,
    nodeside::NodeSide,
};

pub mod dfs;
pub mod topological_sort;

pub use self::dfs::dfs;
pub use self::topological_sort::topological_order;

/// The node sides that are adjacent to `side`, i.e. connected to it
/// by an edge, sorted and without duplicates. A side connected to
/// itself by a reversing self-loop is included.
pub fn sides_of<G>(graph: G, side: NodeSide) -> Vec<NodeSide>
where
    G: IntoNeighbors,
{
    let mut sides = graph
        .neighbors(side.outward(), Direction::Right)
        .map(NodeSide::entering)
        .collect::<Vec<_>>();
    sides.sort();
    sides.dedup();
    sides
}

/// The traversals that can directly follow `handle`.
#[inline]
pub fn travs_from<G>(graph: G, handle: Handle) -> G::Neighbors
where
    G: IntoNeighbors,
{
    graph.neighbors(handle, Direction::Right)
}

/// Returns `true` if any edge connects the node to itself.
pub fn is_self_looping<G>(graph: G, node: NodeId) -> bool
where
    G: IntoNeighbors + Copy,
{
    let handle = Handle::pack(node, false);
    graph
        .neighbors(handle, Direction::Right)
        .chain(graph.neighbors(handle, Direction::Left))
        .any(|other| other.id() == node)
}
