/*!
Traits for immutable access to the nodes and edges of a bidirected
graph.

The iterator-producing traits are implemented on references to a
graph, so that functions that only need iteration can be generic over
a single `Copy` bound, [`HandleGraphRef`].
*/

use crate::handle::{Direction, Edge, Handle, NodeId};

pub mod iter;

pub use self::iter::*;

/// Trait encapsulating the immutable aspects of a handlegraph
pub trait HandleGraph {
    fn has_node<I: Into<NodeId>>(&self, node_id: I) -> bool;

    /// The length of the sequence of a given node
    fn node_len(&self, handle: Handle) -> usize;

    fn min_node_id(&self) -> NodeId;
    fn max_node_id(&self) -> NodeId;

    /// Return the total number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Return the total number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Sum up all the sequences in the graph
    fn total_length(&self) -> usize;
}

/// Access to all the handles in the graph, each node in its forward
/// orientation.
pub trait IntoHandles: Sized {
    type Handles: Iterator<Item = Handle>;

    fn handles(self) -> Self::Handles;
}

/// Access to the neighbors of a handle. `Direction::Right` produces
/// the handles that can follow `handle`, `Direction::Left` the
/// handles that can precede it.
pub trait IntoNeighbors: Sized {
    type Neighbors: Iterator<Item = Handle>;

    fn neighbors(self, handle: Handle, dir: Direction) -> Self::Neighbors;

    #[inline]
    fn degree(self, handle: Handle, dir: Direction) -> usize {
        self.neighbors(handle, dir).count()
    }

    #[inline]
    fn has_edge(self, left: Handle, right: Handle) -> bool {
        self.neighbors(left, Direction::Right).any(|h| h == right)
    }
}

/// Access to all the edges in the graph, each edge reported once.
pub trait IntoEdges: Sized {
    type Edges: Iterator<Item = Edge>;

    fn edges(self) -> Self::Edges;
}

/// Convenience trait for collecting all the HandleGraph iterator
/// traits in a single bound. The `impl` on `&T`, which has the
/// additional bound that `T: HandleGraph`, makes it possible to use
/// this as the only bound in functions that are generic over
/// `HandleGraph` implementations.
pub trait HandleGraphRef:
    IntoEdges + IntoHandles + IntoNeighbors + Copy
{
}

impl<'a, T> HandleGraphRef for &'a T
where
    T: HandleGraph,
    &'a T: IntoEdges + IntoHandles + IntoNeighbors + Copy,
{
}
