use fnv::FnvHashMap;

use crate::{
    handle::{Direction, Edge, Handle, NodeId},
    handlegraph::*,
    mutablehandlegraph::*,
};

use super::Node;

/// A handlegraph implementation using `HashMap` to represent the
/// graph topology and nodes.
#[derive(Debug, Clone)]
pub struct HashGraph {
    pub max_id: NodeId,
    pub min_id: NodeId,
    pub graph: FnvHashMap<NodeId, Node>,
}

impl Default for HashGraph {
    fn default() -> HashGraph {
        HashGraph {
            max_id: NodeId::from(0),
            min_id: NodeId::from(std::u64::MAX),
            graph: Default::default(),
        }
    }
}

impl HashGraph {
    pub fn new() -> HashGraph {
        Default::default()
    }

    pub fn get_node(&self, node_id: &NodeId) -> Option<&Node> {
        self.graph.get(node_id)
    }

    pub fn get_node_unchecked(&self, node_id: &NodeId) -> &Node {
        self.graph.get(node_id).unwrap_or_else(|| {
            panic!("Tried getting a node that doesn't exist, ID: {:?}", node_id)
        })
    }

    /// The sequence of the node in its forward orientation.
    pub fn sequence(&self, node_id: NodeId) -> Option<&[u8]> {
        self.graph.get(&node_id).map(|n| n.sequence.as_slice())
    }

    fn contains_edge(&self, left: Handle, right: Handle) -> bool {
        if let Some(node) = self.graph.get(&left.id()) {
            node.edges_leaving(left).contains(&right)
        } else if let Some(node) = self.graph.get(&right.id()) {
            node.edges_leaving(right.flip()).contains(&left.flip())
        } else {
            false
        }
    }
}

impl HandleGraph for HashGraph {
    #[inline]
    fn has_node<I: Into<NodeId>>(&self, node_id: I) -> bool {
        self.graph.contains_key(&node_id.into())
    }

    #[inline]
    fn node_len(&self, handle: Handle) -> usize {
        self.get_node_unchecked(&handle.id()).sequence.len()
    }

    #[inline]
    fn min_node_id(&self) -> NodeId {
        self.min_id
    }

    #[inline]
    fn max_node_id(&self) -> NodeId {
        self.max_id
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    #[inline]
    fn total_length(&self) -> usize {
        self.graph.values().map(|n| n.sequence.len()).sum()
    }
}

impl<'a> IntoHandles for &'a HashGraph {
    type Handles = NodeIdRefHandles<
        'a,
        std::collections::hash_map::Keys<'a, NodeId, Node>,
    >;

    #[inline]
    fn handles(self) -> Self::Handles {
        let keys = self.graph.keys();
        NodeIdRefHandles::new(keys)
    }
}

impl<'a> IntoNeighbors for &'a HashGraph {
    type Neighbors = NeighborIter<'a, std::slice::Iter<'a, Handle>>;

    #[inline]
    fn neighbors(self, handle: Handle, dir: Direction) -> Self::Neighbors {
        let leaving = if dir == Direction::Left {
            handle.flip()
        } else {
            handle
        };

        let edges: &'a [Handle] = match self.graph.get(&handle.id()) {
            Some(node) => node.edges_leaving(leaving).as_slice(),
            None => &[],
        };

        NeighborIter::new(edges.iter(), dir == Direction::Left)
    }
}

impl<'a> IntoEdges for &'a HashGraph {
    type Edges = EdgesIter<&'a HashGraph>;

    #[inline]
    fn edges(self) -> Self::Edges {
        EdgesIter::new(self)
    }
}

impl AdditiveHandleGraph for HashGraph {
    fn append_handle(&mut self, sequence: &[u8]) -> Handle {
        self.create_handle(sequence, self.max_id + 1)
    }

    fn create_handle<T: Into<NodeId>>(
        &mut self,
        seq: &[u8],
        node_id: T,
    ) -> Handle {
        let id: NodeId = node_id.into();

        self.graph.entry(id).or_insert_with(|| Node::new(seq));
        self.max_id = std::cmp::max(self.max_id, id);
        self.min_id = std::cmp::min(self.min_id, id);

        Handle::pack(id, false)
    }

    fn create_edge(&mut self, Edge(left, right): Edge) {
        if self.contains_edge(left, right) {
            return;
        }

        if let Some(node) = self.graph.get_mut(&left.id()) {
            node.edges_leaving_mut(left).push(right);
        }

        // a reversing self-loop is its own reverse edge, and has
        // already been stored above
        if left != right.flip() {
            if let Some(node) = self.graph.get_mut(&right.id()) {
                node.edges_leaving_mut(right.flip()).push(left.flip());
            }
        }
    }
}
