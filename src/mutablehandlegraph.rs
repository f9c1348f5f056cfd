use crate::handle::{Edge, Handle, NodeId};

/// Encapsulates adding handles and edges to a handlegraph.
pub trait AdditiveHandleGraph {
    /// Add a node with the provided sequence to the graph, letting
    /// the graph pick the node ID.
    fn append_handle(&mut self, sequence: &[u8]) -> Handle;

    /// Add a node with the provided sequence and ID to the graph.
    fn create_handle<T: Into<NodeId>>(
        &mut self,
        sequence: &[u8],
        node_id: T,
    ) -> Handle;

    /// Insert an edge into the graph. Edges that already exist are
    /// ignored.
    ///
    /// Implementations should not panic if an endpoint of the edge is
    /// missing; the dangling edge must instead be detectable by
    /// [`validate`](crate::util::validate).
    fn create_edge(&mut self, edge: Edge);
}
