use crate::{
    error::{Error, Result},
    handle::{Direction, Handle, NodeId},
    handlegraph::*,
};

#[allow(unused_imports)]
use log::{debug, error, info, trace};

/// Checks that every edge in the graph connects two existing nodes.
///
/// Nodes are checked in ID order, so the first dangling edge that is
/// found, and therefore the reported error, doesn't depend on the
/// graph's iteration order.
pub fn validate<'a, G>(graph: &'a G) -> Result<()>
where
    G: HandleGraph,
    &'a G: HandleGraphRef,
{
    let mut ids: Vec<NodeId> = graph.handles().map(|h| h.id()).collect();
    ids.sort();

    for &id in ids.iter() {
        let middle = Handle::pack(id, false);

        for left in graph.neighbors(middle, Direction::Left) {
            if !graph.has_node(left.id()) {
                debug!(
                    "node {}'s left neighbor {} does not exist",
                    id,
                    left.id()
                );
                return Err(Error::DanglingEdge {
                    from: left.id(),
                    to: id,
                    missing: left.id(),
                });
            }
        }

        for right in graph.neighbors(middle, Direction::Right) {
            if !graph.has_node(right.id()) {
                debug!(
                    "node {}'s right neighbor {} does not exist",
                    id,
                    right.id()
                );
                return Err(Error::DanglingEdge {
                    from: id,
                    to: right.id(),
                    missing: right.id(),
                });
            }
        }
    }

    trace!("validated {} nodes", ids.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::handle::Edge;
    use crate::hashgraph::HashGraph;
    use crate::mutablehandlegraph::*;

    #[test]
    fn valid_graph_passes() {
        let graph = crate::util::test::test_hashgraph();
        assert!(validate(&graph).is_ok());
        assert!(validate(&HashGraph::new()).is_ok());
    }

    #[test]
    fn dangling_edges_are_reported() {
        let mut graph = HashGraph::new();
        let h1 = graph.append_handle(b"A");
        let h2 = graph.append_handle(b"T");
        graph.create_edge(Edge(h1, h2));
        graph.create_edge(Edge(h2, Handle::pack(7u64, true)));

        match validate(&graph) {
            Err(Error::DanglingEdge { from, to, missing }) => {
                assert_eq!(from, NodeId::from(2u64));
                assert_eq!(to, NodeId::from(7u64));
                assert_eq!(missing, NodeId::from(7u64));
            }
            other => panic!("expected a dangling edge, got {:?}", other),
        }

        let mut graph = HashGraph::new();
        let h1 = graph.append_handle(b"A");
        graph.create_edge(Edge(Handle::pack(5u64, false), h1));

        match validate(&graph) {
            Err(Error::DanglingEdge { from, to, missing }) => {
                assert_eq!(from, NodeId::from(5u64));
                assert_eq!(to, NodeId::from(1u64));
                assert_eq!(missing, NodeId::from(5u64));
            }
            other => panic!("expected a dangling edge, got {:?}", other),
        }
    }
}
