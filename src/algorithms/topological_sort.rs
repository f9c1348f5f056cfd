use std::collections::VecDeque;

use fnv::FnvHashSet;

use crate::{
    handle::{Direction, Edge, Handle, NodeId},
    handlegraph::*,
};

/// An ordering of the nodes of the graph, each with an orientation,
/// that places every node after its predecessors wherever the graph
/// allows it.
///
/// Nodes without predecessors are used as heads, in node ID order.
/// When the remaining graph has no free node, e.g. because of a
/// cycle or a reversing edge, the smallest unvisited node is picked
/// in its forward orientation. Repeated calls on the same graph give
/// the same order, so it can be used to make later stages
/// deterministic. The graph itself is not modified.
pub fn topological_order<G>(graph: G) -> Vec<Handle>
where
    G: HandleGraphRef,
{
    let mut ids: Vec<NodeId> = graph.handles().map(|h| h.id()).collect();
    ids.sort();

    let mut order: Vec<Handle> = Vec::with_capacity(ids.len());
    let mut visited: FnvHashSet<NodeId> = FnvHashSet::default();
    let mut masked: FnvHashSet<Edge> = FnvHashSet::default();
    let mut queue: VecDeque<Handle> = VecDeque::new();

    queue.extend(
        ids.iter()
            .map(|&id| Handle::pack(id, false))
            .filter(|&h| graph.degree(h, Direction::Left) == 0),
    );

    let mut next_seed = 0;

    loop {
        while let Some(handle) = queue.pop_front() {
            if !visited.insert(handle.id()) {
                continue;
            }
            order.push(handle);

            for next in graph.neighbors(handle, Direction::Right) {
                masked.insert(Edge::edge_handle(handle, next));
                if !visited.contains(&next.id())
                    && is_free(graph, next, &masked)
                {
                    queue.push_back(next);
                }
            }

            // nodes only reachable backwards are left to the seeding
            for prev in graph.neighbors(handle, Direction::Left) {
                masked.insert(Edge::edge_handle(prev, handle));
            }
        }

        while next_seed < ids.len() && visited.contains(&ids[next_seed]) {
            next_seed += 1;
        }

        if next_seed == ids.len() {
            break;
        }

        queue.push_back(Handle::pack(ids[next_seed], false));
    }

    order
}

/// A traversal is free once every edge entering it has been used.
fn is_free<G>(graph: G, handle: Handle, masked: &FnvHashSet<Edge>) -> bool
where
    G: IntoNeighbors,
{
    graph
        .neighbors(handle, Direction::Left)
        .all(|prev| masked.contains(&Edge::edge_handle(prev, handle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::hashgraph::HashGraph;
    use crate::mutablehandlegraph::*;

    fn hnd(x: u64) -> Handle {
        Handle::pack(x, false)
    }

    fn position(order: &[Handle], id: u64) -> usize {
        order
            .iter()
            .position(|h| h.id() == NodeId::from(id))
            .unwrap()
    }

    #[test]
    fn order_respects_edges_in_a_dag() {
        let mut graph = HashGraph::new();
        for id in &[4u64, 2, 1, 3, 5] {
            graph.create_handle(b"A", *id);
        }
        graph.create_edge(Edge(hnd(1), hnd(2)));
        graph.create_edge(Edge(hnd(1), hnd(3)));
        graph.create_edge(Edge(hnd(2), hnd(4)));
        graph.create_edge(Edge(hnd(3), hnd(4)));
        graph.create_edge(Edge(hnd(4), hnd(5)));

        let order = topological_order(&graph);
        assert_eq!(order.len(), 5);
        assert!(order.iter().all(|h| !h.is_reverse()));
        assert_eq!(order[0], hnd(1));
        assert!(position(&order, 2) < position(&order, 4));
        assert!(position(&order, 3) < position(&order, 4));
        assert_eq!(order[4], hnd(5));
    }

    #[test]
    fn reversed_nodes_are_oriented_along_the_path() {
        let mut graph = HashGraph::new();
        let h1 = graph.append_handle(b"A");
        let h2 = graph.append_handle(b"C");
        let h3 = graph.append_handle(b"G");

        // 1+ -> 2- -> 3+
        graph.create_edge(Edge(h1, h2.flip()));
        graph.create_edge(Edge(h2.flip(), h3));

        let order = topological_order(&graph);
        assert_eq!(order, vec![h1, h2.flip(), h3]);
    }

    #[test]
    fn cycles_still_visit_every_node_once() {
        let mut graph = HashGraph::new();
        let h1 = graph.append_handle(b"A");
        let h2 = graph.append_handle(b"C");
        let h3 = graph.append_handle(b"G");

        graph.create_edge(Edge(h1, h2));
        graph.create_edge(Edge(h2, h3));
        graph.create_edge(Edge(h3, h1));

        let order = topological_order(&graph);
        assert_eq!(order, vec![h1, h2, h3]);
    }
}
