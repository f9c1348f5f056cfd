use ultrabubbles::{
    handle::{Direction, Edge, Handle, NodeId},
    handlegraph::*,
    hashgraph::HashGraph,
    mutablehandlegraph::*,
};

static H1: Handle = Handle::from_integer(2);
static H2: Handle = Handle::from_integer(4);
static H3: Handle = Handle::from_integer(6);
static H4: Handle = Handle::from_integer(8);
static H5: Handle = Handle::from_integer(10);
static H6: Handle = Handle::from_integer(12);

#[test]
fn can_create_handles() {
    let mut graph = HashGraph::new();
    let h1 = graph.append_handle(b"CAAATAAG");
    let h2 = graph.append_handle(b"A");
    let h3 = graph.append_handle(b"G");

    let n1 = graph.get_node_unchecked(&h1.id());
    let n2 = graph.get_node_unchecked(&h2.id());
    let n3 = graph.get_node_unchecked(&h3.id());

    assert_eq!(u64::from(h1.id()), 1);
    assert_eq!(u64::from(h3.id()), 3);

    assert_eq!(n1.sequence.as_slice(), b"CAAATAAG");
    assert_eq!(n2.sequence.as_slice(), b"A");
    assert_eq!(n3.sequence.as_slice(), b"G");

    assert_eq!(graph.node_len(h1), 8);
    assert_eq!(graph.total_length(), 10);
    assert_eq!(graph.min_node_id(), NodeId::from(1u64));
    assert_eq!(graph.max_node_id(), NodeId::from(3u64));
}

#[test]
fn create_handle_keeps_existing_nodes() {
    let mut graph = HashGraph::new();
    graph.create_handle(b"GATTACA", 5u64);
    graph.create_handle(b"T", 5u64);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.sequence(NodeId::from(5u64)), Some(&b"GATTACA"[..]));

    // appending continues after the largest ID
    let h = graph.append_handle(b"C");
    assert_eq!(u64::from(h.id()), 6);
}

#[test]
fn can_create_edges() {
    let mut graph = HashGraph::new();
    let h1 = graph.append_handle(b"CAAATAAG");
    let h2 = graph.append_handle(b"A");
    let h3 = graph.append_handle(b"G");
    let h4 = graph.append_handle(b"TTG");

    graph.create_edge(Edge(h1, h2));
    graph.create_edge(Edge(h1, h3));
    graph.create_edge(Edge(h2, h4));
    graph.create_edge(Edge(h3, h4));

    let n1 = graph.get_node_unchecked(&h1.id());
    let n2 = graph.get_node_unchecked(&h2.id());
    let n3 = graph.get_node_unchecked(&h3.id());
    let n4 = graph.get_node_unchecked(&h4.id());

    assert_eq!(true, n1.right_edges.contains(&h2));
    assert_eq!(true, n1.right_edges.contains(&h3));

    assert_eq!(true, n2.left_edges.contains(&h1.flip()));
    assert_eq!(true, n2.right_edges.contains(&h4));
    assert_eq!(true, n3.left_edges.contains(&h1.flip()));
    assert_eq!(true, n3.right_edges.contains(&h4));

    assert_eq!(true, n4.left_edges.contains(&h2.flip()));
    assert_eq!(true, n4.left_edges.contains(&h3.flip()));
}

fn path_graph() -> HashGraph {
    let mut graph = HashGraph::new();
    let h1 = graph.create_handle(b"1", 1);
    let h2 = graph.create_handle(b"2", 2);
    let h3 = graph.create_handle(b"3", 3);
    let h4 = graph.create_handle(b"4", 4);
    let h5 = graph.create_handle(b"5", 5);
    let h6 = graph.create_handle(b"6", 6);

    /*
    edges
    1  -> 2 -> 5 -> 6
      \-> 3 -> 4 /
     */
    graph.create_edge(Edge(h1, h2));
    graph.create_edge(Edge(h2, h5));
    graph.create_edge(Edge(h5, h6));

    graph.create_edge(Edge(h1, h3));
    graph.create_edge(Edge(h3, h4));
    graph.create_edge(Edge(h4, h6));

    graph
}

#[test]
fn degree_is_correct() {
    let graph = path_graph();

    assert_eq!(graph.degree(H1, Direction::Right), 2);
    assert_eq!(graph.degree(H1, Direction::Left), 0);
    assert_eq!(graph.degree(H6, Direction::Left), 2);
    assert_eq!(graph.degree(H6.flip(), Direction::Right), 2);
    assert_eq!(graph.degree(H3, Direction::Left), 1);
}

#[test]
fn graph_has_edge() {
    let graph = path_graph();

    assert!(graph.has_edge(H1, H2));
    assert!(graph.has_edge(H2.flip(), H1.flip()));
    assert!(!graph.has_edge(H2, H1));
    assert!(!graph.has_edge(H1, H6));
}

#[test]
fn graph_neighbors_iter() {
    let mut graph = path_graph();

    graph.create_edge(Edge(H1, H4));
    graph.create_edge(Edge(H1, H6));

    let mut iter = graph.neighbors(H1, Direction::Right);

    assert_eq!(Some(H2), iter.next());
    assert_eq!(Some(H3), iter.next());
    assert_eq!(Some(H4), iter.next());
    assert_eq!(Some(H6), iter.next());
    assert_eq!(None, iter.next());

    let mut iter = graph.neighbors(H6, Direction::Left);
    assert_eq!(Some(H5), iter.next());
    assert_eq!(Some(H4), iter.next());
    assert_eq!(Some(H1), iter.next());
    assert_eq!(None, iter.next());
}

#[test]
fn graph_handles_iter() {
    let graph = path_graph();

    let iter = graph.handles();

    let nodes: Vec<_> = vec![H1, H2, H3, H4, H5, H6]
        .into_iter()
        .map(|x| x.id())
        .collect();

    let mut iter_nodes: Vec<NodeId> = vec![];

    for h in iter {
        assert!(!h.is_reverse());
        iter_nodes.push(h.id())
    }

    assert!(iter_nodes.iter().all(|n| graph.get_node(n).is_some()));

    assert!(nodes.iter().all(|n| iter_nodes.contains(n)));
}

#[test]
fn graph_edges_iter() {
    let mut graph = path_graph();

    graph.create_edge(Edge(H1, H4));
    graph.create_edge(Edge(H1, H6));

    graph.create_edge(Edge(H4, H2));
    graph.create_edge(Edge(H6, H2));

    graph.create_edge(Edge(H3, H5));

    let mut edges_found: Vec<_> = graph.edges().collect();

    edges_found.sort();

    let mut edges: Vec<_> = vec![
        Edge::edge_handle(H1, H2),
        Edge::edge_handle(H1, H3),
        Edge::edge_handle(H1, H4),
        Edge::edge_handle(H1, H6),
        Edge::edge_handle(H2, H5),
        Edge::edge_handle(H4, H2),
        Edge::edge_handle(H6, H2),
        Edge::edge_handle(H3, H4),
        Edge::edge_handle(H3, H5),
        Edge::edge_handle(H4, H6),
        Edge::edge_handle(H5, H6),
    ];

    edges.sort();

    assert_eq!(edges, edges_found);
    assert_eq!(graph.edge_count(), 11);
}

#[test]
fn reversing_edges_are_iterated_once() {
    let mut graph = path_graph();

    // 2+ -> 4-, 3- -> 5+, and the self-loops 6+ -> 6-, 1- -> 1+
    graph.create_edge(Edge(H2, H4.flip()));
    graph.create_edge(Edge(H3.flip(), H5));
    graph.create_edge(Edge(H6, H6.flip()));
    graph.create_edge(Edge(H1.flip(), H1));

    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges.len(), 10);

    assert!(graph.has_edge(H4, H2.flip()));
    assert!(graph.has_edge(H5.flip(), H3));
    assert!(graph.has_edge(H6, H6.flip()));
    assert!(graph.has_edge(H1.flip(), H1));
}
