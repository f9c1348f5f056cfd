/*!
Ultrabubble decomposition of a bidirected sequence graph.

The decomposition runs as a pipeline:

1. The node sides of the graph are partitioned into adjacency
   components ([`components`]).
2. An auxiliary multigraph is built with one node per component and
   one edge per sequence node, and its 3-edge-connected components
   are merged, producing a cactus graph ([`cactus`]).
3. The cycles and bridges of the cactus are walked to produce nested
   chains of bubbles ([`extract`]), which are stored in a
   [`BubbleTree`].
4. Each bubble's contents and DAG flag are filled in by walking the
   original graph between its boundaries ([`contents`]).

Nodes are always enumerated in the graph's
[`topological_order`](crate::algorithms::topological_order), so
decomposing the same graph twice gives the same tree.
*/

use std::collections::BTreeMap;
use std::time::Instant;

use rayon::prelude::*;

use crate::{
    algorithms::topological_order,
    error::Result,
    handle::NodeId,
    handlegraph::*,
    hashgraph::HashGraph,
    util::validate,
};

pub mod cactus;
pub mod components;
pub mod contents;
pub mod extract;
pub mod three_edge;
pub mod tree;

pub use self::tree::{Bubble, BubbleTree};

use self::{
    cactus::{AuxGraph, Cactus},
    components::SideComponents,
};

#[allow(unused_imports)]
use log::{debug, trace};

/// Validates the graph and collapses its auxiliary graph into a
/// cactus graph.
fn build_cactus<'a, G>(graph: &'a G) -> Result<Cactus>
where
    G: HandleGraph,
    &'a G: HandleGraphRef,
{
    validate(graph)?;

    let t = Instant::now();
    let order = topological_order(graph);
    debug!(
        "ordered {} nodes in {:.2} ms",
        order.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let components = SideComponents::new(graph, &order)?;
    debug!(
        "found {} adjacency components in {:.2} ms",
        components.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let aux = AuxGraph::new(&components)?;
    debug!(
        "auxiliary graph has {} nodes and {} edges",
        aux.node_count,
        aux.edges.len()
    );

    Cactus::new(aux)
}

/// Decomposes the graph into its tree of ultrabubbles.
///
/// A graph without nodes produces a tree containing only the root.
pub fn ultrabubble_tree<'a, G>(graph: &'a G) -> Result<BubbleTree>
where
    G: HandleGraph,
    &'a G: HandleGraphRef,
{
    let cactus = build_cactus(graph)?;

    let t = Instant::now();
    let chains = extract::extract(&cactus)?;
    let mut tree = BubbleTree::from_chains(chains);
    debug!(
        "extracted {} bubbles in {} top level chains in {:.2} ms",
        tree.len() - 1,
        tree.chains(BubbleTree::ROOT).len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    for ix in 1..tree.len() {
        let bubble = tree.bubble_mut(ix);
        contents::fill_bubble(graph, bubble);
        trace!(
            "bubble {} - {}: {} nodes, dag: {}",
            bubble.start,
            bubble.end,
            bubble.contents.len(),
            bubble.dag
        );
    }
    debug!(
        "filled bubble contents in {:.2} ms",
        t.elapsed().as_secs_f64() * 1000.0
    );

    Ok(tree)
}

/// The bubbles of the graph as a map from the IDs of their boundary
/// nodes to the IDs of the nodes they contain, sorted. The root of
/// the tree is not included.
pub fn ultrabubbles<'a, G>(
    graph: &'a G,
) -> Result<BTreeMap<(NodeId, NodeId), Vec<NodeId>>>
where
    G: HandleGraph,
    &'a G: HandleGraphRef,
{
    let tree = ultrabubble_tree(graph)?;
    Ok(tree.flatten())
}

/// Decomposes each of the graphs, in parallel.
pub fn ultrabubble_trees<G>(graphs: &[G]) -> Vec<Result<BubbleTree>>
where
    G: HandleGraph + Sync,
    for<'a> &'a G: HandleGraphRef,
{
    graphs.par_iter().map(|g| ultrabubble_tree(g)).collect()
}

/// The collapsed cactus graph of `graph`, as a graph with one node
/// per cactus node and one edge per sequence node. See
/// [`Cactus::to_graph`].
pub fn cactusify<'a, G>(graph: &'a G) -> Result<HashGraph>
where
    G: HandleGraph,
    &'a G: HandleGraphRef,
{
    let cactus = build_cactus(graph)?;
    Ok(cactus.to_graph())
}
