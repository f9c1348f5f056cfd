/*!
Cactus-based ultrabubble decomposition of bidirected variation
graphs, built on a small
[`libhandlegraph`](https://github.com/vgteam/libhandlegraph)-style
graph interface.

# Overview

A variation graph's nodes carry sequence, and its edges connect node
*sides*. A bubble is a region of the graph bounded by two node sides,
where paths diverge and then reconverge. The decomposition in
[`bubbles`] finds a nested tree of bubbles: chains of bubbles, each
of which may contain further chains.

* [`ultrabubble_tree`](bubbles::ultrabubble_tree) produces the full
  [`BubbleTree`](bubbles::BubbleTree), with the contents and DAG flag
  of every bubble
* [`ultrabubbles`](bubbles::ultrabubbles) flattens the tree into a map
  from boundary node IDs to contents
* [`cactusify`](bubbles::cactusify) returns the intermediate cactus
  graph, for inspection

# The graph interface

* [`handle`] defines [`NodeId`](handle::NodeId),
  [`Handle`](handle::Handle) (a node in a specific orientation, also
  used as a directed traversal of the node) and
  [`Edge`](handle::Edge)
* [`nodeside`] defines [`NodeSide`](nodeside::NodeSide), one of the
  two ends of a node
* [`handlegraph`] is for immutable access to the nodes and edges of a
  graph, [`mutablehandlegraph`] for adding nodes and edges
* [`hashgraph`] has a `HashMap`-based implementation of both
* [`algorithms`] has the traversals the decomposition is built on

*/

pub mod handle;
pub mod nodeside;

pub mod handlegraph;
pub mod mutablehandlegraph;

pub mod hashgraph;

pub mod algorithms;
pub mod bubbles;
pub mod disjoint;
pub mod error;
pub mod util;

pub use self::error::{Error, Result};
