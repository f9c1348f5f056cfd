/*!
A `HashMap`-based graph implementation. It does nothing to reduce
its memory footprint, and is mostly useful for building graphs
programmatically, for example in tests, or for inspecting the output
of [`cactusify`](crate::bubbles::cactusify).
*/

mod graph;
mod node;

pub use self::graph::HashGraph;
pub use self::node::Node;
