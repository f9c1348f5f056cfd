/*!
The auxiliary multigraph of a sequence graph, and its collapse into a
cactus graph.

The auxiliary graph has one node per adjacency component and one edge
per sequence node, connecting the components of the node's two
sides. Collapsing merges every 3-edge-connected component into a
single node, after which every edge is either a bridge or lies on
exactly one cycle.
*/

use std::time::Instant;

use fnv::FnvHashSet;

use crate::{
    disjoint::DisjointSets,
    error::{Error, Result},
    handle::{Edge, Handle, NodeId},
    hashgraph::HashGraph,
    mutablehandlegraph::AdditiveHandleGraph,
    nodeside::NodeSide,
};

use super::{components::SideComponents, three_edge::three_edge_connected};

#[allow(unused_imports)]
use log::{debug, trace};

/// An auxiliary edge, standing in for one sequence node. `sides[i]`
/// is the node side that belongs to the auxiliary node `ends[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxEdge {
    pub node: NodeId,
    pub ends: [usize; 2],
    pub sides: [NodeSide; 2],
}

impl AuxEdge {
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.ends[0] == self.ends[1]
    }

    /// The end of the edge opposite to `vertex`.
    #[inline]
    pub fn other(&self, vertex: usize) -> usize {
        if self.ends[0] == vertex {
            self.ends[1]
        } else {
            self.ends[0]
        }
    }

    /// The node side of this edge that is attached to `vertex`.
    #[inline]
    pub fn side_at(&self, vertex: usize) -> Result<NodeSide> {
        if self.ends[0] == vertex {
            Ok(self.sides[0])
        } else if self.ends[1] == vertex {
            Ok(self.sides[1])
        } else {
            Err(Error::LostEdge { edge: self.node })
        }
    }
}

/// The auxiliary multigraph, before collapsing.
#[derive(Debug, Clone, Default)]
pub struct AuxGraph {
    pub node_count: usize,
    pub edges: Vec<AuxEdge>,
}

impl AuxGraph {
    /// Edges are created in component order, and within a component
    /// in the order its sides were reached; each sequence node only
    /// produces the edge for the first of its sides.
    pub fn new(components: &SideComponents) -> Result<Self> {
        let mut seen: FnvHashSet<NodeId> = FnvHashSet::default();
        let mut edges = Vec::new();

        for members in components.iter() {
            for side in members {
                if !seen.insert(side.node) {
                    continue;
                }

                let sides = [NodeSide::start(side.node), NodeSide::end(side.node)];
                let ends = [
                    components.component(sides[0])?,
                    components.component(sides[1])?,
                ];

                edges.push(AuxEdge {
                    node: side.node,
                    ends,
                    sides,
                });
            }
        }

        Ok(AuxGraph {
            node_count: components.len(),
            edges,
        })
    }
}

/// A cycle of the cactus graph. `edges[i]` connects `nodes[i]` and
/// `nodes[i + 1]`, and the last edge closes the cycle back to
/// `nodes[0]`. A self-loop is a cycle with one node and one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub nodes: Vec<usize>,
    pub edges: Vec<usize>,
}

impl Cycle {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn position(&self, node: usize) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }
}

/// A collapsed auxiliary graph.
///
/// Nodes keep the index of their original auxiliary node; the node
/// that survives a merge is the smallest of the merged nodes, so node
/// 0 is always present when the graph isn't empty. Merged-away
/// indices have no incident edges.
#[derive(Debug, Clone)]
pub struct Cactus {
    sets: DisjointSets,
    edges: Vec<AuxEdge>,
    cycles: Vec<Cycle>,
    cycles_at: Vec<Vec<usize>>,
    bridges_at: Vec<Vec<usize>>,
    edge_cycle: Vec<Option<usize>>,
    roots: Vec<usize>,
    blocks: Vec<Vec<usize>>,
    block_ix: Vec<usize>,
}

impl Cactus {
    pub fn new(aux: AuxGraph) -> Result<Self> {
        let t = Instant::now();

        let AuxGraph { node_count, edges } = aux;

        let pairs = edges
            .iter()
            .map(|e| (e.ends[0], e.ends[1]))
            .collect::<Vec<_>>();
        let mut sets = three_edge_connected(node_count, &pairs);

        let edges = edges
            .into_iter()
            .map(|mut e| {
                e.ends = [sets.find(e.ends[0]), sets.find(e.ends[1])];
                e
            })
            .collect::<Vec<_>>();

        debug!(
            "collapsed {} auxiliary nodes into {} in {:.2} ms",
            node_count,
            sets.set_count(),
            t.elapsed().as_secs_f64() * 1000.0
        );

        let mut cactus = Cactus {
            sets,
            edges,
            cycles: Vec::new(),
            cycles_at: vec![Vec::new(); node_count],
            bridges_at: vec![Vec::new(); node_count],
            edge_cycle: Vec::new(),
            roots: Vec::new(),
            blocks: Vec::new(),
            block_ix: vec![0; node_count],
        };

        let t = Instant::now();
        cactus.find_cycles()?;
        cactus.find_blocks();

        debug!(
            "found {} cycles, {} bridges and {} blocks in {:.2} ms",
            cactus.cycles.len(),
            cactus.edge_cycle.iter().filter(|c| c.is_none()).count(),
            cactus.blocks.len(),
            t.elapsed().as_secs_f64() * 1000.0
        );

        Ok(cactus)
    }

    /// Classifies every edge as a bridge or a cycle edge with a DFS
    /// from each component's smallest node, failing if some edge
    /// lies on more than one cycle.
    fn find_cycles(&mut self) -> Result<()> {
        let node_count = self.sets.len();

        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (ix, edge) in self.edges.iter().enumerate() {
            adj[edge.ends[0]].push(ix);
            if !edge.is_self_loop() {
                adj[edge.ends[1]].push(ix);
            }
        }

        let mut pre: Vec<usize> = vec![0; node_count];
        let mut parent: Vec<Option<(usize, usize)>> = vec![None; node_count];
        let mut covered: Vec<bool> = vec![false; self.edges.len()];
        let mut is_tree: Vec<bool> = vec![false; self.edges.len()];
        let mut edge_cycle: Vec<Option<usize>> = vec![None; self.edges.len()];
        let mut count = 0;

        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..node_count {
            if pre[root] != 0 || self.sets.find_immut(root) != root {
                continue;
            }
            self.roots.push(root);

            count += 1;
            pre[root] = count;
            stack.push((root, 0));

            while let Some((w, next)) = stack.last_mut() {
                let w = *w;
                if *next == adj[w].len() {
                    stack.pop();
                    continue;
                }
                let ix = adj[w][*next];
                *next += 1;

                let edge = self.edges[ix];
                let u = edge.other(w);

                if u == w {
                    edge_cycle[ix] = Some(self.cycles.len());
                    self.cycles.push(Cycle {
                        nodes: vec![w],
                        edges: vec![ix],
                    });
                } else if parent[w].map(|(_, e)| e) == Some(ix) {
                    continue;
                } else if pre[u] == 0 {
                    count += 1;
                    pre[u] = count;
                    parent[u] = Some((w, ix));
                    is_tree[ix] = true;
                    stack.push((u, 0));
                } else if pre[u] < pre[w] {
                    let cycle_ix = self.cycles.len();

                    let mut nodes = vec![w];
                    let mut cycle_edges = Vec::new();
                    let mut x = w;
                    while x != u {
                        let (p, tree_edge) = parent[x].ok_or(Error::LostEdge {
                            edge: edge.node,
                        })?;
                        if covered[tree_edge] {
                            return Err(Error::NotACactus {
                                edge: self.edges[tree_edge].node,
                            });
                        }
                        covered[tree_edge] = true;
                        edge_cycle[tree_edge] = Some(cycle_ix);
                        cycle_edges.push(tree_edge);
                        nodes.push(p);
                        x = p;
                    }

                    nodes.reverse();
                    cycle_edges.reverse();
                    cycle_edges.push(ix);
                    edge_cycle[ix] = Some(cycle_ix);

                    trace!("cycle of length {} through {:?}", nodes.len(), nodes);
                    self.cycles.push(Cycle {
                        nodes,
                        edges: cycle_edges,
                    });
                }
            }
        }

        for (ix, edge) in self.edges.iter().enumerate() {
            match edge_cycle[ix] {
                Some(_) => (),
                None if is_tree[ix] => {
                    self.bridges_at[edge.ends[0]].push(ix);
                    self.bridges_at[edge.ends[1]].push(ix);
                }
                None => return Err(Error::LostEdge { edge: edge.node }),
            }
        }

        for (cycle_ix, cycle) in self.cycles.iter().enumerate() {
            for &node in cycle.nodes.iter() {
                self.cycles_at[node].push(cycle_ix);
            }
        }

        self.edge_cycle = edge_cycle;

        Ok(())
    }

    /// Groups the nodes into blocks, the sets of nodes connected
    /// through cycles. Merged-away nodes end up alone in a block.
    fn find_blocks(&mut self) {
        let node_count = self.sets.len();
        let mut seen = vec![false; node_count];

        for start in 0..node_count {
            if seen[start] {
                continue;
            }
            seen[start] = true;

            let index = self.blocks.len();
            let mut block = vec![start];
            let mut ix = 0;
            while ix < block.len() {
                let current = block[ix];
                ix += 1;
                self.block_ix[current] = index;
                for &cycle_ix in self.cycles_at[current].iter() {
                    for &other in self.cycles[cycle_ix].nodes.iter() {
                        if !seen[other] {
                            seen[other] = true;
                            block.push(other);
                        }
                    }
                }
            }
            self.blocks.push(block);
        }
    }

    #[inline]
    pub fn edge(&self, ix: usize) -> &AuxEdge {
        &self.edges[ix]
    }

    #[inline]
    pub fn edges(&self) -> &[AuxEdge] {
        &self.edges
    }

    #[inline]
    pub fn cycle(&self, ix: usize) -> &Cycle {
        &self.cycles[ix]
    }

    #[inline]
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// The cycles passing through a node, in the order they were
    /// found.
    #[inline]
    pub fn cycles_at(&self, node: usize) -> &[usize] {
        &self.cycles_at[node]
    }

    /// The bridges incident to a node, in edge order.
    #[inline]
    pub fn bridges_at(&self, node: usize) -> &[usize] {
        &self.bridges_at[node]
    }

    #[inline]
    pub fn is_bridge(&self, edge: usize) -> bool {
        self.edge_cycle[edge].is_none()
    }

    /// The nodes connected to `node` through cycles, `node`'s block
    /// included.
    #[inline]
    pub fn block(&self, node: usize) -> &[usize] {
        &self.blocks[self.block_ix[node]]
    }

    /// The smallest node of each connected component, in increasing
    /// order. The first root is node 0, the root of the bubble tree.
    #[inline]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// The surviving node that an auxiliary node was merged into.
    #[inline]
    pub fn representative(&self, node: usize) -> usize {
        self.sets.find_immut(node)
    }

    /// Indices of the nodes that survived collapsing.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.sets.len()).filter(move |&n| self.sets.find_immut(n) == n)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.sets.set_count()
    }

    /// Builds a graph with one node per cactus node, with ID equal to
    /// the node index plus one and sequence `N`, and one edge per
    /// auxiliary edge. Parallel edges are stored once.
    pub fn to_graph(&self) -> HashGraph {
        let mut graph = HashGraph::new();
        for node in self.nodes() {
            graph.create_handle(b"N", node as u64 + 1);
        }
        for edge in self.edges.iter() {
            let left = Handle::pack(edge.ends[0] as u64 + 1, false);
            let right = Handle::pack(edge.ends[1] as u64 + 1, false);
            graph.create_edge(Edge(left, right));
        }
        graph
    }
}
