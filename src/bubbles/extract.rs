/*!
Walks a cactus graph and produces the nested chains of bubbles.

Bubbles come from two places. A cycle entered at some node yields a
bubble at each of its other nodes, bounded by the sides of the two
cycle edges meeting there. A bridge leading into a block (a maximal
set of cactus nodes connected through cycles) that has exactly one
other bridge yields a bubble bounded by the sides of the two bridges;
consecutive bridge bubbles form a chain.
*/

use fnv::FnvHashMap;

use std::collections::VecDeque;

use crate::{
    error::{Error, Result},
    nodeside::NodeSide,
};

use super::cactus::Cactus;

/// A bubble of a chain, with the chains nested inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMember {
    pub start: NodeSide,
    pub end: NodeSide,
    pub chains: Vec<Vec<ChainMember>>,
}

impl ChainMember {
    fn new(a: NodeSide, b: NodeSide, chains: Vec<Vec<ChainMember>>) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self { start, end, chains }
    }
}

/// Something attached to a cactus node, excluded from a walk when it
/// is the way the walk arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attachment {
    Cycle(usize),
    Bridge(usize),
}

/// A step along part of a cycle: the node, and the cycle edges the
/// step arrives and leaves through.
type Step = (usize, usize, usize);

/// The top level chains of the cactus, starting with those reached
/// from node 0.
pub fn extract(cactus: &Cactus) -> Result<Vec<Vec<ChainMember>>> {
    let mut chains = Vec::new();
    for &root in cactus.roots() {
        chains.extend(chains_at(cactus, root, &[])?);
    }
    Ok(chains)
}

fn push_chain(chains: &mut Vec<Vec<ChainMember>>, chain: Vec<ChainMember>) {
    if !chain.is_empty() {
        chains.push(chain);
    }
}

fn chains_at(
    cactus: &Cactus,
    node: usize,
    excluded: &[Attachment],
) -> Result<Vec<Vec<ChainMember>>> {
    let mut chains = Vec::new();

    for &cycle_ix in cactus.cycles_at(node) {
        if excluded.contains(&Attachment::Cycle(cycle_ix)) {
            continue;
        }

        let cycle = cactus.cycle(cycle_ix);
        let len = cycle.len();
        let pos = cycle.position(node).ok_or(Error::LostEdge {
            edge: cactus.edge(cycle.edges[0]).node,
        })?;

        let steps = (1..len).map(|i| {
            let at = (pos + i) % len;
            (cycle.nodes[at], cycle.edges[(at + len - 1) % len], cycle.edges[at])
        });

        let chain = arc_chain(cactus, cycle_ix, steps)?;
        push_chain(&mut chains, chain);
    }

    for &bridge in cactus.bridges_at(node) {
        if excluded.contains(&Attachment::Bridge(bridge)) {
            continue;
        }
        bridge_chain(cactus, bridge, node, &mut chains)?;
    }

    Ok(chains)
}

fn arc_chain<I>(
    cactus: &Cactus,
    cycle_ix: usize,
    steps: I,
) -> Result<Vec<ChainMember>>
where
    I: Iterator<Item = Step>,
{
    steps
        .map(|(node, arrive, leave)| {
            let start = cactus.edge(arrive).side_at(node)?;
            let end = cactus.edge(leave).side_at(node)?;
            let chains =
                chains_at(cactus, node, &[Attachment::Cycle(cycle_ix)])?;
            Ok(ChainMember::new(start, end, chains))
        })
        .collect()
}

/// Follows `bridge` away from `from`, adding the chain of bridge
/// bubbles it starts, and whatever lies beyond its end, to `chains`.
fn bridge_chain(
    cactus: &Cactus,
    bridge: usize,
    from: usize,
    chains: &mut Vec<Vec<ChainMember>>,
) -> Result<()> {
    let mut chain = Vec::new();
    let mut bridge = bridge;
    let mut from = from;

    loop {
        let entry = cactus.edge(bridge).other(from);

        let exits = cactus
            .block(entry)
            .iter()
            .flat_map(|&node| {
                cactus
                    .bridges_at(node)
                    .iter()
                    .filter(move |&&b| b != bridge)
                    .map(move |&b| (node, b))
            })
            .collect::<Vec<_>>();

        if let &[(exit, next)] = exits.as_slice() {
            let start = cactus.edge(bridge).side_at(entry)?;
            let end = cactus.edge(next).side_at(exit)?;
            let inner = interior(cactus, entry, exit, bridge, next)?;
            chain.push(ChainMember::new(start, end, inner));

            bridge = next;
            from = exit;
        } else {
            push_chain(chains, chain);
            chains.extend(chains_at(
                cactus,
                entry,
                &[Attachment::Bridge(bridge)],
            )?);
            return Ok(());
        }
    }
}

/// The cycles connecting `from` to `to` within their block, as
/// `(cycle, entered at, left at)` triples in path order.
fn block_path(
    cactus: &Cactus,
    from: usize,
    to: usize,
    bridge: usize,
) -> Result<Vec<(usize, usize, usize)>> {
    let mut prev: FnvHashMap<usize, (usize, usize)> = FnvHashMap::default();
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }
        for &cycle_ix in cactus.cycles_at(current) {
            for &other in cactus.cycle(cycle_ix).nodes.iter() {
                if other != from && !prev.contains_key(&other) {
                    prev.insert(other, (cycle_ix, current));
                    queue.push_back(other);
                }
            }
        }
    }

    let mut path = Vec::new();
    let mut current = to;
    while current != from {
        let (cycle_ix, previous) = prev
            .get(&current)
            .copied()
            .ok_or(Error::LostEdge {
                edge: cactus.edge(bridge).node,
            })?;
        path.push((cycle_ix, previous, current));
        current = previous;
    }
    path.reverse();
    Ok(path)
}

/// The chains inside the bubble between the bridges `in_bridge`, at
/// `entry`, and `out_bridge`, at `exit`.
fn interior(
    cactus: &Cactus,
    entry: usize,
    exit: usize,
    in_bridge: usize,
    out_bridge: usize,
) -> Result<Vec<Vec<ChainMember>>> {
    let path = block_path(cactus, entry, exit, out_bridge)?;

    let mut path_nodes = vec![entry];
    path_nodes.extend(path.iter().map(|&(_, _, to)| to));

    let mut chains = Vec::new();

    for (i, &node) in path_nodes.iter().enumerate() {
        let mut excluded = Vec::with_capacity(4);
        if i > 0 {
            excluded.push(Attachment::Cycle(path[i - 1].0));
        }
        if i < path.len() {
            excluded.push(Attachment::Cycle(path[i].0));
        }
        if i == 0 {
            excluded.push(Attachment::Bridge(in_bridge));
        }
        if i == path.len() {
            excluded.push(Attachment::Bridge(out_bridge));
        }

        chains.extend(chains_at(cactus, node, &excluded)?);

        if let Some(&(cycle_ix, a, b)) = path.get(i) {
            let cycle = cactus.cycle(cycle_ix);
            let len = cycle.len();
            let lost = || Error::LostEdge {
                edge: cactus.edge(cycle.edges[0]).node,
            };
            let i_a = cycle.position(a).ok_or_else(lost)?;
            let i_b = cycle.position(b).ok_or_else(lost)?;

            let forward = (1..(i_b + len - i_a) % len).map(|s| {
                let k = (i_a + s) % len;
                (cycle.nodes[k], cycle.edges[(k + len - 1) % len], cycle.edges[k])
            });
            let chain = arc_chain(cactus, cycle_ix, forward)?;
            push_chain(&mut chains, chain);

            let backward = (1..(i_a + len - i_b) % len).map(|s| {
                let k = (i_a + len - s) % len;
                (cycle.nodes[k], cycle.edges[k], cycle.edges[(k + len - 1) % len])
            });
            let chain = arc_chain(cactus, cycle_ix, backward)?;
            push_chain(&mut chains, chain);
        }
    }

    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::algorithms::topological_order;
    use crate::bubbles::{cactus::AuxGraph, components::SideComponents};
    use crate::handle::Edge;
    use crate::hashgraph::HashGraph;
    use crate::mutablehandlegraph::AdditiveHandleGraph;
    use crate::util::test::*;

    fn chains_of(graph: &HashGraph) -> Vec<Vec<ChainMember>> {
        let order = topological_order(graph);
        let components = SideComponents::new(graph, &order).unwrap();
        let aux = AuxGraph::new(&components).unwrap();
        let cactus = Cactus::new(aux).unwrap();
        extract(&cactus).unwrap()
    }

    fn leaf(start: NodeSide, end: NodeSide) -> ChainMember {
        ChainMember::new(start, end, Vec::new())
    }

    fn s(id: u64) -> NodeSide {
        NodeSide::start(id)
    }

    fn e(id: u64) -> NodeSide {
        NodeSide::end(id)
    }

    #[test]
    fn diamond_is_one_bridge_bubble() {
        let chains = chains_of(&diamond());
        assert_eq!(chains, vec![vec![leaf(e(1), s(3))]]);
    }

    #[test]
    fn linear_graph_is_a_chain_of_empty_bubbles() {
        let graph = graph_from_edges(3, &[(1, 2), (2, 3)]);
        let chains = chains_of(&graph);
        assert_eq!(chains, vec![vec![leaf(e(1), s(2)), leaf(e(2), s(3))]]);
    }

    #[test]
    fn bypassed_chain_is_nested() {
        let chains = chains_of(&nested_bubbles());
        let inner = vec![leaf(e(2), s(5)), leaf(e(5), s(8))];
        assert_eq!(
            chains,
            vec![vec![ChainMember::new(e(1), s(10), vec![inner])]]
        );
    }

    #[test]
    fn directed_cycle_is_a_chain() {
        let graph = graph_from_edges(3, &[(1, 2), (2, 3), (3, 1)]);
        let chains = chains_of(&graph);
        assert_eq!(chains.len(), 1);

        let mut chain = chains[0].clone();
        chain.sort_by_key(|m| m.start);
        assert_eq!(chain, vec![leaf(e(1), s(2)), leaf(e(2), s(3))]);
    }

    #[test]
    fn inner_cycle_is_nested_in_bridge_bubble() {
        let chains = chains_of(&bubble_with_inner_cycle(true));
        assert_eq!(
            chains,
            vec![vec![ChainMember::new(
                e(1),
                s(4),
                vec![vec![leaf(e(2), s(3))]]
            )]]
        );
    }

    #[test]
    fn tip_inside_a_block_ends_the_chain() {
        // 1 -> 2 -> 3 plus the tip 2 -> 4
        let graph = graph_from_edges(4, &[(1, 2), (2, 3), (2, 4)]);
        let chains = chains_of(&graph);
        assert_eq!(chains, vec![vec![leaf(e(1), s(2))]]);
    }

    #[test]
    fn disconnected_components_are_all_visited() {
        let mut graph = diamond();
        let h4 = graph.append_handle(b"A");
        let h5 = graph.append_handle(b"A");
        let h6 = graph.append_handle(b"A");
        graph.create_edge(Edge(h4, h5));
        graph.create_edge(Edge(h5, h6));
        graph.create_edge(Edge(h4, h6));

        let chains = chains_of(&graph);
        assert_eq!(
            chains,
            vec![vec![leaf(e(1), s(3))], vec![leaf(e(4), s(6))]]
        );
    }
}
