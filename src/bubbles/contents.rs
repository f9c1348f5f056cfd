use std::cell::RefCell;

use fnv::{FnvHashMap, FnvHashSet};

use crate::{
    algorithms::{dfs, is_self_looping, travs_from},
    handle::{Handle, NodeId},
    handlegraph::IntoNeighbors,
};

use super::tree::Bubble;

#[derive(Default)]
struct Walk {
    visited: FnvHashSet<NodeId>,
    // nodes on the current DFS path, counted per orientation
    active: FnvHashMap<NodeId, usize>,
    dag: bool,
}

/// Fills in the contents and the DAG flag of a bubble by walking the
/// graph from its start side towards its end.
///
/// The walk starts by leaving the start node through the start side,
/// and never continues past the end node (in either orientation) or
/// back into the start node through the start side. Every node it
/// reaches, other than the two boundary nodes, is content.
///
/// The bubble is a DAG unless a content node has a self-loop, or the
/// walk finds an edge back to a node on the current DFS path, the
/// start node included. Edges between the two orientations of one
/// node don't count.
pub fn fill_bubble<G>(graph: G, bubble: &mut Bubble)
where
    G: IntoNeighbors + Copy,
{
    let start = bubble.start;
    let end = bubble.end;

    let source = start.outward();
    let sinks: FnvHashSet<Handle> = vec![
        start.inward(),
        Handle::pack(end.node, false),
        Handle::pack(end.node, true),
    ]
    .into_iter()
    .collect();

    let walk = RefCell::new(Walk {
        dag: true,
        ..Walk::default()
    });

    dfs(
        graph,
        &[source],
        &sinks,
        |handle| {
            let mut walk = walk.borrow_mut();
            walk.visited.insert(handle.id());

            if walk.dag && !sinks.contains(&handle) {
                let closes_cycle = travs_from(graph, handle).any(|next| {
                    next.id() != handle.id()
                        && walk.active.contains_key(&next.id())
                });
                if closes_cycle {
                    walk.dag = false;
                }
            }

            *walk.active.entry(handle.id()).or_insert(0) += 1;
        },
        |handle| {
            let mut walk = walk.borrow_mut();
            let remaining = walk.active.get_mut(&handle.id()).map(|count| {
                *count -= 1;
                *count
            });
            if remaining == Some(0) {
                walk.active.remove(&handle.id());
            }
        },
    );

    let walk = walk.into_inner();

    let mut contents = walk
        .visited
        .into_iter()
        .filter(|&id| id != start.node && id != end.node)
        .collect::<Vec<_>>();
    contents.sort();

    let dag = walk.dag && !contents.iter().any(|&id| is_self_looping(graph, id));

    bubble.contents = contents;
    bubble.dag = dag;
}
