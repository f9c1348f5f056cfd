use crate::{
    handle::{Direction, Handle},
    handlegraph::IntoNeighbors,
};

use fnv::FnvHashSet;

enum Visit {
    Enter(Handle),
    Exit(Handle),
}

/// Depth-first walk over traversals, starting from each of `sources`
/// in turn.
///
/// `enter` is called the first time a traversal is reached, and
/// `exit` once everything reachable from it has been explored, so at
/// any point the entered-but-not-exited traversals form the current
/// DFS path. Traversals in `sinks` are entered and exited like any
/// other, but the walk never continues past them. Each traversal is
/// entered at most once per call.
///
/// The walk uses an explicit stack, so deep graphs can't overflow
/// the call stack.
pub fn dfs<G, Enter, Exit>(
    graph: G,
    sources: &[Handle],
    sinks: &FnvHashSet<Handle>,
    mut enter: Enter,
    mut exit: Exit,
) where
    G: IntoNeighbors + Copy,
    Enter: FnMut(Handle),
    Exit: FnMut(Handle),
{
    let mut visited: FnvHashSet<Handle> = FnvHashSet::default();
    let mut stack: Vec<Visit> = Vec::new();
    let mut next: Vec<Handle> = Vec::new();

    for &source in sources {
        if visited.contains(&source) {
            continue;
        }

        stack.push(Visit::Enter(source));

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(handle) => {
                    if !visited.insert(handle) {
                        continue;
                    }
                    enter(handle);
                    stack.push(Visit::Exit(handle));

                    if !sinks.contains(&handle) {
                        next.clear();
                        next.extend(
                            graph
                                .neighbors(handle, Direction::Right)
                                .filter(|h| !visited.contains(h)),
                        );
                        // reversed so the first neighbor is explored first
                        stack.extend(next.drain(..).rev().map(Visit::Enter));
                    }
                }
                Visit::Exit(handle) => exit(handle),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use crate::handle::Edge;
    use crate::hashgraph::HashGraph;
    use crate::mutablehandlegraph::*;

    fn hnd(x: u64) -> Handle {
        Handle::pack(x, false)
    }

    fn diamond() -> HashGraph {
        let mut graph = HashGraph::new();
        for _ in 0..5 {
            graph.append_handle(b"A");
        }
        graph.create_edge(Edge(hnd(1), hnd(2)));
        graph.create_edge(Edge(hnd(1), hnd(3)));
        graph.create_edge(Edge(hnd(2), hnd(4)));
        graph.create_edge(Edge(hnd(3), hnd(4)));
        graph.create_edge(Edge(hnd(4), hnd(5)));
        graph
    }

    #[test]
    fn dfs_stops_at_sinks() {
        let graph = diamond();
        let sinks: FnvHashSet<Handle> = vec![hnd(4)].into_iter().collect();

        let mut entered = Vec::new();
        let mut exited = Vec::new();
        dfs(
            &graph,
            &[hnd(1)],
            &sinks,
            |h| entered.push(h),
            |h| exited.push(h),
        );

        entered.sort();
        exited.sort();
        assert_eq!(entered, vec![hnd(1), hnd(2), hnd(3), hnd(4)]);
        assert_eq!(entered, exited);
    }

    #[test]
    fn dfs_active_set_is_the_current_path() {
        let graph = diamond();
        let sinks = FnvHashSet::default();

        let active: RefCell<Vec<Handle>> = RefCell::new(Vec::new());
        let mut max_depth = 0;

        dfs(
            &graph,
            &[hnd(1)],
            &sinks,
            |h| {
                let mut active = active.borrow_mut();
                active.push(h);
                max_depth = max_depth.max(active.len());
            },
            |h| {
                let mut active = active.borrow_mut();
                assert_eq!(active.pop(), Some(h));
            },
        );

        assert!(active.into_inner().is_empty());
        // 1 -> 2 -> 4 -> 5 is the longest path
        assert_eq!(max_depth, 4);
    }
}
