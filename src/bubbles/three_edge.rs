/*!
3-edge-connected components of an undirected multigraph, using
Tsin's absorb-eject algorithm.

A single depth-first search keeps, for each vertex `w`, a "path" of
vertices `w -> x1 -> x2 ...` hanging below `w` in the DFS tree that
may still turn out to be 3-edge-connected with `w`. Whenever the
lowpoint or a back edge proves that a prefix of the path is joined to
`w` by a third edge-disjoint path, that prefix is absorbed into `w`.
A vertex whose (absorbed) degree drops to two or less is separated
from its parent by a cut of at most two edges and is ejected as a
finished component.

Self-loops don't affect edge connectivity and are ignored. Parallel
edges are distinct edges; only the tree edge itself is skipped when
looking at a vertex's parent.
*/

use crate::disjoint::DisjointSets;

struct Frame {
    vertex: usize,
    parent_edge: Option<usize>,
    next: usize,
    child: Option<usize>,
}

struct State {
    count: usize,
    // zero means unvisited
    pre: Vec<usize>,
    low: Vec<usize>,
    nd: Vec<usize>,
    deg: Vec<isize>,
    path_next: Vec<Option<usize>>,
    sets: DisjointSets,
}

impl State {
    fn new(size: usize) -> Self {
        Self {
            count: 0,
            pre: vec![0; size],
            low: vec![0; size],
            nd: vec![0; size],
            deg: vec![0; size],
            path_next: vec![None; size],
            sets: DisjointSets::new(size),
        }
    }

    fn visit(&mut self, w: usize) {
        self.count += 1;
        self.pre[w] = self.count;
        self.low[w] = self.count;
        self.nd[w] = 1;
        self.deg[w] = 0;
        self.path_next[w] = None;
    }

    #[inline]
    fn is_ancestor(&self, x: usize, u: usize) -> bool {
        self.pre[x] <= self.pre[u] && self.pre[u] < self.pre[x] + self.nd[x]
    }

    #[inline]
    fn absorb(&mut self, w: usize, x: usize) {
        self.deg[w] += self.deg[x] - 2;
        self.sets.unite(w, x);
    }

    fn absorb_path(&mut self, w: usize, mut head: Option<usize>) {
        while let Some(x) = head {
            self.absorb(w, x);
            head = self.path_next[x];
        }
    }

    /// Absorb everything on `w`'s path, leaving `w` alone on it.
    fn absorb_own_path(&mut self, w: usize) {
        let head = self.path_next[w].take();
        self.absorb_path(w, head);
    }

    /// Called when the DFS returns from `u` to its parent `w`.
    fn finish_child(&mut self, w: usize, u: usize) {
        self.nd[w] += self.nd[u];

        let mut u_path = Some(u);
        if self.deg[u] <= 2 {
            self.deg[w] += self.deg[u] - 2;
            // eject u
            u_path = if self.deg[u] == 1 {
                None
            } else {
                self.path_next[u]
            };
        }

        if self.low[w] <= self.low[u] {
            self.absorb_path(w, u_path);
        } else {
            self.low[w] = self.low[u];
            self.absorb_own_path(w);
            self.path_next[w] = u_path;
        }
    }

    /// Back edge from `w` up to its ancestor `u`.
    fn outgoing_back_edge(&mut self, w: usize, u: usize) {
        if self.pre[u] < self.low[w] {
            self.absorb_own_path(w);
            self.low[w] = self.pre[u];
        }
    }

    /// Back edge into `w` from its descendant `u`.
    fn incoming_back_edge(&mut self, w: usize, u: usize) {
        self.deg[w] -= 2;

        let mut head = self.path_next[w];
        while let Some(x) = head {
            if !self.is_ancestor(x, u) {
                break;
            }
            self.absorb(w, x);
            head = self.path_next[x];
        }
        self.path_next[w] = head;
    }
}

/// Partitions the vertices `0..vertex_count` into 3-edge-connected
/// components. Edges are identified by their index in `edges`.
///
/// Every set in the result is represented by its smallest vertex.
pub fn three_edge_connected(
    vertex_count: usize,
    edges: &[(usize, usize)],
) -> DisjointSets {
    let mut adj: Vec<Vec<(usize, usize)>> = vec![Vec::new(); vertex_count];
    for (ix, &(a, b)) in edges.iter().enumerate() {
        if a != b {
            adj[a].push((ix, b));
            adj[b].push((ix, a));
        }
    }

    let mut state = State::new(vertex_count);
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..vertex_count {
        if state.pre[root] != 0 {
            continue;
        }

        state.visit(root);
        stack.push(Frame {
            vertex: root,
            parent_edge: None,
            next: 0,
            child: None,
        });

        while let Some(frame) = stack.last_mut() {
            let w = frame.vertex;

            if let Some(u) = frame.child.take() {
                state.finish_child(w, u);
            }

            if frame.next == adj[w].len() {
                stack.pop();
                continue;
            }

            let (edge, u) = adj[w][frame.next];
            frame.next += 1;

            state.deg[w] += 1;

            if Some(edge) == frame.parent_edge {
                continue;
            }

            if state.pre[u] == 0 {
                frame.child = Some(u);
                state.visit(u);
                stack.push(Frame {
                    vertex: u,
                    parent_edge: Some(edge),
                    next: 0,
                    child: None,
                });
            } else if state.pre[u] < state.pre[w] {
                state.outgoing_back_edge(w, u);
            } else {
                state.incoming_back_edge(w, u);
            }
        }
    }

    state.sets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
        let sets = three_edge_connected(n, edges);
        (0..n).map(|i| sets.find_immut(i)).collect()
    }

    #[test]
    fn simple_cycle_is_not_merged() {
        let comps = components(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(comps, vec![0, 1, 2]);
    }

    #[test]
    fn parallel_edges() {
        assert_eq!(components(2, &[(0, 1), (0, 1)]), vec![0, 1]);
        assert_eq!(components(2, &[(0, 1), (1, 0), (0, 1)]), vec![0, 0]);
    }

    #[test]
    fn self_loops_are_ignored() {
        let comps = components(2, &[(0, 1), (0, 0), (1, 1), (1, 1), (0, 1)]);
        assert_eq!(comps, vec![0, 1]);
    }

    #[test]
    fn complete_graph_is_one_component() {
        let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        assert_eq!(components(4, &edges), vec![0, 0, 0, 0]);
    }

    #[test]
    fn theta_graph_merges_only_the_poles() {
        // three paths between 0 and 1, two of them through degree-2
        // vertices
        let edges = [(0, 2), (2, 1), (0, 3), (3, 1), (0, 1)];
        assert_eq!(components(4, &edges), vec![0, 0, 2, 3]);
    }

    #[test]
    fn bridges_separate_components() {
        // two triple-edge pairs joined by a bridge, plus an isolated
        // vertex
        let edges = [
            (0, 1),
            (0, 1),
            (1, 0),
            (1, 2),
            (3, 2),
            (2, 3),
            (3, 2),
        ];
        assert_eq!(components(5, &edges), vec![0, 0, 2, 2, 4]);
    }

    #[test]
    fn merge_winner_is_the_smallest_vertex() {
        // the DFS starts at 0, but 3-4-5 is only reached through 2
        let edges = [
            (0, 1),
            (1, 2),
            (2, 5),
            (5, 4),
            (4, 3),
            (3, 5),
            (5, 4),
            (4, 3),
            (3, 5),
        ];
        let comps = components(6, &edges);
        assert_eq!(comps, vec![0, 1, 2, 3, 3, 3]);
    }
}
