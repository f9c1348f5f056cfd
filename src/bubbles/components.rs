use std::collections::VecDeque;

use fnv::FnvHashMap;

use crate::{
    algorithms::sides_of,
    error::{Error, Result},
    handle::Handle,
    handlegraph::IntoNeighbors,
    nodeside::NodeSide,
};

/// Partition of all node sides into adjacency components: sets of
/// sides connected through undirected edges.
#[derive(Debug, Clone, Default)]
pub struct SideComponents {
    components: Vec<Vec<NodeSide>>,
    component_of: FnvHashMap<NodeSide, usize>,
}

impl SideComponents {
    /// Computes the components of every side of every node in
    /// `order`. Components are numbered in the order they are
    /// seeded; for each traversal in `order`, the side it enters
    /// through is seeded before the side it leaves through.
    pub fn new<G>(graph: G, order: &[Handle]) -> Result<Self>
    where
        G: IntoNeighbors + Copy,
    {
        let mut result = Self::default();
        let mut queue: VecDeque<NodeSide> = VecDeque::new();

        let seeds = order.iter().flat_map(|&handle| {
            let first = NodeSide::entering(handle);
            let second = NodeSide::leaving(handle);
            std::iter::once(first).chain(std::iter::once(second))
        });

        for seed in seeds {
            if result.component_of.contains_key(&seed) {
                continue;
            }

            let index = result.components.len();
            let mut members = vec![seed];
            result.component_of.insert(seed, index);
            queue.push_back(seed);

            while let Some(side) = queue.pop_front() {
                for other in sides_of(graph, side) {
                    match result.component_of.get(&other) {
                        Some(&found) if found != index => {
                            return Err(Error::SideConflict { side: other });
                        }
                        Some(_) => (),
                        None => {
                            result.component_of.insert(other, index);
                            members.push(other);
                            queue.push_back(other);
                        }
                    }
                }
            }

            result.components.push(members);
        }

        Ok(result)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The component that `side` belongs to.
    #[inline]
    pub fn component(&self, side: NodeSide) -> Result<usize> {
        self.component_of
            .get(&side)
            .copied()
            .ok_or(Error::MissingSide { side })
    }

    /// The members of a component, in the order they were reached.
    #[inline]
    pub fn members(&self, index: usize) -> &[NodeSide] {
        &self.components[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[NodeSide]> + '_ {
        self.components.iter().map(|c| c.as_slice())
    }
}
