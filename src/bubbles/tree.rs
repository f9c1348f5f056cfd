use std::collections::BTreeMap;

use crate::{handle::NodeId, nodeside::NodeSide};

use super::extract::ChainMember;

/// A region of the graph bounded by two node sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub start: NodeSide,
    pub end: NodeSide,
    /// IDs of the nodes strictly inside the bubble, sorted.
    pub contents: Vec<NodeId>,
    /// Where each chain of this bubble's children starts in its
    /// list of children.
    pub chain_offsets: Vec<usize>,
    /// `true` if the interior of the bubble has no directed cycles.
    pub dag: bool,
}

impl Bubble {
    pub fn new(start: NodeSide, end: NodeSide) -> Self {
        Self {
            start,
            end,
            contents: Vec::new(),
            chain_offsets: Vec::new(),
            dag: true,
        }
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    bubble: Bubble,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// The nested bubbles of a graph, stored in an arena.
///
/// Index [`BubbleTree::ROOT`] holds a synthetic root bubble, with the
/// null node side as both boundaries and no contents, whose children
/// are the top level chains. The children of any bubble are stored
/// chain by chain, with `chain_offsets` marking where each chain
/// starts.
#[derive(Debug, Clone)]
pub struct BubbleTree {
    nodes: Vec<TreeNode>,
}

impl Default for BubbleTree {
    fn default() -> Self {
        let root = TreeNode {
            bubble: Bubble::new(NodeSide::null(), NodeSide::null()),
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }
}

impl BubbleTree {
    pub const ROOT: usize = 0;

    pub(crate) fn from_chains(chains: Vec<Vec<ChainMember>>) -> Self {
        let mut tree = Self::default();

        let mut stack = vec![(Self::ROOT, chains)];

        while let Some((parent, chains)) = stack.pop() {
            for chain in chains {
                let offset = tree.nodes[parent].children.len();
                tree.nodes[parent].bubble.chain_offsets.push(offset);

                for member in chain {
                    let ix = tree.nodes.len();
                    tree.nodes.push(TreeNode {
                        bubble: Bubble::new(member.start, member.end),
                        parent: Some(parent),
                        children: Vec::new(),
                    });
                    tree.nodes[parent].children.push(ix);

                    if !member.chains.is_empty() {
                        stack.push((ix, member.chains));
                    }
                }
            }
        }

        tree
    }

    /// The number of bubbles in the tree, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no bubbles besides the root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    #[inline]
    pub fn bubble(&self, ix: usize) -> &Bubble {
        &self.nodes[ix].bubble
    }

    #[inline]
    pub(crate) fn bubble_mut(&mut self, ix: usize) -> &mut Bubble {
        &mut self.nodes[ix].bubble
    }

    #[inline]
    pub fn parent(&self, ix: usize) -> Option<usize> {
        self.nodes[ix].parent
    }

    #[inline]
    pub fn children(&self, ix: usize) -> &[usize] {
        &self.nodes[ix].children
    }

    /// The children of a bubble, split into their chains.
    pub fn chains(&self, ix: usize) -> Vec<&[usize]> {
        let node = &self.nodes[ix];
        let offsets = &node.bubble.chain_offsets;

        offsets
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = offsets
                    .get(i + 1)
                    .copied()
                    .unwrap_or_else(|| node.children.len());
                &node.children[start..end]
            })
            .collect()
    }

    /// All bubble indices in preorder, starting with the root;
    /// children are visited in order.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(ix) = stack.pop() {
            order.push(ix);
            stack.extend(self.nodes[ix].children.iter().rev());
        }
        order
    }

    /// The non-root bubbles with their indices, in preorder.
    pub fn bubbles(&self) -> impl Iterator<Item = (usize, &Bubble)> + '_ {
        self.preorder()
            .into_iter()
            .skip(1)
            .map(move |ix| (ix, &self.nodes[ix].bubble))
    }

    /// The number of bubbles between `ix` and the root, so the top
    /// level bubbles have depth 1.
    pub fn depth_of(&self, mut ix: usize) -> usize {
        let mut depth = 0;
        while let Some(parent) = self.nodes[ix].parent {
            depth += 1;
            ix = parent;
        }
        depth
    }

    /// The depth of the deepest bubble; 0 for a tree with only the
    /// root.
    pub fn depth(&self) -> usize {
        (0..self.nodes.len())
            .map(|ix| self.depth_of(ix))
            .max()
            .unwrap_or(0)
    }

    /// Maps the boundary node IDs of each non-root bubble to its
    /// contents. When two bubbles share boundary nodes, the one
    /// later in preorder wins.
    pub fn flatten(&self) -> BTreeMap<(NodeId, NodeId), Vec<NodeId>> {
        self.bubbles()
            .map(|(_, b)| ((b.start.node, b.end.node), b.contents.clone()))
            .collect()
    }
}
