/*!
Node sides, the two ends of a node in a bidirected graph.

A forward [`Handle`] enters its node through the left side (the
start, `is_end == false`) and leaves through the right side (the
end, `is_end == true`); a reverse handle does the opposite.
*/

use crate::handle::{Handle, NodeId};

/// One end of a node. Ordered lexicographically by `(node, is_end)`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeSide {
    pub node: NodeId,
    pub is_end: bool,
}

impl NodeSide {
    #[inline]
    pub fn new<T: Into<NodeId>>(node: T, is_end: bool) -> Self {
        NodeSide {
            node: node.into(),
            is_end,
        }
    }

    /// The side with node ID 0, used as the boundary of the
    /// synthetic root of a bubble tree.
    #[inline]
    pub fn null() -> Self {
        Default::default()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.node.is_zero()
    }

    /// The left side of a node.
    #[inline]
    pub fn start<T: Into<NodeId>>(node: T) -> Self {
        Self::new(node, false)
    }

    /// The right side of a node.
    #[inline]
    pub fn end<T: Into<NodeId>>(node: T) -> Self {
        Self::new(node, true)
    }

    /// The other side of the same node.
    #[inline]
    pub fn flip(self) -> Self {
        NodeSide {
            node: self.node,
            is_end: !self.is_end,
        }
    }

    /// The side a traversal leaves its node through.
    #[inline]
    pub fn leaving(handle: Handle) -> Self {
        Self::new(handle.id(), !handle.is_reverse())
    }

    /// The side a traversal enters its node through.
    #[inline]
    pub fn entering(handle: Handle) -> Self {
        Self::new(handle.id(), handle.is_reverse())
    }

    /// The traversal that leaves the node through this side.
    #[inline]
    pub fn outward(self) -> Handle {
        Handle::pack(self.node, !self.is_end)
    }

    /// The traversal that enters the node through this side.
    #[inline]
    pub fn inward(self) -> Handle {
        Handle::pack(self.node, self.is_end)
    }
}

impl std::fmt::Display for NodeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = if self.is_end { "end" } else { "start" };
        write!(f, "{}:{}", self.node, side)
    }
}
