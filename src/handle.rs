use std::cmp::Ordering;
use std::ops::Add;

/// Newtype that represents a node in the graph, no matter the
/// graph implementation. ID 0 is never a real node.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    #[inline]
    fn from(num: u64) -> Self {
        NodeId(num)
    }
}

impl From<i32> for NodeId {
    #[inline]
    fn from(num: i32) -> Self {
        NodeId(num as u64)
    }
}

impl From<NodeId> for u64 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl Add<u64> for NodeId {
    type Output = Self;

    #[inline]
    fn add(self, other: u64) -> Self {
        NodeId(self.0 + other)
    }
}

/// A node ID with an orientation, packed as a single u64 with the
/// orientation in the lowest bit.
///
/// A handle doubles as a directed traversal of its node: a forward
/// handle enters through the left side and leaves through the right,
/// a reverse handle the other way around.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Hash, Eq, Ord)]
#[repr(transparent)]
pub struct Handle(pub u64);

impl Handle {
    #[inline]
    pub const fn from_integer(i: u64) -> Self {
        Handle(i)
    }

    #[inline]
    pub fn as_integer(self) -> u64 {
        self.0
    }

    /// Panics if the ID uses the highest bit, as it wouldn't survive
    /// packing.
    #[inline]
    pub fn pack<T: Into<NodeId>>(id: T, is_reverse: bool) -> Handle {
        let id: NodeId = id.into();
        let uint = id.0;
        if uint < (0x1 << 63) {
            Handle::from_integer((uint << 1) | is_reverse as u64)
        } else {
            panic!(
                "Tried to create a handle with a node ID that filled 64 bits"
            )
        }
    }

    #[inline]
    pub fn id(self) -> NodeId {
        NodeId(self.0 >> 1)
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.0 & 1 != 0
    }

    /// The same node, traversed in the other direction.
    #[inline]
    pub fn flip(self) -> Self {
        Handle(self.0 ^ 1)
    }

    #[inline]
    pub fn forward(self) -> Self {
        Handle(self.0 & !1)
    }
}

/// An edge from the first handle to the second. The same edge can
/// be written as `Edge(a, b)` or `Edge(b.flip(), a.flip())`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Hash, Eq, Ord)]
pub struct Edge(pub Handle, pub Handle);

impl Edge {
    /// Construct an edge in its canonical form, the smaller of the
    /// two ways of writing it.
    #[inline]
    pub fn edge_handle(left: Handle, right: Handle) -> Edge {
        let flipped_right = right.flip();
        let flipped_left = left.flip();

        match left.cmp(&flipped_right) {
            Ordering::Greater => Edge(flipped_right, flipped_left),
            Ordering::Equal => {
                if right > flipped_left {
                    Edge(flipped_right, flipped_left)
                } else {
                    Edge(left, right)
                }
            }
            Ordering::Less => Edge(left, right),
        }
    }
}

/// Which end of a handle to look at for neighbors; `Right` gives the
/// successors of the traversal, `Left` its predecessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_keeps_id_and_orientation() {
        let u: u64 = 597283742;
        let h = Handle::pack(u, true);
        assert_eq!(h.id(), NodeId(u));
        assert!(h.is_reverse());
        assert_eq!(h.as_integer(), (u << 1) | 1);
    }

    #[test]
    #[should_panic]
    fn handle_pack_panic() {
        Handle::pack(NodeId(std::u64::MAX), true);
    }

    #[test]
    fn handle_flip() {
        let h1 = Handle::pack(597283742u64, true);
        let h2 = h1.flip();

        assert_eq!(h1.id(), h2.id());
        assert!(!h2.is_reverse());
        assert_eq!(h2.forward(), h2);
        assert_eq!(h1.forward(), h2);
        assert_eq!(h2.flip(), h1);
    }

    #[test]
    fn edge_handle_is_canonical() {
        let h1 = Handle::pack(1u64, false);
        let h2 = Handle::pack(2u64, false);

        // 1+ -> 2+ is the same edge as 2- -> 1-
        let a = Edge::edge_handle(h1, h2);
        let b = Edge::edge_handle(h2.flip(), h1.flip());
        assert_eq!(a, b);
        assert_eq!(a, Edge(h1, h2));

        // a reversing self-loop is its own reverse
        let loop_edge = Edge::edge_handle(h1, h1.flip());
        assert_eq!(loop_edge, Edge(h1, h1.flip()));
    }
}
