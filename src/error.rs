use crate::{handle::NodeId, nodeside::NodeSide};

/// Errors produced while decomposing a graph into bubbles.
///
/// [`Error::DanglingEdge`] is caused by malformed input; the other
/// variants mean an internal invariant of the decomposition broke,
/// and are reported instead of returning a silently wrong tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge {from} -> {to} refers to missing node {missing}")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    #[error("node side {side} was assigned to two adjacency components")]
    SideConflict { side: NodeSide },

    #[error("node side {side} is not in any adjacency component")]
    MissingSide { side: NodeSide },

    #[error("edge of node {edge} lies on more than one cycle after collapsing")]
    NotACactus { edge: NodeId },

    #[error("edge of node {edge} was lost while walking the cactus graph")]
    LostEdge { edge: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;
