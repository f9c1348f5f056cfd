/*!

`HashGraph` node definition

*/

use crate::handle::Handle;

/// A node and its edges. `right_edges` holds the handles that follow
/// the node's forward orientation, `left_edges` the handles that
/// follow its reverse orientation.
#[derive(Debug, Clone)]
pub struct Node {
    pub sequence: Vec<u8>,
    pub left_edges: Vec<Handle>,
    pub right_edges: Vec<Handle>,
}

impl Node {
    pub fn new(sequence: &[u8]) -> Node {
        Node {
            sequence: sequence.into(),
            left_edges: vec![],
            right_edges: vec![],
        }
    }

    /// The edge list used when leaving the node through the side
    /// that `handle` leaves through.
    #[inline]
    pub(super) fn edges_leaving(&self, handle: Handle) -> &Vec<Handle> {
        if handle.is_reverse() {
            &self.left_edges
        } else {
            &self.right_edges
        }
    }

    #[inline]
    pub(super) fn edges_leaving_mut(
        &mut self,
        handle: Handle,
    ) -> &mut Vec<Handle> {
        if handle.is_reverse() {
            &mut self.left_edges
        } else {
            &mut self.right_edges
        }
    }
}
