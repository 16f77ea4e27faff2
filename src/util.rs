use crate::node::NodeId;

/// Outcome of unlinking a key from a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteResult {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// A node was released. `parent` is the node it hung from, which is where any fix-up walk
    /// towards the root has to start.
    Deleted { parent: Option<NodeId> },
}
