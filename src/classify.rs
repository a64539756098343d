//! Modal detection.

use crate::parse::types::DocumentNode;

const MODAL_MARKER: &str = "modal";

/// Returns true when the node's name contains "modal", ignoring case.
/// A node without a name is never a modal.
pub fn is_modal(node: &DocumentNode) -> bool {
    node.lowercase_name().contains(MODAL_MARKER)
}
