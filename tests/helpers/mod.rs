#![allow(dead_code)]

use converter::parse::{BoundingBox, DocumentNode};

// =============================================================================
// Node builders
// =============================================================================

pub fn node(name: &str) -> DocumentNode {
    DocumentNode {
        name: Some(name.into()),
        ..Default::default()
    }
}

pub fn with_children(mut parent: DocumentNode, children: Vec<DocumentNode>) -> DocumentNode {
    parent.children = Some(children);
    parent
}

pub fn sized(mut n: DocumentNode, width: f64, height: f64) -> DocumentNode {
    n.absolute_bounding_box = Some(BoundingBox {
        x: Some(0.0),
        y: Some(0.0),
        width: Some(width),
        height: Some(height),
    });
    n
}

/// Wrap `component` → `body` → `children` in the two outer frames the
/// transform expects above a modal component.
pub fn modal_tree(
    component: DocumentNode,
    body: DocumentNode,
    children: Vec<DocumentNode>,
) -> DocumentNode {
    let body = with_children(body, children);
    let component = with_children(component, vec![body]);
    let frame = with_children(node("Frame"), vec![component]);
    with_children(node("Modal Root"), vec![frame])
}

/// Modal tree with bare component and body nodes.
pub fn simple_modal(children: Vec<DocumentNode>) -> DocumentNode {
    modal_tree(node("Modal"), node("Body"), children)
}

/// The body children of a tree built by `modal_tree`.
pub fn body_children(root: &DocumentNode) -> &[DocumentNode] {
    root.child(0)
        .and_then(|n| n.child(0))
        .and_then(|n| n.child(0))
        .and_then(|n| n.children.as_deref())
        .unwrap_or(&[])
}
