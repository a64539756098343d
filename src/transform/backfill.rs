//! Padding back-fill for partially specified modals.
//!
//! When a modal body lacks one of its sections, the remaining children take
//! their spacing from the containers around them. Two passes, in order:
//!
//! 1. Every child after the first gets `paddingTop = body.itemSpacing`.
//! 2. The first child gets the component's `paddingTop`, the last child its
//!    `paddingBottom`, and every child its `paddingLeft`/`paddingRight`.
//!
//! Only declared values are copied; an absent container value leaves the child
//! untouched.

use crate::parse::types::DocumentNode;

/// A body with at least this many children has every section and is left as is.
pub const COMPLETE_BODY_LEN: usize = 3;

pub fn needs_backfill(children: &[DocumentNode]) -> bool {
    children.len() < COMPLETE_BODY_LEN
}

/// Apply both passes to `children`. `body` is the container holding the
/// children, `component` the modal component holding `body`.
pub fn backfill_padding(children: &mut [DocumentNode], body: &DocumentNode, component: &DocumentNode) {
    apply_item_spacing(children, body.item_spacing);
    apply_component_padding(children, component);
}

fn apply_item_spacing(children: &mut [DocumentNode], item_spacing: Option<f64>) {
    let Some(spacing) = item_spacing else { return };
    for child in children.iter_mut().skip(1) {
        child.padding_top = Some(spacing);
    }
}

fn apply_component_padding(children: &mut [DocumentNode], component: &DocumentNode) {
    let last = children.len().saturating_sub(1);
    for (idx, child) in children.iter_mut().enumerate() {
        if idx == 0 && component.padding_top.is_some() {
            child.padding_top = component.padding_top;
        }
        if idx == last && component.padding_bottom.is_some() {
            child.padding_bottom = component.padding_bottom;
        }
        if component.padding_left.is_some() {
            child.padding_left = component.padding_left;
        }
        if component.padding_right.is_some() {
            child.padding_right = component.padding_right;
        }
    }
}
