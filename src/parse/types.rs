//! Rust types mirroring the design-tool document node JSON.
//!
//! Only the attributes the modal transform reads are typed; everything else a
//! node carries is kept verbatim in `extra` so a parsed tree serializes back
//! without loss.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// DOCUMENT NODE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DocumentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    /// Container-level default gap between children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    /// Untyped attributes, preserved for round trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl DocumentNode {
    /// Node name, or the empty string when absent.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Lower-cased node name, used for all substring matching.
    pub fn lowercase_name(&self) -> String {
        self.name_or_empty().to_lowercase()
    }

    /// The child at `index`, if the node has a child list that long.
    pub fn child(&self, index: usize) -> Option<&DocumentNode> {
        self.children.as_ref()?.get(index)
    }

    pub fn width(&self) -> Option<f64> {
        self.absolute_bounding_box.as_ref()?.width
    }

    pub fn height(&self) -> Option<f64> {
        self.absolute_bounding_box.as_ref()?.height
    }
}
