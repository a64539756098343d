//! Output record consumed by the no-code rendering engine.
//!
//! A converted modal is a map from generated block id to block definition.
//! Field names serialize in camelCase to match the engine's page schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// FIXED VALUES
// =============================================================================

pub const MODAL_DISPLAY_NAME: &str = "Modal";
pub const MODAL_VARIANT: &str = "card";
pub const BORDER_COLOR: &str = "border-transparent";

// =============================================================================
// TOP-LEVEL RECORD
// =============================================================================

/// Block id → block definition. A converted modal holds exactly one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalBlock(pub BTreeMap<String, BlockDefinition>);

impl ModalBlock {
    pub fn single(block: BlockDefinition) -> Self {
        let mut blocks = BTreeMap::new();
        blocks.insert(block.id.clone(), block);
        ModalBlock(blocks)
    }

    pub fn get(&self, id: &str) -> Option<&BlockDefinition> {
        self.0.get(id)
    }

    pub fn blocks(&self) -> impl Iterator<Item = (&String, &BlockDefinition)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDefinition {
    pub id: String,
    /// Ids of blocks this block depends on.
    pub dp_on: Vec<String>,
    pub display_name: String,
    pub data_source_ids: Vec<String>,
    pub parent_id: String,
    pub visibility: Visibility,
    pub component: ModalComponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub value: bool,
}

// =============================================================================
// COMPONENT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    Modal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalComponent {
    pub component_type: ComponentType,
    pub slots: Slots,
    pub content: ModalContent,
    pub appearance: Appearance,
}

/// Named attachment points. A slot is present only when the matching section
/// was found in the source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<SlotConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<SlotConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<SlotConfig>,
}

impl Slots {
    /// Present slots in header, body, footer order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SlotConfig)> {
        [
            ("header", self.header.as_ref()),
            ("body", self.body.as_ref()),
            ("footer", self.footer.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, slot)| slot.map(|s| (name, s)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfig {
    pub block_id: String,
    pub wrapped_in_layout: bool,
}

impl SlotConfig {
    pub fn wrapped(block_id: impl Into<String>) -> Self {
        SlotConfig {
            block_id: block_id.into(),
            wrapped_in_layout: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalContent {
    pub hide_on_escape: bool,
    pub variant: String,
    pub page_id: String,
    pub hide_on_click_outside: bool,
}

impl Default for ModalContent {
    fn default() -> Self {
        ModalContent {
            hide_on_escape: true,
            variant: MODAL_VARIANT.to_string(),
            page_id: String::new(),
            hide_on_click_outside: true,
        }
    }
}

// =============================================================================
// APPEARANCE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub width: CustomSize,
    pub height: CustomSize,
    pub styles: Styles,
}

/// A size given as a CSS length, e.g. `"120px"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSize {
    pub custom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    pub border_color: String,
    pub border_radius: BorderRadius,
}

/// Border radius as a design token, e.g. `"rounded-xs"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub all: String,
}
