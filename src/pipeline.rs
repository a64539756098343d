//! Full conversion pipeline: parse → classify → transform → validate.

use tracing::{debug, info, warn};

use crate::block::types::ModalBlock;
use crate::block::validate::validate_block;
use crate::classify::is_modal;
use crate::error::{ConverterError, Phase};
use crate::ids::IdGenerator;
use crate::parse;
use crate::transform::{self, ModalTransform};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Pretty-print the rendered JSON.
    pub pretty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions { pretty: true }
    }
}

#[derive(Debug)]
pub enum ConvertOutcome {
    /// The root node is not named as a modal; nothing was transformed.
    NotModal,
    Converted(ModalTransform),
    Failed(Vec<ConverterError>),
}

/// Run the whole pipeline on a design-node JSON document.
pub fn convert(json: &str, ids: &mut impl IdGenerator) -> ConvertOutcome {
    // 1. Parse
    let root = match parse::parse(json) {
        Ok(root) => root,
        Err(e) => return ConvertOutcome::Failed(vec![e]),
    };

    // 2. Classify
    if !is_modal(&root) {
        warn!(name = root.name_or_empty(), "node is not a modal, skipping");
        return ConvertOutcome::NotModal;
    }
    debug!(name = root.name_or_empty(), "transforming modal");

    // 3. Transform
    let converted = match transform::transform(&root, ids) {
        Ok(converted) => converted,
        Err(e) => return ConvertOutcome::Failed(vec![ConverterError::from(e)]),
    };

    // 4. Output validation
    let errors = validate_block(&converted.block);
    if !errors.is_empty() {
        return ConvertOutcome::Failed(errors.into_iter().map(ConverterError::from).collect());
    }

    let slots = converted
        .modal()
        .map(|b| b.component.slots.len())
        .unwrap_or(0);
    info!(modal_id = %converted.ids.modal_id, slots, "modal converted");

    ConvertOutcome::Converted(converted)
}

/// Serialize a converted record to JSON text.
pub fn render(block: &ModalBlock, options: &ConvertOptions) -> Result<String, ConverterError> {
    let rendered = if options.pretty {
        serde_json::to_string_pretty(block)
    } else {
        serde_json::to_string(block)
    };
    rendered.map_err(|e| {
        ConverterError::new(Phase::Render, "R001", format!("Failed to serialize modal block: {}", e))
    })
}
