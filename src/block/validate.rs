//! Output record invariant validation.
//!
//! Checks that a converted `ModalBlock` is internally consistent before it is
//! handed to the rendering engine.

use std::collections::HashSet;

use crate::block::types::*;
use crate::ids::ROOT_PARENT_ID;

#[derive(Debug, Clone)]
pub struct BlockValidationError {
    pub code: &'static str,
    pub message: String,
    /// The block id where the error was found, if applicable.
    pub block_id: Option<String>,
}

impl std::fmt::Display for BlockValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.block_id {
            Some(id) => write!(f, "[{}] {} (at block '{}')", self.code, self.message, id),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Validate a converted modal record. Returns all errors found.
pub fn validate_block(record: &ModalBlock) -> Vec<BlockValidationError> {
    let mut errors = Vec::new();

    validate_single_block(record, &mut errors);
    for (key, block) in record.blocks() {
        validate_key_matches_id(key, block, &mut errors);
        validate_distinct_slot_ids(block, &mut errors);
        validate_root_parent(block, &mut errors);
    }

    errors
}

// ---------------------------------------------------------------------------
// B001: exactly one block
// ---------------------------------------------------------------------------

fn validate_single_block(record: &ModalBlock, errors: &mut Vec<BlockValidationError>) {
    if record.len() != 1 {
        errors.push(BlockValidationError {
            code: "B001",
            message: format!(
                "Modal record must contain exactly 1 block, found {}",
                record.len()
            ),
            block_id: None,
        });
    }
}

// ---------------------------------------------------------------------------
// B002: map key is the block's own id
// ---------------------------------------------------------------------------

fn validate_key_matches_id(
    key: &str,
    block: &BlockDefinition,
    errors: &mut Vec<BlockValidationError>,
) {
    if key != block.id {
        errors.push(BlockValidationError {
            code: "B002",
            message: format!("Block keyed '{}' declares id '{}'", key, block.id),
            block_id: Some(key.to_string()),
        });
    }
}

// ---------------------------------------------------------------------------
// B003: slot targets are distinct and never the modal itself
// ---------------------------------------------------------------------------

fn validate_distinct_slot_ids(block: &BlockDefinition, errors: &mut Vec<BlockValidationError>) {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(block.id.as_str());

    for (slot, config) in block.component.slots.iter() {
        if !seen.insert(config.block_id.as_str()) {
            errors.push(BlockValidationError {
                code: "B003",
                message: format!(
                    "Slot '{}' reuses block id '{}'",
                    slot, config.block_id
                ),
                block_id: Some(block.id.clone()),
            });
        }
    }
}

// ---------------------------------------------------------------------------
// B004: modal hangs off the page root
// ---------------------------------------------------------------------------

fn validate_root_parent(block: &BlockDefinition, errors: &mut Vec<BlockValidationError>) {
    if block.parent_id != ROOT_PARENT_ID {
        errors.push(BlockValidationError {
            code: "B004",
            message: format!(
                "Modal parent must be '{}', found '{}'",
                ROOT_PARENT_ID, block.parent_id
            ),
            block_id: Some(block.id.clone()),
        });
    }
}
