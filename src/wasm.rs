//! WASM entry points for browser use.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::block::types::ModalBlock;
use crate::error::ConverterError;
use crate::ids::RandomIds;
use crate::pipeline::{self, ConvertOutcome};

/// Classify a design-node JSON document. Unparseable input is not a modal.
#[wasm_bindgen]
pub fn is_modal_node(json: &str) -> bool {
    crate::parse::parse(json)
        .map(|node| crate::classify::is_modal(&node))
        .unwrap_or(false)
}

/// Full pipeline: parse → classify → transform → validate.
/// Returns a JSON object tagged by `status`: `success` (with `block`),
/// `notModal`, or `errors`.
#[wasm_bindgen]
pub fn convert_modal(json: &str) -> JsValue {
    let result = convert_modal_inner(json);
    // The block record is keyed by id, so maps must become plain objects.
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn convert_modal_inner(json: &str) -> ConvertResult {
    match pipeline::convert(json, &mut RandomIds::new()) {
        ConvertOutcome::NotModal => ConvertResult::NotModal,
        ConvertOutcome::Converted(converted) => ConvertResult::Success {
            block: converted.block,
        },
        ConvertOutcome::Failed(errors) => ConvertResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    node_name: Option<String>,
    block_id: Option<String>,
}

impl From<ConverterError> for ErrorDto {
    fn from(e: ConverterError) -> Self {
        ErrorDto {
            code: e.code.to_string(),
            phase: e.phase.to_string(),
            node_name: e.node_name().map(String::from),
            block_id: e.block_id().map(String::from),
            message: e.message,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ConvertResult {
    #[serde(rename = "success")]
    Success { block: ModalBlock },
    #[serde(rename = "notModal")]
    NotModal,
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
