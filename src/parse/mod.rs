//! Parse phase: JSON → `DocumentNode` tree.

pub mod types;

pub use types::*;

use crate::error::{ConverterError, Phase};

/// Deserialize a design-node JSON string into a `DocumentNode` tree.
pub fn parse(json: &str) -> Result<DocumentNode, ConverterError> {
    serde_json::from_str::<DocumentNode>(json).map_err(|e| {
        ConverterError::new(Phase::Parse, "P001", format!("Failed to parse document node JSON: {}", e))
    })
}
