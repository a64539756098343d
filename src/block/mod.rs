//! No-code block record: output types and invariant checks.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{BlockValidationError, validate_block};
