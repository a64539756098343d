pub mod block;
pub mod classify;
pub mod error;
pub mod ids;
pub mod parse;
pub mod pipeline;
pub mod transform;
pub mod wasm;
