//! Purpose: Fail-safe decoding of percent-encoded JSON object payloads.
//! Exports: `core` (decoder entry points and error modeling).
//! Role: Library backing callers that receive JSON arguments inside URL fragments.
//! Invariants: The public `decode` entry point is total; only `try_decode` surfaces errors.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod core;
pub(crate) mod json;

pub use crate::core::decode::{decode, try_decode};
pub use crate::core::error::{Error, ErrorKind};
