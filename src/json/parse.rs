//! Purpose: Provide the internal runtime JSON decode entrypoint.
//! Exports: `value_from_str`.
//! Role: Parser boundary that centralizes simd-json usage details.
//! Invariants: Input buffers are copied once to satisfy simd-json's mutable-slice API.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde_json::Value;

pub(crate) fn value_from_str(input: &str) -> Result<Value, simd_json::Error> {
    let mut bytes = input.as_bytes().to_vec();
    simd_json::serde::from_slice(&mut bytes)
}
