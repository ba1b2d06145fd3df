//! Purpose: Internal JSON parsing boundary for the decoder.
//! Exports: `parse` module with the runtime decode helper.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: Runtime JSON decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
