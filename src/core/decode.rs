//! Purpose: Decode percent-encoded JSON object payloads without surfacing errors.
//! Exports: `decode`, `try_decode`.
//! Role: Entry point for callers handing over raw URL argument strings.
//! Invariants: `decode` is total; every failure collapses to an empty map.
//! Invariants: `try_decode` keeps "no data" (`Ok(None)`) distinct from "bad data" (`Err`).
//! Invariants: `+` decodes to a space, matching form-encoding conventions.

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;
use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};

/// Decodes a percent-encoded string and parses it as a JSON object.
///
/// Never fails: malformed escapes, invalid UTF-8, JSON syntax errors, and
/// non-object top-level values all yield an empty map, as does empty input.
/// Callers needing to tell those cases apart use [`try_decode`].
pub fn decode(input: &str) -> Map<String, Value> {
    match try_decode(input) {
        Ok(Some(object)) => object,
        Ok(None) => Map::new(),
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "discarding undecodable payload: {err}");
            Map::new()
        }
    }
}

/// Fully-diagnosable layer under [`decode`].
///
/// Returns `Ok(None)` when the decoded text is empty, `Ok(Some(map))` when it
/// parses to a JSON object, and `Err` with a kind identifying the failed stage
/// otherwise.
pub fn try_decode(input: &str) -> Result<Option<Map<String, Value>>, Error> {
    let text = percent_decode(input)?;
    if text.is_empty() {
        return Ok(None);
    }
    let value = parse::value_from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Syntax)
            .with_message("decoded text is not valid JSON")
            .with_source(err)
    })?;
    match value {
        Value::Object(object) => Ok(Some(object)),
        other => Err(Error::new(ErrorKind::NonObject).with_message(format!(
            "top-level JSON value is {}, not an object",
            value_name(&other)
        ))),
    }
}

fn percent_decode(input: &str) -> Result<String, Error> {
    check_escapes(input)?;
    // '+' cannot occur inside a well-formed escape, so the swap is safe here.
    let spaced = input.replace('+', " ");
    let text = percent_decode_str(&spaced).decode_utf8().map_err(|err| {
        Error::new(ErrorKind::Utf8)
            .with_message("percent-decoded bytes are not valid UTF-8")
            .with_source(err)
    })?;
    Ok(text.into_owned())
}

// `percent-encoding` passes malformed escapes through untouched; the decoder
// contract treats them as encoding failures, so reject them up front.
fn check_escapes(input: &str) -> Result<(), Error> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let complete = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !complete {
                return Err(Error::new(ErrorKind::Encoding)
                    .with_message("malformed percent-escape")
                    .with_offset(i as u64));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

fn value_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
