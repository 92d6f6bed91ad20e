//! Conversion orchestrator.
//!
//! [`convert`] runs one of the four directional pipelines and always returns
//! a displayable string: the converted output, an empty string for blank
//! input, or one of the fixed sentinel strings when a stage fails. Errors
//! from lower layers never cross this boundary.

use std::panic::{self, AssertUnwindSafe};

use msgpack_bridge_codec::msgpack;

use crate::json;
use crate::options::{ConvertMode, ConvertOptions};
use crate::session::Ticket;
use crate::transcode;

/// Shown when the input is not valid Base64.
pub const INVALID_BASE64: &str = "Invalid Base64";
/// Shown when the input is not valid hex.
pub const INVALID_HEX: &str = "Invalid Hex";
/// Shown when decoded bytes are not a well-formed MessagePack document.
pub const INVALID_MSGPACK: &str = "Invalid MessagePack";
/// Shown when the input is not parseable JSON.
pub const INVALID_JSON: &str = "Invalid JSON";
/// Shown for any unanticipated pipeline failure.
pub const CONVERSION_FAILED: &str = "Conversion failed";

/// Smart-paste tag for JSON-looking text.
pub const DATA_TYPE_JSON: &str = "json";
/// Smart-paste tag for Base64-looking text.
pub const DATA_TYPE_BASE64: &str = "base64text";

/// Converts `input` in the direction given by `mode`.
///
/// Blank input yields an empty string so a cleared editor clears the other
/// pane instead of flashing an error. Panics anywhere in the pipeline are
/// contained and reported as [`CONVERSION_FAILED`].
pub fn convert(input: &str, mode: ConvertMode, options: ConvertOptions) -> String {
    convert_cancellable(input, mode, options, None).unwrap_or_default()
}

/// [`convert`] with cooperative cancellation. Returns `None` when `ticket`
/// reports the request superseded at a stage boundary; the caller then
/// discards the work without touching its output slot.
pub fn convert_cancellable(
    input: &str,
    mode: ConvertMode,
    options: ConvertOptions,
    ticket: Option<&Ticket>,
) -> Option<String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        run_pipeline(input, mode, options, ticket)
    }));
    match result {
        Ok(output) => output,
        Err(_) => {
            log::error!("conversion panicked, mode: {:?}", mode);
            Some(CONVERSION_FAILED.to_string())
        }
    }
}

fn run_pipeline(
    input: &str,
    mode: ConvertMode,
    options: ConvertOptions,
    ticket: Option<&Ticket>,
) -> Option<String> {
    if input.trim().is_empty() {
        return Some(String::new());
    }
    if superseded(ticket) {
        return None;
    }
    let output = match mode {
        ConvertMode::MsgpackBase64ToJson => {
            let bytes = match transcode::decode_base64(input) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::warn!("base64 decode failed: {err}");
                    return Some(INVALID_BASE64.to_string());
                }
            };
            msgpack_to_json(&bytes, options, ticket)?
        }
        ConvertMode::MsgpackHexToJson => {
            let bytes = match transcode::decode_hex(input) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::warn!("hex decode failed: {err}");
                    return Some(INVALID_HEX.to_string());
                }
            };
            msgpack_to_json(&bytes, options, ticket)?
        }
        ConvertMode::JsonToMsgpackBase64 => {
            let blob = json_to_msgpack(input, ticket)?;
            match blob {
                Ok(blob) => transcode::encode_base64(&blob),
                Err(sentinel) => sentinel,
            }
        }
        ConvertMode::JsonToMsgpackHex => {
            let blob = json_to_msgpack(input, ticket)?;
            match blob {
                Ok(blob) => transcode::encode_hex(&blob, options.hex_separator),
                Err(sentinel) => sentinel,
            }
        }
    };
    if superseded(ticket) {
        return None;
    }
    Some(output)
}

fn msgpack_to_json(bytes: &[u8], options: ConvertOptions, ticket: Option<&Ticket>) -> Option<String> {
    let value = match msgpack::decode(bytes) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("msgpack decode failed: {err}");
            return Some(INVALID_MSGPACK.to_string());
        }
    };
    if superseded(ticket) {
        return None;
    }
    Some(json::render(&value, options.indent))
}

fn json_to_msgpack(input: &str, ticket: Option<&Ticket>) -> Option<Result<Vec<u8>, String>> {
    let value = match json::parse(input) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("json parse failed: {err}");
            return Some(Err(INVALID_JSON.to_string()));
        }
    };
    if superseded(ticket) {
        return None;
    }
    Some(Ok(msgpack::encode(&value)))
}

fn superseded(ticket: Option<&Ticket>) -> bool {
    ticket.map(Ticket::is_superseded).unwrap_or(false)
}

/// Classifies pasted text so a host editor can route it to the matching
/// input pane. Text that parses as JSON goes to the JSON side; valid
/// Base64 goes to the MessagePack side; anything else is unclaimed.
/// Returns the selected mode and the text to pre-fill; no conversion runs.
pub fn accept(data_type: &str, payload: &str) -> Option<(ConvertMode, String)> {
    match data_type {
        DATA_TYPE_JSON if json::parse(payload).is_ok() => {
            Some((ConvertMode::JsonToMsgpackBase64, payload.to_string()))
        }
        DATA_TYPE_BASE64
            if !payload.trim().is_empty() && transcode::decode_base64(payload).is_ok() =>
        {
            Some((ConvertMode::MsgpackBase64ToJson, payload.trim().to_string()))
        }
        _ => None,
    }
}
