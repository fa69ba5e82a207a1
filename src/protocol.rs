//! JSON-RPC envelope framing.
//!
//! The daemon speaks JSON-RPC 1.0 for maximum client compatibility,
//! borrowing the 1.1/2.0 conventions for the parts 1.0 left unspecified
//! (the shape of the `error` member). Requests are `method`/`params`/`id`
//! objects, replies are `result`/`error`/`id` with exactly one of
//! `result` and `error` non-null.
//!
//! Everything here works on [`serde_json::Value`]; method dispatch and
//! transport live elsewhere.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

pub const RPC_INVALID_REQUEST: i64 = -32600;
pub const RPC_METHOD_NOT_FOUND: i64 = -32601;
pub const RPC_INVALID_PARAMS: i64 = -32602;
pub const RPC_INTERNAL_ERROR: i64 = -32603;
pub const RPC_PARSE_ERROR: i64 = -32700;
/// General application error not covered by a specific code.
pub const RPC_MISC_ERROR: i64 = -1;

/// Violations of the batch-reply framing. Fatal to the batch, not the
/// connection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Batch must be an array")]
    NotArray,
    #[error("Batch member must be an object")]
    MemberNotObject,
    #[error("Batch member id must be a non-negative integer")]
    InvalidId,
    #[error("Batch member id {id} larger than size {len}")]
    IdOutOfRange { id: u64, len: usize },
    #[error("Duplicate batch member id {0}")]
    DuplicateId(u64),
}

/// The `error` member of a failed reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    /// Pull the error payload out of a reply object. `None` when the
    /// reply succeeded or carries no well-formed error.
    pub fn from_reply(reply: &Value) -> Option<RpcError> {
        let error = reply.get("error")?;
        if error.is_null() {
            return None;
        }
        serde_json::from_value(error.clone()).ok()
    }
}

pub fn request_obj(method: &str, params: Value, id: Value) -> Value {
    json!({
        "method": method,
        "params": params,
        "id": id,
    })
}

/// Build a reply object. A non-null `error` wins: the `result` member is
/// forced to null no matter what was passed.
pub fn reply_obj(result: Value, error: Value, id: Value) -> Value {
    let result = if error.is_null() { result } else { Value::Null };
    json!({
        "result": result,
        "error": error,
        "id": id,
    })
}

/// A serialized reply plus the newline that terminates one message on
/// the wire.
pub fn reply_text(result: Value, error: Value, id: Value) -> String {
    let mut text = reply_obj(result, error, id).to_string();
    text.push('\n');
    text
}

pub fn error_obj(code: i64, message: &str) -> Value {
    json!({
        "code": code,
        "message": message,
    })
}

/// Re-order a batch reply into request order.
///
/// Clients index batch requests with ids `0..len`; servers may answer in
/// any order. The result vector is addressed by id, with null entries
/// for requests the server never answered. Each id must be a
/// non-negative integer below `len`, and no id may appear twice.
pub fn process_batch_reply(input: &Value, len: usize) -> Result<Vec<Value>, ProtocolError> {
    let records = input.as_array().ok_or(ProtocolError::NotArray)?;
    let mut batch = vec![Value::Null; len];
    for rec in records {
        if !rec.is_object() {
            return Err(ProtocolError::MemberNotObject);
        }
        let id = rec
            .get("id")
            .and_then(Value::as_u64)
            .ok_or(ProtocolError::InvalidId)?;
        if id >= len as u64 {
            return Err(ProtocolError::IdOutOfRange { id, len });
        }
        let slot = id as usize;
        // members are objects, so a filled slot is never null
        if !batch[slot].is_null() {
            return Err(ProtocolError::DuplicateId(id));
        }
        batch[slot] = rec.clone();
    }
    Ok(batch)
}
