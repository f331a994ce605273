//! Product Handlers

use salvo::Request;
use serde_json::{Map, Value};

use crate::errors::TextError;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Read the request body as a JSON object, or `None` when the body is blank.
async fn json_object(req: &mut Request) -> Result<Option<Map<String, Value>>, TextError> {
    let payload = req
        .payload()
        .await
        .map_err(|error| TextError::bad_request(format!("Could not read request body: {error}")))?;

    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(fields)) => Ok(Some(fields)),
        Ok(_) => Err(TextError::bad_request("Request body must be a JSON object")),
        Err(error) => Err(TextError::bad_request(format!("Malformed JSON body: {error}"))),
    }
}
