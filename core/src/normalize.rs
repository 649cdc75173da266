//! Content-type-aware decoding of successful responses.
//!
//! Every response that passes the status check is reduced to one of three
//! shapes regardless of what the backend declared: nothing (204), parsed
//! JSON, or raw text.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// The uniform result of the request helper.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// 204 No Content.
    Null,
    /// A body served as `application/json`.
    Json(Value),
    /// Any other body, verbatim.
    Text(String),
}

impl Normalized {
    fn kind(&self) -> &'static str {
        match self {
            Normalized::Null => "no content",
            Normalized::Json(_) => "json",
            Normalized::Text(_) => "text",
        }
    }

    /// Decode a JSON body into `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Normalized::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
            }
            other => Err(ApiError::UnexpectedBody {
                expected: "json",
                found: other.kind(),
            }),
        }
    }
}

/// Check the status and decode the body of `response`.
///
/// Non-2xx statuses become `ApiError::Status`. A 204 is `Null` whatever its
/// headers say; otherwise an `application/json` content type selects JSON
/// and everything else is returned as text.
pub fn normalize(response: HttpResponse) -> Result<Normalized, ApiError> {
    if !response.is_success() {
        return Err(status_error(&response));
    }
    if response.status == 204 {
        return Ok(Normalized::Null);
    }
    let is_json = response
        .content_type()
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
    if !is_json {
        return Ok(Normalized::Text(response.body));
    }
    serde_json::from_str(&response.body)
        .map(Normalized::Json)
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Build the `Status` error for a failed response, lifting the backend's
/// `{"error": "..."}` message out of the body when there is one.
fn status_error(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string));
    ApiError::Status {
        status: response.status,
        status_text: response.status_text.clone(),
        message,
    }
}
