//! Error types and terminal formatting for the vehicle API client.
//!
//! # Design
//! `ClientError` records how far a call got before failing: the server
//! answered with an error status, the request went out but nothing came back,
//! the request could not be built, or something else broke. `format_error`
//! reduces every variant to one `ApiError` so the terminal output has a single
//! shape regardless of the cause.

use std::io::{self, Write};

use serde_json::Value;
use thiserror::Error;

const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check if the server is running.";
const UNKNOWN_MESSAGE: &str = "An unknown error occurred";

/// Errors returned by `HttpClient` calls and response decoding.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status. `body` is the decoded JSON,
    /// or the raw text as a JSON string when it was not JSON.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Value },

    /// The request was sent but no response arrived (refused, timed out,
    /// unresolvable host, dropped connection).
    #[error("{0}")]
    NoResponse(String),

    /// The request could not be constructed, e.g. a malformed URL.
    #[error("{0}")]
    Setup(String),

    #[error("{0}")]
    Generic(String),

    /// A payload of a shape nobody expected.
    #[error("unrecognized payload: {0}")]
    Unknown(Value),
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match &err {
            ureq::Error::StatusCode(status) => ClientError::Status {
                status: *status,
                body: Value::String(String::new()),
            },
            ureq::Error::BadUri(_) | ureq::Error::Http(_) => ClientError::Setup(err.to_string()),
            _ => ClientError::NoResponse(err.to_string()),
        }
    }
}

/// Display-ready description of a failed call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
    pub details: Option<Value>,
}

/// Normalize any client failure into an `ApiError`.
pub fn format_error(err: &ClientError) -> ApiError {
    match err {
        ClientError::Status { status, body } => ApiError {
            message: server_message(body).unwrap_or_else(|| err.to_string()),
            status_code: Some(*status),
            details: Some(body.clone()),
        },
        ClientError::NoResponse(cause) => ApiError {
            message: NO_RESPONSE_MESSAGE.to_string(),
            status_code: None,
            details: Some(Value::String(cause.clone())),
        },
        ClientError::Setup(message) | ClientError::Generic(message) => ApiError {
            message: message.clone(),
            status_code: None,
            details: None,
        },
        ClientError::Unknown(raw) => ApiError {
            message: UNKNOWN_MESSAGE.to_string(),
            status_code: None,
            details: Some(raw.clone()),
        },
    }
}

/// `message` of an object body, strings verbatim and anything else as JSON text.
fn server_message(body: &Value) -> Option<String> {
    match body.as_object()?.get("message")? {
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// The exact text written to the error stream for `error`.
///
/// Details are only shown when they are structured; a plain string detail,
/// such as the transport cause of a `NoResponse`, is left out.
pub fn render_error(error: &ApiError) -> String {
    let mut out = format!("\nError: {}\n", error.message);
    if let Some(status) = error.status_code {
        out.push_str(&format!("   Status Code: {status}\n"));
    }
    if let Some(details) = error.details.as_ref().filter(|d| d.is_object() || d.is_array()) {
        let pretty = serde_json::to_string_pretty(details).unwrap_or_else(|_| details.to_string());
        out.push_str(&format!("   Details: {pretty}\n"));
    }
    out.push('\n');
    out
}

/// Format `err` and write it to `writer`. Write failures are dropped: there
/// is nowhere left to report them.
pub fn write_error<W: Write + ?Sized>(writer: &mut W, err: &ClientError) {
    let rendered = render_error(&format_error(err));
    let _ = writer.write_all(rendered.as_bytes());
    let _ = writer.flush();
}

/// Format `err` and write it to stderr.
pub fn display_error(err: &ClientError) {
    write_error(&mut io::stderr().lock(), err);
}
