//! Blocking API client core for the vehicle service.
//!
//! # Overview
//! Wraps a single configured HTTP client around the vehicle REST API and
//! normalizes every failure into one displayable shape.
//!
//! # Design
//! - `HttpClient` splits each call into `build_request` (plain data),
//!   `execute` (the only network I/O) and `parse_response` (plain data), so
//!   request shaping and status handling are testable without a server.
//! - `ClientError` is the single failure type. `format_error` turns it into
//!   an `ApiError` for the terminal; nothing in this crate exits the process.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;
pub mod url;

pub use client::{HttpClient, JsonClient};
pub use config::{ClientConfig, DEFAULT_ADDRESS, DEFAULT_TIMEOUT};
pub use error::{display_error, format_error, render_error, write_error, ApiError, ClientError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Position, Vehicle, VehicleList};
pub use self::url::{join_segment, validate_url};
