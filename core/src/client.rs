//! Blocking JSON client bound to one base URL.
//!
//! # Design
//! `HttpClient` holds an immutable `ClientConfig` and a ureq agent built from
//! it. Every verb goes through the same three steps: `build_request` produces
//! an `HttpRequest`, `execute` performs the round-trip, and `parse_response`
//! turns the `HttpResponse` into a JSON payload or a `ClientError`. Only
//! `execute` does I/O. Errors are returned as they happened; turning them into
//! terminal output is `error::format_error`'s job.

use serde_json::Value;
use tracing::{debug, trace};
use ureq::{Agent, RequestBuilder};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// The four JSON verbs command handlers rely on.
///
/// Paths are relative to the client's base URL and start with `/`.
pub trait JsonClient {
    /// Body of a successful response, `Value::Null` when it was empty.
    fn get(&self, path: &str) -> Result<Value, ClientError>;

    fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError>;

    fn put(&self, path: &str, body: &Value) -> Result<Value, ClientError>;

    /// Body of a successful response, if the server sent one.
    fn delete(&self, path: &str) -> Result<Option<Value>, ClientError>;
}

/// Synchronous client for the vehicle API. One request in flight at a time.
#[derive(Clone)]
pub struct HttpClient {
    config: ClientConfig,
    agent: Agent,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { config, agent }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_request(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url),
            headers: self.config.headers.clone(),
            body: body.map(Value::to_string),
        }
    }

    /// Perform the round-trip. Any status comes back as data; only transport
    /// failures are errors here.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let body = body.unwrap_or_default();

        let result = match method {
            HttpMethod::Get => with_headers(self.agent.get(&url), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&url), &headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(&url), &headers).send(body.as_bytes()),
            HttpMethod::Put => with_headers(self.agent.put(&url), &headers).send(body.as_bytes()),
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Generic(e.to_string()))?;

        debug!(status, "received response");
        trace!(%body, "response body");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Decode a response body, mapping non-2xx statuses to
    /// `ClientError::Status`.
    ///
    /// A body that is not JSON is kept as a JSON string rather than rejected.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Option<Value>, ClientError> {
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                body: decode_body(response.body),
            });
        }
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(decode_body(response.body)))
    }

    fn call(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Result<Option<Value>, ClientError> {
        let request = self.build_request(method, path, body);
        let response = self.execute(request)?;
        self.parse_response(response)
    }
}

impl JsonClient for HttpClient {
    fn get(&self, path: &str) -> Result<Value, ClientError> {
        Ok(self.call(HttpMethod::Get, path, None)?.unwrap_or(Value::Null))
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        Ok(self.call(HttpMethod::Post, path, Some(body))?.unwrap_or(Value::Null))
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        Ok(self.call(HttpMethod::Put, path, Some(body))?.unwrap_or(Value::Null))
    }

    fn delete(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.call(HttpMethod::Delete, path, None)
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn decode_body(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}
