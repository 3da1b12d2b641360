//! HTTP transport seam.
//!
//! Operations describe requests as [`ApiRequest`] values and hand them to a
//! [`Transport`]. [`HttpTransport`] sends them with one shared `reqwest`
//! client; tests substitute a recording transport.

use std::future::Future;
use std::pin::Pin;

use reqwest::multipart::{Form, Part};
use susteam_protocol::constants::{SAVE_FIELD_NAME, SAVE_MEDIA_TYPE};
use tracing::debug;

use crate::config::ConfigError;
use crate::error::SdkError;

/// HTTP verbs used by the platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A file sent as one multipart form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub media_type: String,
    pub content: Vec<u8>,
}

impl FilePart {
    /// A save file in the form the save endpoint expects.
    pub fn save(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            field: SAVE_FIELD_NAME.to_string(),
            file_name: file_name.into(),
            media_type: SAVE_MEDIA_TYPE.to_string(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(FilePart),
}

/// A request relative to the service base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Bearer token, when the endpoint requires authentication.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path.into())
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path.into())
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path.into())
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }
}

/// Raw response: status code and full body.
///
/// The status is informational; the envelope in the body is authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the platform service.
///
/// Implementations must not retry; a failure to obtain a response is
/// reported as [`SdkError::Network`].
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, SdkError>> + Send + '_>>;
}

/// [`Transport`] over a single shared `reqwest` client.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport bound to `base_url` (e.g. `https://susteam.gogo.moe/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wraps an existing client, e.g. one the game already configured.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, SdkError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Delete => self.http.delete(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let part = Part::bytes(file.content)
                    .file_name(file.file_name)
                    .mime_str(&file.media_type)?;
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        debug!(path = %request.path, status, bytes = body.len(), "response received");

        Ok(ApiResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, SdkError>> + Send + '_>> {
        Box::pin(self.execute(request))
    }
}
