//! Transport port and its reqwest adapter.
//!
//! Resources never talk to the network directly: they open a [`Connection`]
//! from the [`Moip`](crate::Moip) context, attach headers and a body, and
//! execute it against a path. The connection delegates to an [`HttpClient`],
//! which production code backs with [`ReqwestHttpClient`] and tests replace
//! with an in-memory double.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::MoipError;

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const CONTENT_LENGTH: &str = "Content-Length";
pub(crate) const AUTHORIZATION: &str = "Authorization";
pub(crate) const APPLICATION_JSON: &str = "application/json";

/// HTTP methods issued by the resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A fully assembled request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path relative to the API endpoint, e.g. `/v2/entries/ENT-1`
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Returns the value of a header (case-insensitive name match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub status_message: String,
    pub content: String,
}

impl HttpResponse {
    /// Returns the body if the status is exactly 200.
    ///
    /// Any other status becomes [`MoipError::Api`] carrying the status code
    /// and message verbatim.
    pub fn ensure_ok(self) -> Result<String, MoipError> {
        if self.status_code != 200 {
            return Err(MoipError::Api {
                status: self.status_code,
                message: self.status_message,
            });
        }
        Ok(self.content)
    }
}

/// Port for the component performing the actual network call.
///
/// Retries, timeouts and cancellation belong to implementations of this
/// trait; the resource layer issues exactly one call per operation.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes a request and returns the raw response, whatever its status.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MoipError>;
}

/// A single request being assembled against the transport.
pub struct Connection {
    http: Arc<dyn HttpClient>,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl Connection {
    pub(crate) fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a request header.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the raw request body.
    pub fn set_request_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    /// Sends the request to `path` and waits for the response.
    pub async fn execute(self, path: &str, method: HttpMethod) -> Result<HttpResponse, MoipError> {
        debug!(%method, path, "sending request");
        let request = HttpRequest {
            method,
            path: path.to_string(),
            headers: self.headers,
            body: self.body,
        };
        let response = self.http.execute(request).await?;
        debug!(status = response.status_code, "received response");
        Ok(response)
    }
}

/// [`HttpClient`] backed by `reqwest`.
pub struct ReqwestHttpClient {
    base_url: String,
    http: Client,
}

impl ReqwestHttpClient {
    /// Creates a transport targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Returns the endpoint requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MoipError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut req = match request.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.http.post(url),
        };
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let content = resp.text().await?;
        Ok(HttpResponse {
            status_code: status.as_u16(),
            status_message: status.canonical_reason().unwrap_or_default().to_string(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_with_trailing_slash() {
        let http = ReqwestHttpClient::new("https://sandbox.moip.com.br/");
        assert_eq!(http.base_url(), "https://sandbox.moip.com.br");
    }

    #[test]
    fn test_ensure_ok_passes_body_through() {
        let resp = HttpResponse {
            status_code: 200,
            status_message: "OK".into(),
            content: "{}".into(),
        };
        assert_eq!(resp.ensure_ok().unwrap(), "{}");
    }

    #[test]
    fn test_ensure_ok_rejects_other_success_codes() {
        let resp = HttpResponse {
            status_code: 201,
            status_message: "Created".into(),
            content: "{}".into(),
        };
        let err = resp.ensure_ok().unwrap_err();
        assert!(matches!(err, MoipError::Api { status: 201, ref message } if message == "Created"));
    }

    #[test]
    fn test_request_header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            path: "/".into(),
            headers: vec![(CONTENT_TYPE.into(), APPLICATION_JSON.into())],
            body: None,
        };
        assert_eq!(req.header("content-type"), Some(APPLICATION_JSON));
        assert_eq!(req.header(AUTHORIZATION), None);
    }
}
