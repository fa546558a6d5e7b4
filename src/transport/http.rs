use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

/// Outbound request handed to an [`crate::HttpTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded` pairs, in order.
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

/// Raw response returned by an [`crate::HttpTransport`].
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase of the status line (`OK`, `Bad Request`, ...).
    pub reason: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_content_type(mut self, value: HeaderValue) -> Self {
        self.headers.insert(CONTENT_TYPE, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Raw `Content-Type` header bytes. Parameters may carry non-ASCII text.
    pub fn content_type(&self) -> Option<&[u8]> {
        self.headers.get(CONTENT_TYPE).map(HeaderValue::as_bytes)
    }
}
