use crate::http::HttpMethod;
use crate::http::headers::RawHeaders;

/// A single parsed request. Built once per connection by the
/// [`parser`](crate::http::parser) and immutable afterwards.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,

    /// Raw header lines in arrival order, duplicates preserved.
    pub headers: RawHeaders,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new() -> Self {
        Self {
            method: HttpMethod::Other(String::new()),
            path: String::new(),
            headers: RawHeaders::new(),
            body: Vec::new(),
        }
    }

    /// Declared body length: first `Content-Length` line wins, value trimmed,
    /// anything absent or unparsable (including negative numbers) counts as 0.
    pub fn content_length(&self) -> usize {
        self.headers
            .first_value("content-length")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0)
    }
}
