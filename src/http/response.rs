use crate::http::headers::HttpHeaders;
use crate::http::status::HttpStatus;

/// Response headers the routes are allowed to set.
pub enum ResponseHeader {
    ContentLength,
    ContentType,
    ContentEncoding,
}

pub struct HttpResponse {
    pub status: HttpStatus,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: HttpStatus) -> Self {
        Self {
            status,
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    pub fn set_header(&mut self, h: ResponseHeader, value: &str) {
        let name = match h {
            ResponseHeader::ContentType => "Content-Type",
            ResponseHeader::ContentLength => "Content-Length",
            ResponseHeader::ContentEncoding => "Content-Encoding",
        };

        self.headers.set_raw(name, value);
    }

    /// Serializes everything before the body:
    ///
    /// ```text
    /// HTTP/1.1 <status> <reason>\r\n
    /// <header_name>: <header_value>\r\n
    /// ...
    /// \r\n
    /// ```
    ///
    /// Headers appear in insertion order. Nothing is added on behalf of the
    /// route: a response without headers serializes as the status line
    /// followed by the blank line, with no `Content-Length: 0`.
    pub fn build_headers(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\n{}\r\n",
            self.status as usize,
            self.status.reason(),
            self.headers.stringify(),
        )
    }
}
