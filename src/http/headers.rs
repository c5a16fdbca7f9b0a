//! Header storage for requests and responses.
//!
//! The two sides need different shapes. Incoming headers are kept as the raw
//! `Name: Value` lines they arrived as, in order, duplicates included; lookups
//! scan the lines with an explicit first-match or last-match policy, the same
//! way the wire is scanned. Outgoing headers are an ordered name→value map
//! that is reproduced verbatim, in insertion order, when the response is
//! serialized.
//!
//! Neither side validates names or values. Higher-level types such as
//! [`HttpRequest`](crate::http::request::HttpRequest) and
//! [`HttpResponse`](crate::http::response::HttpResponse) constrain access
//! where they need to.

use indexmap::IndexMap;

/// Ordered raw header lines from a request, CRLF already stripped.
#[derive(Debug)]
pub struct RawHeaders {
    lines: Vec<String>,
}

impl RawHeaders {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Value of the first line matching `name`, trimmed.
    ///
    /// A line matches when it starts with `name` followed by a colon,
    /// compared case-insensitively. `Content-Length` lookups use this policy.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.lines
            .iter()
            .find_map(|line| Self::value_of(line, name))
    }

    /// Value of the last line matching `name`, trimmed.
    ///
    /// `Accept-Encoding` lookups use this policy: every line is scanned and
    /// the last seen value wins.
    pub fn last_value(&self, name: &str) -> Option<&str> {
        self.lines
            .iter()
            .rev()
            .find_map(|line| Self::value_of(line, name))
    }

    fn value_of<'a>(line: &'a str, name: &str) -> Option<&'a str> {
        let bytes = line.as_bytes();
        if bytes.len() <= name.len()
            || !bytes[..name.len()].eq_ignore_ascii_case(name.as_bytes())
            || bytes[name.len()] != b':'
        {
            return None;
        }
        Some(line[name.len() + 1..].trim())
    }
}

/// Ordered response headers, serialized in insertion order.
pub struct HttpHeaders {
    headers: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    pub fn set_raw(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&String> {
        self.headers.get(name)
    }

    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in &self.headers {
            result.push_str(&format!("{}: {}\r\n", name, value));
        }
        result
    }
}
