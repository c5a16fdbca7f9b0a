//! Incremental request parsing.
//!
//! The parser is a small state machine fed with raw bytes as they arrive from
//! the stream. It extracts CRLF-terminated lines until the blank line that
//! ends the head, then collects exactly `Content-Length` body bytes across as
//! many `feed` calls as it takes. Bytes past the end of the request are
//! ignored: one request per connection, no pipelining.
//!
//! Header lines are kept raw. Lookup policy (which duplicate wins, case
//! handling) lives in [`RawHeaders`](crate::http::headers::RawHeaders), not
//! here. The internal buffer grows with its input; this engine does not guard
//! against unbounded heads.

use crate::http::http_method_from_str;
use crate::http::request::HttpRequest;
use crate::http::status::HttpStatus;

#[derive(PartialEq, Debug)]
pub enum ParseOutcome {
    Incomplete,
    Done,
}

#[derive(PartialEq, Debug)]
pub enum ParseError {
    /// Request line with fewer than two space-separated tokens.
    MalformedRequestLine,
}

impl ParseError {
    pub fn into_http_status(self) -> HttpStatus {
        match self {
            ParseError::MalformedRequestLine => HttpStatus::BadRequest,
        }
    }
}

#[derive(PartialEq)]
enum ParserState {
    RequestLine,
    Headers,
    Body,
    Done,
}

pub struct RequestParser {
    buf: Vec<u8>,
    state: ParserState,
    content_length: usize,
}

impl RequestParser {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            state: ParserState::RequestLine,
            content_length: 0,
        }
    }

    /// True once the head is complete and body bytes are still owed.
    /// The read loop uses this to tell an incomplete body apart from a
    /// connection that closed before a full head arrived.
    pub fn is_reading_body(&self) -> bool {
        self.state == ParserState::Body
    }

    /// Next CRLF-terminated line off the front of the buffer, CRLF stripped,
    /// or `None` until a full line is buffered.
    fn take_line(&mut self) -> Option<String> {
        let end = self.buf.windows(2).position(|w| w == b"\r\n")?;
        let line = String::from_utf8_lossy(&self.buf[..end]).into_owned();
        self.buf.drain(..end + 2);
        Some(line)
    }

    fn parse_request_line(&self, line: &str, req: &mut HttpRequest) -> Result<(), ParseError> {
        // METHOD PATH [VERSION] split on single spaces, empty tokens kept.
        // The version token is not validated.
        let parts: Vec<&str> = line.split(' ').collect();
        if parts.len() < 2 {
            return Err(ParseError::MalformedRequestLine);
        }

        req.method = http_method_from_str(parts[0]);
        req.path = parts[1].to_string();
        Ok(())
    }

    /// Feeds newly read bytes and advances as far as they allow.
    ///
    /// Returns [`ParseOutcome::Done`] once the request is complete; after
    /// that, further input is ignored.
    pub fn feed(&mut self, input: &[u8], req: &mut HttpRequest) -> Result<ParseOutcome, ParseError> {
        self.buf.extend_from_slice(input);

        loop {
            match self.state {
                ParserState::RequestLine => {
                    let Some(line) = self.take_line() else {
                        return Ok(ParseOutcome::Incomplete);
                    };
                    self.parse_request_line(&line, req)?;
                    self.state = ParserState::Headers;
                }
                ParserState::Headers => {
                    let Some(line) = self.take_line() else {
                        return Ok(ParseOutcome::Incomplete);
                    };
                    if line.is_empty() {
                        // Blank line: the head is done. A missing or
                        // unparsable Content-Length means no body.
                        self.content_length = req.content_length();
                        self.state = if self.content_length == 0 {
                            ParserState::Done
                        } else {
                            ParserState::Body
                        };
                    } else {
                        req.headers.push_line(line);
                    }
                }
                ParserState::Body => {
                    let missing = self.content_length - req.body.len();
                    let take = missing.min(self.buf.len());
                    req.body.extend_from_slice(&self.buf[..take]);
                    self.buf.drain(..take);

                    if req.body.len() < self.content_length {
                        return Ok(ParseOutcome::Incomplete);
                    }
                    self.state = ParserState::Done;
                }
                ParserState::Done => return Ok(ParseOutcome::Done),
            }
        }
    }
}
