//! Core server runtime.
//!
//! This module is responsible only for networking concerns: accepting TCP
//! connections, reading raw bytes from the stream, and writing the response
//! bytes back. HTTP semantics—request parsing, routing, response
//! generation—are delegated to the `http` and `handler` namespaces.
//!
//! Each accepted connection is served by its own `async-std` task, and each
//! task handles exactly one request, strictly sequentially: read, dispatch,
//! write, close. There is no keep-alive and no pipelining. Tasks share
//! nothing but the [`FileStore`]. No read or write carries a timeout, so a
//! slow peer can pin its task indefinitely; known limitation.
//!
//! A peer observes either a well-formed status line or an abrupt close.
//! Only a malformed request line produces an error response; every other
//! failure (connection reset, short body, failed blob write, unrecognized
//! method) closes the connection silently, and never disturbs the accept
//! loop.

use crate::config::config;
use crate::handler;
use crate::handler::files::FileStore;
use crate::http::parser::{ParseError, ParseOutcome, RequestParser};
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use async_std::net::{TcpListener, TcpStream};
use async_std::prelude::*;
use async_std::task;
use std::sync::Arc;

pub struct Server {
    store: Arc<FileStore>,
}

/// Why no request could be read off the stream.
enum ReadError {
    Io(std::io::Error),
    /// Peer closed before a complete head arrived.
    ConnectionClosed,
    /// Peer closed after the head but before `Content-Length` bytes of body.
    IncompleteBody,
    Parse(ParseError),
}

impl Server {
    pub fn new(store: FileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Binds the configured address and accepts connections until the
    /// process ends, spawning one task per client.
    pub async fn run(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind((config().address, config().port)).await?;

        while let Ok((stream, _addr)) = listener.accept().await {
            let store = Arc::clone(&self.store);
            task::spawn(Self::handle_client(stream, store));
        }

        Ok(())
    }

    /// Reads from the stream and feeds the parser until the request is
    /// complete, looping as often as the peer needs to deliver the declared
    /// body length.
    async fn read_request(stream: &mut TcpStream) -> Result<HttpRequest, ReadError> {
        let mut parser = RequestParser::new();
        let mut req = HttpRequest::new();
        let mut buffer = vec![0; config().buffer_size];

        loop {
            let n = match stream.read(&mut buffer).await {
                Ok(0) => {
                    return Err(if parser.is_reading_body() {
                        ReadError::IncompleteBody
                    } else {
                        ReadError::ConnectionClosed
                    });
                }
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ReadError::Io(e)),
            };

            match parser.feed(&buffer[..n], &mut req).map_err(ReadError::Parse)? {
                ParseOutcome::Incomplete => continue,
                ParseOutcome::Done => break,
            }
        }

        Ok(req)
    }

    /// Writes the serialized head, then the body bytes, untransformed.
    async fn write_response(
        stream: &mut TcpStream,
        response: &HttpResponse,
    ) -> std::io::Result<()> {
        let headers = response.build_headers();
        stream.write_all(headers.as_bytes()).await?;
        stream.write_all(&response.body).await?;
        Ok(())
    }

    /// Serves one client: read the request, dispatch it, write the response.
    async fn handle_client(mut stream: TcpStream, store: Arc<FileStore>) -> std::io::Result<()> {
        let response = match Self::read_request(&mut stream).await {
            Ok(req) => match handler::handle_request(&req, &store) {
                Some(res) => res,
                None => return Ok(()),
            },
            Err(ReadError::Io(err)) => {
                eprintln!("I/O error while reading request: {:?}", err);
                return Ok(());
            }
            Err(ReadError::ConnectionClosed) => return Ok(()),
            Err(ReadError::IncompleteBody) => {
                eprintln!("Connection closed before the declared body arrived");
                return Ok(());
            }
            Err(ReadError::Parse(err)) => handler::handle_error(err.into_http_status()),
        };

        Self::write_response(&mut stream, &response).await
    }
}
