use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

use crate::http::headers::RawHeaders;

/// Whether the client accepts a gzip-coded body.
///
/// The last `Accept-Encoding` line wins; its value is split on commas and
/// each token trimmed. Only the exact token `gzip` counts: no wildcards and
/// no quality values, so `gzip;q=0.5` does not match.
pub fn accepts_gzip(headers: &RawHeaders) -> bool {
    match headers.last_value("accept-encoding") {
        Some(value) => value.split(',').any(|token| token.trim() == "gzip"),
        None => false,
    }
}

pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut e = GzEncoder::new(Vec::new(), Compression::default());
    e.write_all(data)?;
    e.finish()
}
