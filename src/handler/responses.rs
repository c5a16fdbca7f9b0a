use crate::http::response::{HttpResponse, ResponseHeader};
use crate::http::status::HttpStatus;

pub fn root_ok() -> HttpResponse {
    HttpResponse::new(HttpStatus::Ok)
}

/// Echo without gzip negotiation: content type only, empty body, no
/// Content-Length. The payload is only ever carried in the gzip variant.
pub fn echo_identity() -> HttpResponse {
    let mut res = HttpResponse::new(HttpStatus::Ok);
    res.set_header(ResponseHeader::ContentType, "text/plain");
    res
}

pub fn echo_gzip(compressed: Vec<u8>) -> HttpResponse {
    let mut res = HttpResponse::new(HttpStatus::Ok);
    res.set_header(ResponseHeader::ContentType, "text/plain");
    res.set_header(ResponseHeader::ContentEncoding, "gzip");
    res.set_header(ResponseHeader::ContentLength, &compressed.len().to_string());

    res.body = compressed;
    res
}

pub fn file_blob(blob: Vec<u8>) -> HttpResponse {
    let mut res = HttpResponse::new(HttpStatus::Ok);
    res.set_header(ResponseHeader::ContentType, "text/plain");
    res.set_header(ResponseHeader::ContentLength, &blob.len().to_string());

    res.body = blob;
    res
}

pub fn created() -> HttpResponse {
    HttpResponse::new(HttpStatus::Created)
}

pub fn bad_request() -> HttpResponse {
    HttpResponse::new(HttpStatus::BadRequest)
}
