pub mod files;

mod encoding;
mod responses;
mod router;

use crate::handler::files::FileStore;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use crate::http::status::HttpStatus;

/// `None` means the connection is closed without writing anything.
pub fn handle_request(req: &HttpRequest, store: &FileStore) -> Option<HttpResponse> {
    router::route(req, store)
}

pub fn handle_error(err: HttpStatus) -> HttpResponse {
    HttpResponse::new(err)
}
