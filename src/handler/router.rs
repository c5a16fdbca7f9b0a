use crate::handler::encoding;
use crate::handler::files::FileStore;
use crate::handler::responses;
use crate::http::HttpMethod;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;

/// The closed set of route behaviors, derived purely from the path.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteMatch {
    Root,
    Echo(String),
    File(String),
    NotFound,
}

impl RouteMatch {
    /// Patterns are tried in fixed order and the first match wins.
    /// Suffixes are the raw remainder of the path: no percent-decoding,
    /// no trimming, prefixes compared case-sensitively.
    pub fn from_path(path: &str) -> Self {
        if path == "/" {
            RouteMatch::Root
        } else if let Some(text) = path.strip_prefix("/echo/") {
            RouteMatch::Echo(text.to_string())
        } else if let Some(name) = path.strip_prefix("/files/") {
            RouteMatch::File(name.to_string())
        } else {
            RouteMatch::NotFound
        }
    }
}

/// Selects and runs one route behavior for the request.
///
/// `None` means no response is written and the connection is simply closed:
/// methods other than GET/POST, and failed blob writes.
pub fn route(req: &HttpRequest, store: &FileStore) -> Option<HttpResponse> {
    match (&req.method, RouteMatch::from_path(&req.path)) {
        (HttpMethod::Get, RouteMatch::Root) => Some(responses::root_ok()),

        (HttpMethod::Get, RouteMatch::Echo(text)) => Some(echo(req, &text)),

        (HttpMethod::Get, RouteMatch::File(name)) => Some(match store.get(&name) {
            Ok(blob) => responses::file_blob(blob),
            Err(_) => responses::bad_request(),
        }),

        (HttpMethod::Post, RouteMatch::File(name)) => match store.put(&name, &req.body) {
            Ok(()) => Some(responses::created()),
            Err(err) => {
                eprintln!("Fail to store {}: {:?}", name, err);
                None
            }
        },

        (HttpMethod::Other(_), _) => None,

        _ => Some(responses::bad_request()),
    }
}

fn echo(req: &HttpRequest, text: &str) -> HttpResponse {
    if !encoding::accepts_gzip(&req.headers) {
        return responses::echo_identity();
    }

    match encoding::gzip(text.as_bytes()) {
        Ok(compressed) => responses::echo_gzip(compressed),
        Err(err) => {
            eprintln!("Fail to gzip echo body: {:?}", err);
            responses::echo_identity()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::parser::{ParseOutcome, RequestParser};
    use crate::http::status::HttpStatus;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn request(method: HttpMethod, path: &str, header_lines: &[&str], body: &[u8]) -> HttpRequest {
        let mut req = HttpRequest::new();
        req.method = method;
        req.path = path.to_string();
        for line in header_lines {
            req.headers.push_line(line.to_string());
        }
        req.body = body.to_vec();
        req
    }

    fn temp_store(tag: &str) -> FileStore {
        let dir =
            std::env::temp_dir().join(format!("minihttpd-router-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        FileStore::new(dir)
    }

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn match_order_is_root_echo_files() {
        assert_eq!(RouteMatch::from_path("/"), RouteMatch::Root);
        assert_eq!(
            RouteMatch::from_path("/echo/a/b"),
            RouteMatch::Echo("a/b".to_string())
        );
        assert_eq!(
            RouteMatch::from_path("/files/f.txt"),
            RouteMatch::File("f.txt".to_string())
        );
        assert_eq!(RouteMatch::from_path("/echo"), RouteMatch::NotFound);
        assert_eq!(RouteMatch::from_path("/other"), RouteMatch::NotFound);
        // Prefixes are case-sensitive.
        assert_eq!(RouteMatch::from_path("/Echo/x"), RouteMatch::NotFound);
    }

    #[test]
    fn echo_suffix_is_raw() {
        assert_eq!(
            RouteMatch::from_path("/echo/%20a%20 "),
            RouteMatch::Echo("%20a%20 ".to_string())
        );
    }

    #[test]
    fn get_root_is_a_bare_ok() {
        let store = temp_store("root");
        let req = request(HttpMethod::Get, "/", &[], b"");
        let res = route(&req, &store).unwrap();
        assert_eq!(res.build_headers(), "HTTP/1.1 200 OK\r\n\r\n");
        assert!(res.body.is_empty());
    }

    #[test]
    fn unknown_path_is_bad_request() {
        let store = temp_store("unknown");
        let req = request(HttpMethod::Get, "/nope", &[], b"");
        let res = route(&req, &store).unwrap();
        assert_eq!(res.status, HttpStatus::BadRequest);
        assert!(res.body.is_empty());
    }

    #[test]
    fn post_outside_files_falls_to_bad_request() {
        let store = temp_store("post-default");
        for path in ["/", "/echo/abc", "/other"] {
            let req = request(HttpMethod::Post, path, &["Content-Length: 1"], b"x");
            let res = route(&req, &store).unwrap();
            assert_eq!(res.status, HttpStatus::BadRequest);
        }
    }

    #[test]
    fn unrecognized_method_gets_no_response() {
        let store = temp_store("method");
        let req = request(HttpMethod::Other("PUT".to_string()), "/", &[], b"");
        assert!(route(&req, &store).is_none());
    }

    #[test]
    fn echo_without_gzip_sends_headers_only() {
        let store = temp_store("echo-id");
        let req = request(HttpMethod::Get, "/echo/abc", &["Host: x"], b"");
        let res = route(&req, &store).unwrap();
        assert_eq!(res.status, HttpStatus::Ok);
        assert_eq!(res.headers.get("Content-Type").unwrap(), "text/plain");
        assert!(res.headers.get("Content-Length").is_none());
        assert!(res.body.is_empty());
    }

    #[test]
    fn echo_with_gzip_carries_the_compressed_payload() {
        let store = temp_store("echo-gz");
        let req = request(
            HttpMethod::Get,
            "/echo/abc",
            &["Accept-Encoding: deflate, gzip"],
            b"",
        );
        let res = route(&req, &store).unwrap();

        assert_eq!(res.headers.get("Content-Encoding").unwrap(), "gzip");
        assert_eq!(
            res.headers.get("Content-Length").unwrap(),
            &res.body.len().to_string()
        );
        assert_eq!(gunzip(&res.body), b"abc");
    }

    #[test]
    fn echo_quality_suffix_does_not_negotiate_gzip() {
        let store = temp_store("echo-q");
        let req = request(
            HttpMethod::Get,
            "/echo/abc",
            &["Accept-Encoding: deflate, gzip;q=0.5"],
            b"",
        );
        let res = route(&req, &store).unwrap();
        assert!(res.headers.get("Content-Encoding").is_none());
        assert!(res.body.is_empty());
    }

    #[test]
    fn files_round_trip_through_the_store() {
        let store = temp_store("files-rt");
        let blob = [1u8, 0, 255, b'\n', 42];

        let post = request(
            HttpMethod::Post,
            "/files/data.bin",
            &["Content-Length: 5"],
            &blob,
        );
        let res = route(&post, &store).unwrap();
        assert_eq!(res.status, HttpStatus::Created);
        assert!(res.body.is_empty());

        let get = request(HttpMethod::Get, "/files/data.bin", &[], b"");
        let res = route(&get, &store).unwrap();
        assert_eq!(res.status, HttpStatus::Ok);
        assert_eq!(res.headers.get("Content-Length").unwrap(), "5");
        assert_eq!(res.body, blob);
    }

    #[test]
    fn missing_file_is_bad_request() {
        let store = temp_store("files-missing");
        let req = request(HttpMethod::Get, "/files/never-written", &[], b"");
        let res = route(&req, &store).unwrap();
        assert_eq!(res.status, HttpStatus::BadRequest);
    }

    #[test]
    fn traversal_names_are_refused() {
        let store = temp_store("files-esc");
        let req = request(HttpMethod::Get, "/files/../secret", &[], b"");
        let res = route(&req, &store).unwrap();
        assert_eq!(res.status, HttpStatus::BadRequest);

        // A failed write is silent: no response at all.
        let post = request(HttpMethod::Post, "/files/../evil", &["Content-Length: 1"], b"x");
        assert!(route(&post, &store).is_none());
    }

    #[test]
    fn parsed_bytes_route_end_to_end() {
        let store = temp_store("pipeline");

        let mut parser = RequestParser::new();
        let mut req = HttpRequest::new();
        let outcome = parser
            .feed(
                b"POST /files/pipe.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 3\r\n\r\nabc",
                &mut req,
            )
            .unwrap();
        assert_eq!(outcome, ParseOutcome::Done);
        assert_eq!(
            route(&req, &store).unwrap().build_headers(),
            "HTTP/1.1 201 Created\r\n\r\n"
        );

        let mut parser = RequestParser::new();
        let mut req = HttpRequest::new();
        parser
            .feed(b"GET /files/pipe.txt HTTP/1.1\r\nHost: localhost\r\n\r\n", &mut req)
            .unwrap();
        let res = route(&req, &store).unwrap();
        assert_eq!(
            res.build_headers(),
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\n"
        );
        assert_eq!(res.body, b"abc");
    }
}
