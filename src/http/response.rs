//! HTTP response builders
//!
//! Builder failures are logged and replaced with an empty response instead of
//! panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::Response;

use super::range::ByteRange;

pub type Body = Full<Bytes>;

/// Metadata shared by 200 and 206 file responses
pub struct FileMeta<'a> {
    pub content_type: &'a str,
    pub etag: &'a str,
    pub cache_control: &'a str,
    pub is_head: bool,
}

fn finish(builder: Builder, body: Bytes, label: &str) -> Response<Body> {
    builder.body(Full::new(body)).unwrap_or_else(|e| {
        crate::logger::log_error(&format!("Failed to build {label} response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}

fn plain_text(status: u16, text: &'static str) -> Response<Body> {
    let builder = Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", text.len());
    finish(builder, Bytes::from_static(text.as_bytes()), &status.to_string())
}

/// 404 Not Found. Blocked and missing resources both end up here.
pub fn build_404_response() -> Response<Body> {
    plain_text(404, "404 Not Found")
}

pub fn build_405_response() -> Response<Body> {
    let builder = Response::builder()
        .status(405)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Allow", "GET, HEAD, OPTIONS");
    finish(builder, Bytes::from_static(b"405 Method Not Allowed"), "405")
}

pub fn build_413_response() -> Response<Body> {
    plain_text(413, "413 Payload Too Large")
}

/// 204 answer to `OPTIONS`
pub fn build_options_response() -> Response<Body> {
    let builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");
    finish(builder, Bytes::new(), "OPTIONS")
}

pub fn build_304_response(etag: &str, cache_control: &str) -> Response<Body> {
    let builder = Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", cache_control);
    finish(builder, Bytes::new(), "304")
}

pub fn build_416_response(file_size: usize) -> Response<Body> {
    let builder = Response::builder()
        .status(416)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Range", format!("bytes */{file_size}"));
    finish(builder, Bytes::from_static(b"416 Range Not Satisfiable"), "416")
}

pub fn build_html_response(content: String, is_head: bool) -> Response<Body> {
    let builder = Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content.len());
    let body = if is_head { Bytes::new() } else { Bytes::from(content) };
    finish(builder, body, "HTML")
}

/// 200 with the whole file
pub fn build_file_response(data: Bytes, meta: &FileMeta<'_>) -> Response<Body> {
    let builder = Response::builder()
        .status(200)
        .header("Content-Type", meta.content_type)
        .header("Content-Length", data.len())
        .header("Accept-Ranges", "bytes")
        .header("ETag", meta.etag)
        .header("Cache-Control", meta.cache_control);
    let body = if meta.is_head { Bytes::new() } else { data };
    finish(builder, body, "200")
}

/// 206 with `range` of a file of `total_size` bytes; `data` is the slice
pub fn build_partial_response(
    data: Bytes,
    range: ByteRange,
    total_size: usize,
    meta: &FileMeta<'_>,
) -> Response<Body> {
    let builder = Response::builder()
        .status(206)
        .header("Content-Type", meta.content_type)
        .header("Content-Length", range.len())
        .header(
            "Content-Range",
            format!("bytes {}-{}/{total_size}", range.start, range.end),
        )
        .header("Accept-Ranges", "bytes")
        .header("ETag", meta.etag)
        .header("Cache-Control", meta.cache_control);
    let body = if meta.is_head { Bytes::new() } else { data };
    finish(builder, body, "206")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_body() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Length"], "13");
    }

    #[test]
    fn test_file_response_head_has_no_body() {
        let meta = FileMeta {
            content_type: "text/css",
            etag: "\"1\"",
            cache_control: "public, max-age=60",
            is_head: true,
        };
        let resp = build_file_response(Bytes::from_static(b"a{}"), &meta);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "3");
        assert_eq!(resp.headers()["Content-Type"], "text/css");
    }

    #[test]
    fn test_partial_response_headers() {
        let meta = FileMeta {
            content_type: "text/plain",
            etag: "\"1\"",
            cache_control: "public, max-age=60",
            is_head: false,
        };
        let range = ByteRange { start: 2, end: 4 };
        let resp = build_partial_response(Bytes::from_static(b"cde"), range, 10, &meta);
        assert_eq!(resp.status(), 206);
        assert_eq!(resp.headers()["Content-Range"], "bytes 2-4/10");
        assert_eq!(resp.headers()["Content-Length"], "3");
    }

    #[test]
    fn test_405_allow_header() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }
}
