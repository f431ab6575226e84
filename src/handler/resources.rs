//! Resource serving
//!
//! Turns a path below the mount point into a file response. Every failure on
//! the way (no prefix, containment check, missing file, symlink) is the same
//! 404.

use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::io::{self, ErrorKind};
use std::path::Path;
use tokio::fs;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::response::{build_file_response, build_partial_response, FileMeta};
use crate::http::{self, cache, range::RangeOutcome, Body};
use crate::logger;

/// Serve `raw_path` (still percent-encoded, relative to the mount point)
pub async fn serve_resource(
    ctx: &RequestContext,
    raw_path: &str,
    state: &AppState,
) -> Response<Body> {
    let path = percent_decode_str(raw_path).decode_utf8_lossy();
    // No file name can hold a NUL; the OS would reject it as invalid input
    if path.is_empty() || path.contains('\0') {
        return http::build_404_response();
    }

    let Some(file) = state.resources.resolve(&path) else {
        return http::build_404_response();
    };

    let data = match read_regular_file(&file.path).await {
        Ok(Some(data)) => data,
        Ok(None) => return http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read '{}': {e}",
                file.path.display().to_string().escape_debug()
            ));
            return http::build_404_response();
        }
    };

    let content_type = state.mime_overrides.content_type(file.extension.as_deref());
    build_resource_response(ctx, Bytes::from(data), content_type, state.config.http.cache_max_age)
}

/// Read `path` only if it is a regular file and not a symlink.
///
/// The resolver checks containment on the path string alone, so a symlink
/// placed inside a mapped directory could point anywhere. `Ok(None)` means
/// not found; only real I/O failures come back as errors.
async fn read_regular_file(path: &Path) -> io::Result<Option<Vec<u8>>> {
    let meta = match fs::symlink_metadata(path).await {
        Ok(meta) => meta,
        Err(e) if is_missing(&e) => return Ok(None),
        Err(e) => return Err(e),
    };

    if !meta.file_type().is_file() {
        return Ok(None);
    }

    match fs::read(path).await {
        Ok(data) => Ok(Some(data)),
        Err(e) if is_missing(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidInput
    )
}

fn build_resource_response(
    ctx: &RequestContext,
    data: Bytes,
    content_type: &str,
    max_age: u32,
) -> Response<Body> {
    let etag = cache::generate_etag(&data);
    let cache_control = cache::public_cache_control(max_age);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag, &cache_control);
    }

    let meta = FileMeta {
        content_type,
        etag: &etag,
        cache_control: &cache_control,
        is_head: ctx.is_head,
    };

    let total = data.len();
    match http::parse_range_header(ctx.range.as_deref(), total) {
        RangeOutcome::Partial(range) => {
            let slice = data.slice(range.start..=range.end);
            build_partial_response(slice, range, total, &meta)
        }
        RangeOutcome::NotSatisfiable => http::build_416_response(total),
        RangeOutcome::Full => build_file_response(data, &meta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_unreadable_names_are_not_found() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        for name in ["missing.js", "sub", "nul\0byte.js"] {
            let outcome = read_regular_file(&dir.path().join(name)).await;
            assert!(matches!(outcome, Ok(None)), "{name:?}: {outcome:?}");
        }
    }

    #[tokio::test]
    async fn test_reads_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.js");
        std::fs::write(&file, "x").unwrap();

        assert_eq!(read_regular_file(&file).await.unwrap(), Some(b"x".to_vec()));
    }
}
