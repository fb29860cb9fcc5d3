use std::io;
use std::path::Path;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use http_range_header::parse_range_header;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::ServeError;
use crate::media::mime::mime_or_default;

/// Headers present on every file response (full, partial, and HEAD).
fn file_headers(mime: &'static str, len: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    headers
}

fn unsatisfiable(len: u64) -> Response {
    (
        StatusCode::RANGE_NOT_SATISFIABLE,
        [(header::CONTENT_RANGE, format!("bytes */{}", len))],
    )
        .into_response()
}

fn open_error(path: &Path, e: io::Error) -> ServeError {
    if e.kind() == io::ErrorKind::NotFound {
        ServeError::NotFound
    } else {
        ServeError::Internal(format!("cannot open {}: {}", path.display(), e))
    }
}

/// Stream a file that already passed the sandbox check. Directories are never listed.
/// Honors a single `Range` (first range of a multi-range request).
pub async fn serve_file(path: &Path, req_headers: &HeaderMap) -> Result<Response, ServeError> {
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|e| open_error(path, e))?;
    if !meta.is_file() {
        tracing::debug!("Not a regular file: {}", path.display());
        return Err(ServeError::NotFound);
    }
    let len = meta.len();
    let headers = file_headers(mime_or_default(path), len);

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| open_error(path, e))?;

    if let Some(range_val) = req_headers.get(header::RANGE) {
        let Ok(range_str) = range_val.to_str() else {
            return Ok(unsatisfiable(len));
        };
        return range_response(path, file, len, range_str, headers).await;
    }

    let body = Body::from_stream(ReaderStream::new(file));
    Ok((StatusCode::OK, headers, body).into_response())
}

/// 206 Partial Content for the first satisfiable range, or 416.
async fn range_response(
    path: &Path,
    mut file: tokio::fs::File,
    len: u64,
    range_str: &str,
    mut headers: HeaderMap,
) -> Result<Response, ServeError> {
    let Ok(parsed) = parse_range_header(range_str) else {
        return Ok(unsatisfiable(len));
    };
    // validate() resolves suffix ranges and rejects overlapping multi-ranges.
    let Ok(ranges) = parsed.validate(len) else {
        return Ok(unsatisfiable(len));
    };
    let Some(first) = ranges.into_iter().next() else {
        return Ok(unsatisfiable(len));
    };

    let start = *first.start();
    let end = *first.end(); // inclusive
    let length = end - start + 1;

    file.seek(io::SeekFrom::Start(start))
        .await
        .map_err(|e| ServeError::Internal(format!("cannot seek in {}: {}", path.display(), e)))?;

    let content_range = format!("bytes {}-{}/{}", start, end, len);
    headers.insert(
        header::CONTENT_RANGE,
        HeaderValue::from_str(&content_range)
            .map_err(|e| ServeError::Internal(format!("bad Content-Range header: {e}")))?,
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));

    let body = Body::from_stream(ReaderStream::new(file.take(length)));
    Ok((StatusCode::PARTIAL_CONTENT, headers, body).into_response())
}
