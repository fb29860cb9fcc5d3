//! Split an incoming request path into "feed for folder X" or "file at path Y".

use percent_encoding::percent_decode_str;

/// Paths ending in this are feed requests.
pub const FEED_SUFFIX: &str = ".rss";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPath {
    /// Percent-decoded folder name relative to the media root. May be empty.
    Feed { folder: String },
    /// Percent-decoded file path relative to the media root.
    Asset { path: String },
}

/// Decompose the path component of a request URI. `prefix` is the encoded mount point
/// (`/feeds`, or empty); query strings must already be removed.
///
/// Returns `None` when percent-decoding does not yield UTF-8.
pub fn decompose(path: &str, prefix: &str) -> Option<RequestPath> {
    let rest = strip_prefix(path, prefix);

    if let Some(folder) = rest.strip_suffix(FEED_SUFFIX) {
        let folder = decode(folder)?;
        return Some(RequestPath::Feed {
            folder: folder.trim_start_matches('/').to_string(),
        });
    }

    let asset = decode(rest)?;
    Some(RequestPath::Asset {
        path: asset.trim_start_matches('/').to_string(),
    })
}

/// Remove `prefix` when it matches whole segments: `/feeds/x` -> `/x`, `/feedsx` unchanged.
fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

fn decode(raw: &str) -> Option<String> {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => {
            tracing::debug!("Request path is not UTF-8 after decoding: {:?}", raw);
            None
        }
    }
}
