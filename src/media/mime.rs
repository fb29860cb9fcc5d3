use std::path::Path;

/// Served for any extension not in the table below.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Guess a MIME type from the file extension (matched case-insensitively).
///
/// Returns `None` for unrecognised or missing extensions; callers that need a value
/// use [`mime_or_default`].
pub fn guess(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    let mime = match ext.as_str() {
        // Audio
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "m4b" => "audio/mp4",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "wma" => "audio/x-ms-wma",
        "aiff" => "audio/aiff",
        "aif" => "audio/aiff",

        // Video
        "mp4" => "video/mp4",
        "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mpg" => "video/mpeg",
        "mpeg" => "video/mpeg",
        "ogv" => "video/ogg",
        "3gp" => "video/3gpp",

        // Images
        "jpg" => "image/jpeg",
        "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",

        // Documents that commonly ride along with episodes
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "json" => "application/json",
        "xml" => "application/xml",
        "rss" => "application/rss+xml",
        "vtt" => "text/vtt",
        "srt" => "application/x-subrip",

        _ => return None,
    };

    Some(mime)
}

pub fn mime_or_default(path: &Path) -> &'static str {
    guess(path).unwrap_or_else(|| {
        tracing::debug!("No MIME type for {}, using {}", path.display(), DEFAULT_MIME);
        DEFAULT_MIME
    })
}
