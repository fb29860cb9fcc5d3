use std::path::Path;
use folder2rss::media::mime::{guess, mime_or_default, DEFAULT_MIME};

#[test]
fn test_mp3_is_audio_mpeg() {
    assert_eq!(guess(Path::new("episode.mp3")), Some("audio/mpeg"));
}

#[test]
fn test_m4a_is_audio_mp4() {
    assert_eq!(guess(Path::new("episode.m4a")), Some("audio/mp4"));
}

#[test]
fn test_mp4_is_video() {
    assert_eq!(guess(Path::new("episode.mp4")), Some("video/mp4"));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(guess(Path::new("EPISODE.MP3")), Some("audio/mpeg"));
}

#[test]
fn test_unknown_extension_returns_none() {
    assert!(guess(Path::new("notes.xyz")).is_none());
}

#[test]
fn test_no_extension_returns_none() {
    assert!(guess(Path::new("Makefile")).is_none());
}

#[test]
fn test_unknown_falls_back_to_octet_stream() {
    assert_eq!(mime_or_default(Path::new("blob.xyz")), DEFAULT_MIME);
    assert_eq!(DEFAULT_MIME, "application/octet-stream");
}
