//! Absolute URLs for everything a feed points at.
//!
//! All links are built by appending percent-encoded path segments to
//! `ServerIdentity::website_root`, so the scheme, authority and subfolder are always the
//! configured ones and segments are joined by exactly one `/`.

use url::Url;

use crate::identity::ServerIdentity;
use crate::media::episode::thumbnail_name;

/// Channel artwork expected in every folder.
pub const CHANNEL_ARTWORK: &str = "thumbnail.png";

fn folder_segments(folder: &str) -> impl Iterator<Item = &str> {
    folder.split('/').filter(|s| !s.is_empty())
}

fn join<'a>(identity: &ServerIdentity, segments: impl Iterator<Item = &'a str>) -> Url {
    let mut link = identity.website_root().clone();
    // http(s) URLs always have a hierarchical path.
    if let Ok(mut path) = link.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    link
}

/// `http://host:port/sub/<folder>`
pub fn folder_link(identity: &ServerIdentity, folder: &str) -> Url {
    join(identity, folder_segments(folder))
}

/// `http://host:port/sub/<folder>/<filename>`
pub fn episode_link(identity: &ServerIdentity, folder: &str, filename: &str) -> Url {
    join(identity, folder_segments(folder).chain(std::iter::once(filename)))
}

/// Link to `<stem>.jpg` next to the episode.
pub fn episode_thumbnail_link(identity: &ServerIdentity, folder: &str, filename: &str) -> Url {
    let thumbnail = thumbnail_name(filename);
    join(
        identity,
        folder_segments(folder).chain(std::iter::once(thumbnail.as_str())),
    )
}

pub fn channel_artwork_link(identity: &ServerIdentity, folder: &str) -> Url {
    join(
        identity,
        folder_segments(folder).chain(std::iter::once(CHANNEL_ARTWORK)),
    )
}
