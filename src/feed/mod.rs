//! In-memory model of one folder's podcast feed.

pub mod links;
pub mod rss;

use std::io;
use std::path::Path;

use url::Url;

use crate::identity::ServerIdentity;
use crate::media::episode::{Episode, FolderMetadata};
use crate::media::scanner::scan_folder;

/// A synthesized feed. Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub title: String,
    pub link: Url,
    pub description: String,
    pub artwork: Url,
    /// Sorted by episode file name.
    pub items: Vec<FeedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: Url,
    pub mime: &'static str,
    pub length: u64,
    pub duration: String,
    pub thumbnail: Url,
}

impl FeedItem {
    fn from_episode(identity: &ServerIdentity, folder: &str, episode: &Episode) -> Self {
        FeedItem {
            title: episode.title.clone(),
            link: links::episode_link(identity, folder, &episode.filename),
            mime: episode.mime,
            length: episode.size,
            duration: episode.duration.clone(),
            thumbnail: links::episode_link(identity, folder, &episode.thumbnail),
        }
    }
}

/// Build the feed for `folder` (logical name, as requested) located at `folder_path`.
///
/// Errors only when the directory cannot be listed.
pub fn build_feed(
    identity: &ServerIdentity,
    folder: &str,
    folder_path: &Path,
    metadata: &FolderMetadata,
) -> io::Result<Feed> {
    let episodes = scan_folder(folder_path, identity.media_root())?;
    tracing::debug!("{} episodes in {}", episodes.len(), folder_path.display());

    Ok(Feed {
        title: metadata.title.clone(),
        link: links::folder_link(identity, folder),
        description: metadata.description.clone(),
        artwork: links::channel_artwork_link(identity, folder),
        items: episodes
            .iter()
            .map(|episode| FeedItem::from_episode(identity, folder, episode))
            .collect(),
    })
}
