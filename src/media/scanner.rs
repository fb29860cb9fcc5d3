use std::io;
use std::path::Path;

use crate::media::episode::{display_title, thumbnail_name, Episode};
use crate::media::metadata::{extract_duration, SIDECAR_FILE};
use crate::media::mime::mime_or_default;
use crate::sandbox::MediaRoot;

/// Image extensions that are artwork, not episodes.
const ARTWORK_EXTENSIONS: &[&str] = &["jpg", "png"];

/// True for names that never become feed items: artwork images and the sidecar.
pub fn is_excluded(filename: &str) -> bool {
    if filename == SIDECAR_FILE {
        return true;
    }
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            ARTWORK_EXTENSIONS
                .iter()
                .any(|artwork| ext.eq_ignore_ascii_case(artwork))
        })
        .unwrap_or(false)
}

/// List the episodes directly inside `folder_path`, sorted by file name.
///
/// Not recursive. Subdirectories, artwork, the sidecar, names that are not UTF-8 and
/// symlinks leading outside `root` are skipped. Failing to enumerate the directory is an
/// error; an entry that vanishes or cannot be stat'ed mid-listing is skipped with a warning.
pub fn scan_folder(folder_path: &Path, root: &MediaRoot) -> io::Result<Vec<Episode>> {
    let mut episodes = Vec::new();

    for entry in std::fs::read_dir(folder_path)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Cannot read entry in {}: {}", folder_path.display(), e);
                continue;
            }
        };
        let Ok(filename) = entry.file_name().into_string() else {
            tracing::debug!("Skipping non UTF-8 name in {}", folder_path.display());
            continue;
        };
        if is_excluded(&filename) {
            continue;
        }

        let path = entry.path();
        // Follows symlinks, so a link to a regular file counts as a file.
        let meta = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!("Cannot stat {}: {}", path.display(), e);
                continue;
            }
        };
        if !meta.is_file() {
            continue;
        }
        if entry.file_type().map(|t| t.is_symlink()).unwrap_or(false) && !root.contains(&path) {
            tracing::warn!("Skipping {}: links outside media root", path.display());
            continue;
        }

        episodes.push(Episode {
            title: display_title(&filename),
            size: meta.len(),
            mime: mime_or_default(&path),
            duration: extract_duration(&filename),
            thumbnail: thumbnail_name(&filename),
            filename,
        });
    }

    episodes.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(episodes)
}
