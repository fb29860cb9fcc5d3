use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::media::episode::FolderMetadata;

/// Optional per-folder JSON file carrying channel overrides.
pub const SIDECAR_FILE: &str = "metadata.json";

/// Reported when a file name carries no duration marker.
pub const DEFAULT_DURATION: &str = "00:00:00";

/// `___H:MM:SS___` or `___HH:MM:SS___` with ASCII digits, nothing looser.
static DURATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"___([0-9]{1,2}:[0-9]{2}:[0-9]{2})___").expect("duration marker pattern is valid")
});

#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
pub struct Sidecar {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("failed to read metadata.json: {0}")]
    Io(#[from] io::Error),
    #[error("malformed metadata.json: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn parse_sidecar(content: &str) -> Result<Sidecar, MetadataError> {
    Ok(serde_json::from_str(content)?)
}

/// Read `folder_path/metadata.json`. A missing file is `Ok(None)`.
pub fn read_sidecar(folder_path: &Path) -> Result<Option<Sidecar>, MetadataError> {
    match std::fs::read_to_string(folder_path.join(SIDECAR_FILE)) {
        Ok(content) => parse_sidecar(&content).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Channel metadata for a folder. Never fails: an unreadable or malformed sidecar is
/// logged and the defaults (title = `folder_name`, empty description) are used instead.
pub fn load_folder_metadata(folder_path: &Path, folder_name: &str) -> FolderMetadata {
    let sidecar = match read_sidecar(folder_path) {
        Ok(sidecar) => sidecar.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(
                "Ignoring sidecar in {}: {}",
                folder_path.display(),
                e
            );
            Sidecar::default()
        }
    };
    tracing::debug!("metadata for {:?}: {:?}", folder_name, sidecar);

    FolderMetadata {
        title: sidecar.title.unwrap_or_else(|| folder_name.to_string()),
        description: sidecar.description.unwrap_or_default(),
    }
}

/// Duration embedded in a file name, e.g. `Episode___1:02:03___.mp3` -> `1:02:03`.
/// The first marker wins.
pub fn extract_duration(filename: &str) -> String {
    DURATION_MARKER
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_DURATION.to_string())
}
