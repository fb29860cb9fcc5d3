use std::path::Path;

/// Channel-level metadata for one folder, after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMetadata {
    pub title: String,
    pub description: String,
}

/// One eligible file in a folder, read fresh from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// File name inside the folder, e.g. `Episode___1:02:03___.mp3`.
    pub filename: String,
    /// File name without its extension.
    pub title: String,
    pub size: u64,
    pub mime: &'static str,
    /// `H:MM:SS` or `HH:MM:SS` from the file name, `00:00:00` when absent.
    pub duration: String,
    /// Expected cover image next to the episode: same stem, `.jpg`.
    pub thumbnail: String,
}

/// `show 1.mp3` -> `show 1`. Names without an extension are returned unchanged.
pub fn display_title(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
        .to_string()
}

/// `show 1.mp3` -> `show 1.jpg`.
pub fn thumbnail_name(filename: &str) -> String {
    format!("{}.jpg", display_title(filename))
}
