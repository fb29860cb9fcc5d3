use std::fs;

use folder2rss::sandbox::{MediaRoot, ResolvedPath};
use tempfile::TempDir;

fn media_root() -> (TempDir, MediaRoot) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("show")).unwrap();
    fs::write(dir.path().join("show").join("ep1.mp3"), b"audio").unwrap();
    let root = MediaRoot::open(dir.path()).unwrap();
    (dir, root)
}

#[test]
fn open_canonicalizes_root() {
    let (dir, root) = media_root();
    assert_eq!(root.path(), fs::canonicalize(dir.path()).unwrap());
}

#[test]
fn open_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    assert!(MediaRoot::open(&dir.path().join("nope")).is_err());
}

#[test]
fn open_rejects_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("file");
    fs::write(&file, b"x").unwrap();
    assert!(MediaRoot::open(&file).is_err());
}

#[test]
fn resolves_existing_file_inside_root() {
    let (_dir, root) = media_root();
    let resolved = root.resolve("show/ep1.mp3");
    assert_eq!(resolved, ResolvedPath::Valid(root.path().join("show").join("ep1.mp3")));
}

#[test]
fn missing_file_inside_root_is_still_valid() {
    let (_dir, root) = media_root();
    let path = root.resolve("show/missing.mp3").into_path().unwrap();
    assert!(path.starts_with(root.path()));
    assert!(!path.exists());
}

#[test]
fn parent_segments_are_invalid() {
    let (_dir, root) = media_root();
    assert!(!root.resolve("../../etc/passwd").is_valid());
    assert!(!root.resolve("show/../../etc/passwd").is_valid());
    assert!(!root.resolve("show/../show/ep1.mp3").is_valid());
}

#[test]
fn absolute_paths_are_invalid() {
    let (_dir, root) = media_root();
    assert!(!root.resolve("/etc/passwd").is_valid());
}

#[test]
fn nul_byte_is_invalid() {
    let (_dir, root) = media_root();
    assert_eq!(root.resolve("show/ep1.mp3\0.jpg"), ResolvedPath::Invalid);
}

#[test]
fn current_dir_segments_are_ignored() {
    let (_dir, root) = media_root();
    assert_eq!(
        root.resolve("./show/./ep1.mp3"),
        ResolvedPath::Valid(root.path().join("show").join("ep1.mp3"))
    );
}

#[test]
fn empty_path_is_the_root() {
    let (_dir, root) = media_root();
    assert_eq!(root.resolve(""), ResolvedPath::Valid(root.path().to_path_buf()));
}

#[cfg(unix)]
#[test]
fn symlink_escaping_root_is_invalid() {
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("secret.txt"), b"secret").unwrap();
    let (dir, root) = media_root();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("show").join("escape")).unwrap();

    assert!(!root.resolve("show/escape/secret.txt").is_valid());
    assert!(!root.contains(&dir.path().join("show").join("escape").join("secret.txt")));
}

#[cfg(unix)]
#[test]
fn missing_file_behind_escaping_symlink_is_invalid() {
    let outside = TempDir::new().unwrap();
    let (dir, root) = media_root();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("escape")).unwrap();

    assert!(!root.resolve("escape/later.mp3").is_valid());
    assert!(!root.resolve("escape/new/later.mp3").is_valid());

    // Appearing afterwards must not change the answer.
    fs::write(outside.path().join("later.mp3"), b"late").unwrap();
    assert!(!root.resolve("escape/later.mp3").is_valid());
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_invalid() {
    let outside = TempDir::new().unwrap();
    let (dir, root) = media_root();
    std::os::unix::fs::symlink(outside.path().join("gone"), dir.path().join("show").join("gone"))
        .unwrap();

    assert!(!root.resolve("show/gone").is_valid());
    assert!(!root.resolve("show/gone/ep.mp3").is_valid());
}

#[test]
fn missing_nested_path_resolves_under_canonical_root() {
    let (_dir, root) = media_root();
    assert_eq!(
        root.resolve("show/new/ep.mp3"),
        ResolvedPath::Valid(root.path().join("show").join("new").join("ep.mp3"))
    );
}

#[cfg(unix)]
#[test]
fn symlink_within_root_is_valid() {
    let (dir, root) = media_root();
    std::os::unix::fs::symlink(
        dir.path().join("show").join("ep1.mp3"),
        dir.path().join("show").join("latest.mp3"),
    )
    .unwrap();
    assert_eq!(
        root.resolve("show/latest.mp3"),
        ResolvedPath::Valid(root.path().join("show").join("ep1.mp3"))
    );
}

#[test]
fn sibling_with_common_prefix_is_not_contained() {
    let parent = TempDir::new().unwrap();
    fs::create_dir(parent.path().join("media")).unwrap();
    fs::create_dir(parent.path().join("media-evil")).unwrap();
    fs::write(parent.path().join("media-evil").join("x.mp3"), b"x").unwrap();
    let root = MediaRoot::open(&parent.path().join("media")).unwrap();

    assert!(!root.contains(&parent.path().join("media-evil").join("x.mp3")));
}
