use super::path_utils::{file_name_of, is_path_safe, join_archive_path, path_key};
use std::path::Path;

#[test]
fn test_is_path_safe_rejects_traversal() {
    let base = Path::new("/tmp/pkg");
    assert!(is_path_safe(base, Path::new("resources/a.png")));
    assert!(is_path_safe(base, Path::new("resources/../links.txt")));
    assert!(!is_path_safe(base, Path::new("../outside.txt")));
    assert!(!is_path_safe(base, Path::new("resources/../../outside.txt")));
}

#[test]
fn test_join_archive_path_uses_native_components() {
    let base = Path::new("/tmp/pkg");
    let joined = join_archive_path(base, "resources/clip.mp4").unwrap();
    assert_eq!(joined, base.join("resources").join("clip.mp4"));

    assert!(join_archive_path(base, "../escape.mp4").is_none());
    assert!(join_archive_path(base, "").is_none());
}

#[test]
fn test_file_name_of_handles_both_separators() {
    assert_eq!(file_name_of(r"C:\Users\me\Videos\clip.mp4"), "clip.mp4");
    assert_eq!(file_name_of("/home/me/audio/bgm.wav"), "bgm.wav");
    assert_eq!(file_name_of("plain.png"), "plain.png");
}

#[test]
fn test_path_key_ignores_case_and_separator() {
    assert_eq!(path_key(r"C:\Media\Clip.MP4"), path_key("c:/media/clip.mp4"));
    assert_ne!(path_key("/media/a.png"), path_key("/media/b.png"));
}
