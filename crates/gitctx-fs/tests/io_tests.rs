use gitctx_fs::{NormalizedPath, io};
use tempfile::TempDir;

#[test]
fn test_ensure_dir_creates_nested_tree() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("a").join("b").join("c"));

    io::ensure_dir(&path).unwrap();
    assert!(path.is_dir());
}

#[test]
fn test_ensure_dir_accepts_existing_directory() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path());

    io::ensure_dir(&path).unwrap();
    io::ensure_dir(&path).unwrap();
}

#[test]
fn test_ensure_dir_fails_when_file_is_in_the_way() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "not a dir").unwrap();

    let result = io::ensure_dir(&NormalizedPath::new(blocker.join("child")));
    assert!(result.is_err());
}

#[test]
fn test_read_text_nonexistent_file_returns_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("does_not_exist.txt"));
    assert!(io::read_text(&path).is_err());
}
