use gitctx_fs::NormalizedPath;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("foo/bar/baz", "foo/bar/baz")]
#[case("foo\\bar\\baz", "foo/bar/baz")]
#[case("foo/bar\\baz", "foo/bar/baz")]
#[case("/a/b/../c/./d/", "/a/c/d")]
#[case("C:\\Users\\dev\\repo", "C:/Users/dev/repo")]
#[case("c:/", "c:/")]
#[case("\\\\server\\share\\repo", "//server/share/repo")]
fn test_normalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("foo/bar");
    let joined = base.join("baz");
    assert_eq!(joined.as_str(), "foo/bar/baz");
}

#[test]
fn test_join_onto_root_does_not_double_separator() {
    assert_eq!(NormalizedPath::new("/").join(".git").as_str(), "/.git");
    assert_eq!(NormalizedPath::new("C:/").join(".git").as_str(), "C:/.git");
}

#[test]
fn test_drive_prefix_preserved_through_parents() {
    let path = NormalizedPath::new("D:\\work\\project\\src");
    assert_eq!(path.drive(), Some("D:"));

    let root = path.ancestors().last().unwrap();
    assert_eq!(root.as_str(), "D:/");
    assert!(root.is_root());
}

#[test]
fn test_ancestors_walk_to_root() {
    let path = NormalizedPath::new("/home/dev/repo/a");
    let walked: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
    assert_eq!(
        walked,
        vec!["/home/dev/repo/a", "/home/dev/repo", "/home/dev", "/home", "/"]
    );
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("foo/bar/baz");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "foo/bar");
}

#[test]
fn test_parent_of_root_is_none() {
    assert!(NormalizedPath::new("/").parent().is_none());
    assert!(NormalizedPath::new("C:/").parent().is_none());
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("foo/bar/baz.toml");
    assert_eq!(path.file_name(), Some("baz.toml"));
    assert_eq!(path.extension(), Some("toml"));
}

#[test]
fn test_dotfile_has_no_extension() {
    assert_eq!(NormalizedPath::new("repo/.git").extension(), None);
}

#[test]
fn test_is_network_path() {
    assert!(NormalizedPath::new("//server/share/path").is_network_path());
    assert!(!NormalizedPath::new("/home/user/project").is_network_path());
}

#[test]
fn test_absolute_keeps_absolute_input() {
    let path = NormalizedPath::absolute("/srv/../srv/repo").unwrap();
    if cfg!(windows) {
        assert!(path.as_str().ends_with("/srv/repo"));
    } else {
        assert_eq!(path.as_str(), "/srv/repo");
    }
}

#[test]
fn test_absolute_resolves_relative_against_cwd() {
    let path = NormalizedPath::absolute("some/nested/../dir").unwrap();
    assert!(path.is_absolute());
    assert!(path.as_str().ends_with("/some/dir"), "{path}");

    // Either spelling of the working directory names the same place
    let parent = path.parent().unwrap().parent().unwrap();
    assert_eq!(
        std::fs::canonicalize(parent.to_native()).unwrap(),
        std::fs::canonicalize(std::env::current_dir().unwrap()).unwrap()
    );
}

#[cfg(unix)]
#[test]
fn test_absolute_does_not_resolve_symlinks() {
    let temp = tempfile::TempDir::new().unwrap();
    let real = temp.path().join("real");
    let link = temp.path().join("link");
    std::fs::create_dir(&real).unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let path = NormalizedPath::absolute(&link).unwrap();
    assert_eq!(path.file_name(), Some("link"));
}

#[test]
fn test_exists_false_for_nonexistent() {
    let path = NormalizedPath::new("/nonexistent/path/that/does/not/exist");
    assert!(!path.exists());
}
