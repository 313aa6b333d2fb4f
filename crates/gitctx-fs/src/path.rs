//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Normalization is purely lexical: separators are canonicalized, `.` is
/// dropped and `..` is applied against the preceding segment. Symbolic links
/// are never resolved, so a symlinked input keeps its own ancestry.
///
/// Two prefixes are preserved verbatim: a drive letter (`C:`) and the `//`
/// lead of a UNC path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner: clean(&raw) }
    }

    /// Create an absolute NormalizedPath, resolving relative input against
    /// the current directory.
    ///
    /// The current directory is taken from `$PWD` when it names the same
    /// directory as the process working directory, so a shell that entered
    /// a symlinked directory keeps that spelling. Unlike `fs::canonicalize`,
    /// symlinks are never resolved.
    pub fn absolute(path: impl AsRef<Path>) -> Result<Self> {
        let normalized = Self::new(path);
        if normalized.is_absolute() {
            return Ok(normalized);
        }

        let physical = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        let base = logical_base(std::env::var_os("PWD").map(PathBuf::from), physical);
        Ok(Self::new(dunce::simplified(&base)).join(normalized.as_str()))
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let bare_drive = self.drive() == Some(self.inner.as_str());
        let joined = if self.inner.ends_with('/') || bare_drive {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self::new(joined)
    }

    /// The drive prefix (`C:`), if any.
    pub fn drive(&self) -> Option<&str> {
        let bytes = self.inner.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            Some(&self.inner[..2])
        } else {
            None
        }
    }

    /// Whether the path is anchored at a filesystem root.
    pub fn is_absolute(&self) -> bool {
        let (head, anchored, _) = split_root(&self.inner);
        if self.is_network_path() {
            return true;
        }
        // A rooted path without a drive is still drive-relative on Windows
        anchored && (!cfg!(windows) || head.len() > 1)
    }

    /// Whether this path is a filesystem root (`/`, `C:/` or `//`).
    pub fn is_root(&self) -> bool {
        let (head, anchored, rest) = split_root(&self.inner);
        anchored && rest.is_empty() && head == self.inner
    }

    /// Iterate over the path segments below the root.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        let (head, _, _) = split_root(&self.inner);
        self.inner[head.len()..]
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
    }

    /// Get the parent directory.
    ///
    /// Returns `None` at a root and for single-segment relative paths.
    pub fn parent(&self) -> Option<Self> {
        let (head, _, _) = split_root(&self.inner);
        let rest = &self.inner[head.len()..];
        if rest.is_empty() || rest == "." {
            return None;
        }

        match rest.rfind('/') {
            Some(idx) => Some(Self {
                inner: format!("{}{}", head, &rest[..idx]),
            }),
            None if !head.is_empty() => Some(Self {
                inner: head.to_string(),
            }),
            None => None,
        }
    }

    /// Iterate from this path up through each parent to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NormalizedPath> {
        std::iter::successors(Some(self.clone()), |p| p.parent())
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.components().last()
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Check if this appears to be a network path (`//server/share`).
    pub fn is_network_path(&self) -> bool {
        self.inner.starts_with("//")
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

/// Split a forward-slash path into its root head, whether that head anchors
/// the path, and the remainder.
///
/// Heads: `//` (UNC), `C:/`, `C:` (drive-relative), `/`, or empty.
/// `pwd` when it is absolute and names the same directory as `physical`,
/// otherwise `physical`.
fn logical_base(pwd: Option<PathBuf>, physical: PathBuf) -> PathBuf {
    match pwd {
        Some(pwd) if pwd.is_absolute() && same_dir(&pwd, &physical) => pwd,
        _ => physical,
    }
}

#[cfg(unix)]
fn same_dir(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.is_dir() && a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_dir(a: &Path, b: &Path) -> bool {
    a == b
}

fn split_root(raw: &str) -> (&str, bool, &str) {
    if raw.starts_with("//") && !raw.starts_with("///") {
        return (&raw[..2], true, &raw[2..]);
    }

    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return if bytes.get(2) == Some(&b'/') {
            (&raw[..3], true, &raw[3..])
        } else {
            (&raw[..2], false, &raw[2..])
        };
    }

    if raw.starts_with('/') {
        (&raw[..1], true, &raw[1..])
    } else {
        ("", false, raw)
    }
}

fn clean(raw: &str) -> String {
    let (head, anchored, rest) = split_root(raw);

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above a root stays at the root
                _ if anchored => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    let body = parts.join("/");
    if head.is_empty() && body.is_empty() {
        ".".to_string()
    } else {
        format!("{head}{body}")
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
