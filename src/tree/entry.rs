use std::fs;
use std::path::PathBuf;

/// Whether an entry is descended into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Other,
}

/// One item returned by listing a directory's immediate contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name (last component of path)
    pub name: String,

    /// Full path, joined onto the listed directory
    pub path: PathBuf,

    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self { name, path, kind }
    }

    /// Build from a `read_dir` item.
    ///
    /// Symlinks take the kind of their target, so a link to a directory is
    /// walked. Anything whose type can't be determined (including dangling
    /// links) is treated as a leaf.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let path = entry.path();
        let is_dir = match entry.file_type() {
            Ok(ft) if ft.is_symlink() => fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false),
            Ok(ft) => ft.is_dir(),
            Err(_) => false,
        };

        Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            kind: if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::Other
            },
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
