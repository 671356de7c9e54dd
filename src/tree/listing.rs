use std::fs;
use std::io;
use std::path::Path;

use super::entry::DirectoryEntry;

/// Outcome of enumerating one directory.
#[derive(Debug)]
pub enum Listing {
    /// Entries in display order
    Entries(Vec<DirectoryEntry>),
    /// Not allowed to enumerate the directory
    Denied,
    /// Any other OS failure while opening or reading the directory
    Failed(io::Error),
}

impl Listing {
    fn from_error(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Listing::Denied
        } else {
            Listing::Failed(err)
        }
    }
}

/// List the immediate entries of `path`, sorted for display.
///
/// The directory handle is dropped before returning, so no handle is held
/// while the caller descends into children.
pub fn list_directory(path: &Path) -> Listing {
    let read_dir = match fs::read_dir(path) {
        Ok(rd) => rd,
        Err(e) => return Listing::from_error(e),
    };

    let mut entries = Vec::new();
    for item in read_dir {
        match item {
            Ok(entry) => entries.push(DirectoryEntry::from_dir_entry(&entry)),
            Err(e) => return Listing::from_error(e),
        }
    }

    sort_entries(&mut entries);
    Listing::Entries(entries)
}

/// Case-insensitive by name. Stable, so names equal after lowercasing keep
/// their listing order.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by_cached_key(|e| e.name.to_lowercase());
}
