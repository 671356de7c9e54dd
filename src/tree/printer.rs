use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ErrorPolicy;
use crate::error::{Result, TreeError};

use super::listing::{list_directory, Listing};
use super::prefix::{connector, PrefixState, LAST_BRANCH};

/// Leaf printed in place of a directory we're not allowed to list
pub const DENIED_MARKER: &str = "[Permission Denied]";
/// Leaf printed in place of a directory that failed to list for another reason
pub const UNREADABLE_MARKER: &str = "[Unreadable]";

/// Writes a directory tree, one line per entry, to any writer.
pub struct TreePrinter<W: Write> {
    out: W,
    on_error: ErrorPolicy,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            on_error: ErrorPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Print `root` as given on the first line, followed by its tree.
    ///
    /// The root itself must be an existing directory; nothing is written otherwise.
    pub fn print_root(&mut self, root: &Path) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TreeError::PathNotFound(root.to_path_buf()),
            _ => TreeError::Io {
                path: root.to_path_buf(),
                source: e,
            },
        })?;

        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        writeln!(self.out, "{}", root.display()).map_err(TreeError::Output)?;
        self.print_tree(root, &PrefixState::new())?;
        self.out.flush().map_err(TreeError::Output)
    }

    /// Print the entries below `path`, each line starting with `prefix`.
    ///
    /// A denied listing becomes a placeholder leaf and returns `Ok`, so the
    /// caller carries on with the next sibling.
    pub fn print_tree(&mut self, path: &Path, prefix: &PrefixState) -> Result<()> {
        self.print_listing(path, list_directory(path), prefix)
    }

    fn print_listing(
        &mut self,
        path: &Path,
        listing: Listing,
        prefix: &PrefixState,
    ) -> Result<()> {
        let entries = match listing {
            Listing::Entries(entries) => entries,
            Listing::Denied => {
                tracing::warn!(path = %path.display(), "Permission denied");
                return self.write_line(prefix, LAST_BRANCH, DENIED_MARKER);
            }
            Listing::Failed(err) => match self.on_error {
                ErrorPolicy::Placeholder => {
                    tracing::warn!(path = %path.display(), error = %err, "Unreadable directory");
                    return self.write_line(prefix, LAST_BRANCH, UNREADABLE_MARKER);
                }
                ErrorPolicy::Abort => {
                    return Err(TreeError::Io {
                        path: path.to_path_buf(),
                        source: err,
                    });
                }
            },
        };

        tracing::debug!(path = %path.display(), count = entries.len(), "Listed directory");

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;
            tracing::trace!(path = %entry.path.display(), is_last, "Entry");

            self.write_line(prefix, connector(is_last), &entry.name)?;

            if entry.is_dir() {
                self.print_tree(&entry.path, &prefix.child(is_last))?;
            }
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, prefix: &PrefixState, connector: &str, name: &str) -> Result<()> {
        writeln!(self.out, "{}{}{}", prefix.as_str(), connector, name).map_err(TreeError::Output)
    }
}

/// Render the tree of `root` into a string.
pub fn render_tree(root: &Path, policy: ErrorPolicy) -> Result<String> {
    let mut printer = TreePrinter::new(Vec::new()).with_error_policy(policy);
    printer.print_root(root)?;
    Ok(String::from_utf8_lossy(&printer.into_inner()).into_owned())
}
