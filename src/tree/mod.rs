mod entry;
mod listing;
mod prefix;
mod printer;

pub use entry::{DirectoryEntry, EntryKind};
pub use listing::{list_directory, sort_entries, Listing};
pub use prefix::{connector, Indent, PrefixState, BLANK, BRANCH, LAST_BRANCH, PIPE};
pub use printer::{render_tree, TreePrinter, DENIED_MARKER, UNREADABLE_MARKER};
