//! Treefolder - display a folder as a treeview or as a flat list of paths

pub mod error;
pub mod output;
pub mod stats;
pub mod style;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{Entry, EntryFormatter, ListFormatter, OutputFormat, TreeviewFormatter};
pub use stats::{Counters, print_debug, print_limit_report, print_stats};
pub use style::{Style, SymbolSet};
pub use tree::{
    ContentLister, DirectoryEntry, EntryKind, RenderConfig, Rendering, TreeWalker, render,
};
