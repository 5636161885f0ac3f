//! Folder traversal
//!
//! - `config` - `RenderConfig`, the read-only configuration of a run
//! - `lister` - lists, filters and orders the entries of one folder
//! - `walker` - recursive depth-first rendering with branch prefixes

mod config;
mod lister;
mod utils;
mod walker;

pub use config::{
    DEFAULT_IGNORES, DEFAULT_MAX_ITEMS, MAX_MAX_ITEMS, MIN_MAX_ITEMS, RenderConfig,
};
pub use lister::{ContentLister, DirectoryEntry, EntryKind, sort_entries};
pub use utils::{compare_names, display_name, with_trailing_separator};
pub use walker::{RenderContext, Rendering, TreeWalker, render};
