//! Entry formatting
//!
//! The walker describes every visited folder and file as an [`Entry`] and
//! hands it to an [`EntryFormatter`]. Two formatters exist:
//!
//! - `treeview` - indented branches with connector glyphs and style symbols
//! - `list` - one absolute path per line, folders ending with a separator
//!
//! The formatter is picked once per run from [`OutputFormat`].

mod list;
mod treeview;

use std::io;
use std::path::Path;

use serde::Serialize;
use termcolor::WriteColor;

use crate::style::Style;
use crate::tree::EntryKind;

pub use list::ListFormatter;
pub use treeview::TreeviewFormatter;

/// Everything a formatter may need to render one line.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// Accumulated prefix from the ancestors' branches
    pub indent: &'a str,
    /// Branch glyph for this entry, empty for the root
    pub connector: &'a str,
    /// Style symbol, including its trailing spacing
    pub symbol: &'a str,
    /// Absolute path of the entry
    pub path: &'a Path,
    pub kind: EntryKind,
}

/// Strategy turning an [`Entry`] into one output line.
pub trait EntryFormatter {
    fn write_entry(&self, out: &mut dyn WriteColor, entry: &Entry<'_>) -> io::Result<()>;
}

/// Output layout selected for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Treeview,
    List,
}

impl OutputFormat {
    pub fn formatter(self, style: Style) -> Box<dyn EntryFormatter> {
        match self {
            OutputFormat::Treeview => Box::new(TreeviewFormatter),
            OutputFormat::List => Box::new(ListFormatter::new(style == Style::Colored)),
        }
    }
}
