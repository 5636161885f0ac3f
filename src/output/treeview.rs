//! Treeview formatter

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::tree::display_name;

use super::{Entry, EntryFormatter};

/// Renders `indent + connector + symbol + name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeviewFormatter;

impl EntryFormatter for TreeviewFormatter {
    fn write_entry(&self, out: &mut dyn WriteColor, entry: &Entry<'_>) -> io::Result<()> {
        writeln!(
            out,
            "{}{}{}{}",
            entry.indent,
            entry.connector,
            entry.symbol,
            display_name(entry.path)
        )
    }
}
