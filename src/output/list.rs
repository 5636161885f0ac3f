//! Flat list formatter

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{EntryKind, with_trailing_separator};

use super::{Entry, EntryFormatter};

/// Renders the absolute path of every entry, ignoring indent, connector and
/// symbol. Folders end with the path separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFormatter {
    highlight_folders: bool,
}

impl ListFormatter {
    pub fn new(highlight_folders: bool) -> Self {
        Self { highlight_folders }
    }
}

impl EntryFormatter for ListFormatter {
    fn write_entry(&self, out: &mut dyn WriteColor, entry: &Entry<'_>) -> io::Result<()> {
        match entry.kind {
            EntryKind::Directory => {
                let text = with_trailing_separator(entry.path);
                if self.highlight_folders {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_intense(true))?;
                    write!(out, "{}", text)?;
                    out.reset()?;
                    writeln!(out)
                } else {
                    writeln!(out, "{}", text)
                }
            }
            EntryKind::File => writeln!(out, "{}", entry.path.display()),
        }
    }
}
