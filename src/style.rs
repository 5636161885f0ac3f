//! Symbol styles for folders and files

use clap::ValueEnum;
use serde::Serialize;

/// Named set of glyphs used in front of folder and file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// No symbols
    #[default]
    None,
    /// Outlined symbols
    Wireframe,
    /// Filled monochrome symbols
    Black,
    /// Coloured emoji symbols, directories highlighted in list mode
    Colored,
}

/// Glyphs for an empty folder, a non-empty folder and a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub closed: &'static str,
    pub open: &'static str,
    pub file: &'static str,
}

impl Style {
    pub fn symbols(self) -> SymbolSet {
        match self {
            Style::None => SymbolSet {
                closed: "",
                open: "",
                file: "",
            },
            Style::Wireframe => SymbolSet {
                closed: "🗀  ",
                open: "🗁  ",
                file: "🗋",
            },
            Style::Black => SymbolSet {
                closed: "🖿 ",
                open: "🖿 ",
                file: "🗎",
            },
            Style::Colored => SymbolSet {
                closed: "📁 ",
                open: "📂 ",
                file: "📄",
            },
        }
    }
}

impl SymbolSet {
    /// Folder glyph, depending on whether the folder has any listed content.
    pub fn folder(&self, is_empty: bool) -> &'static str {
        if is_empty { self.closed } else { self.open }
    }

    pub fn has_folder_symbols(&self) -> bool {
        !self.open.is_empty()
    }
}
