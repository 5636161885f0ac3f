//! Configuration for rendering a folder

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, TreeError};
use crate::output::OutputFormat;
use crate::style::{Style, SymbolSet};

pub const DEFAULT_MAX_ITEMS: usize = 500;
pub const MIN_MAX_ITEMS: usize = 1;
pub const MAX_MAX_ITEMS: usize = 32768;

/// Names ignored below the root unless the ignore list is replaced.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    ".git",
    ".husky\\_",
    "logs",
    ".angular",
    "coverage",
];

/// Configuration for one rendering run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
    /// Absolute path of the folder to render
    pub root: PathBuf,
    pub style: Style,
    /// Absolute paths excluded from the output, matched exactly
    pub ignores: BTreeSet<PathBuf>,
    /// Keep the filesystem's enumeration order instead of sorting
    pub unsorted: bool,
    pub format: OutputFormat,
    /// Upper bound on folders + files processed
    pub max_items: usize,
    /// Emit colour escapes where the style asks for them
    pub use_color: bool,
}

impl RenderConfig {
    /// Default configuration for `root`, with the default ignores joined onto it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let ignores = DEFAULT_IGNORES.iter().map(|name| root.join(name)).collect();
        Self {
            root,
            style: Style::default(),
            ignores,
            unsorted: false,
            format: OutputFormat::default(),
            max_items: DEFAULT_MAX_ITEMS,
            use_color: true,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the ignore list with the given absolute paths.
    pub fn with_ignores<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.ignores = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Ignore one more entry, given relative to the root.
    pub fn ignore(mut self, name: impl AsRef<Path>) -> Self {
        self.ignores.insert(self.root.join(name));
        self
    }

    pub fn unsorted(mut self, unsorted: bool) -> Self {
        self.unsorted = unsorted;
        self
    }

    pub fn as_list(mut self, as_list: bool) -> Self {
        self.format = if as_list {
            OutputFormat::List
        } else {
            OutputFormat::Treeview
        };
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn symbols(&self) -> SymbolSet {
        self.style.symbols()
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.ignores.contains(path)
    }

    /// Reject configurations that must never reach a traversal.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_MAX_ITEMS..=MAX_MAX_ITEMS).contains(&self.max_items) {
            return Err(TreeError::InvalidConfiguration(format!(
                "max items must be between {} and {}, got {}",
                MIN_MAX_ITEMS, MAX_MAX_ITEMS, self.max_items
            )));
        }
        if !self.root.is_dir() {
            return Err(TreeError::InvalidConfiguration(format!(
                "root '{}' does not exist or is not a folder",
                self.root.display()
            )));
        }
        Ok(())
    }
}
