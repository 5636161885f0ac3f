//! TreeWalker - recursive, depth-first rendering of a folder

use std::path::Path;

use log::trace;
use termcolor::{Buffer, WriteColor};

use crate::error::Result;
use crate::output::{Entry, EntryFormatter};
use crate::stats::Counters;
use crate::style::SymbolSet;

use super::config::RenderConfig;
use super::lister::{ContentLister, EntryKind};

const LAST_BRANCH: &str = "└─";
const MIDDLE_BRANCH: &str = "├─";
const LAST_CONTINUATION: &str = "   ";
const MIDDLE_CONTINUATION: &str = "│  ";

/// Positional state of the folder being rendered.
///
/// Derived, never mutated: each descent builds a fresh context for the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub indent: String,
    pub is_root: bool,
    pub is_last: bool,
}

impl RenderContext {
    pub fn root() -> Self {
        Self {
            indent: String::new(),
            is_root: true,
            is_last: true,
        }
    }

    /// Indent for the contents of this folder.
    pub fn child_indent(&self) -> String {
        if self.is_root {
            self.indent.clone()
        } else if self.is_last {
            format!("{}{}", self.indent, LAST_CONTINUATION)
        } else {
            format!("{}{}", self.indent, MIDDLE_CONTINUATION)
        }
    }

    /// Context for a sub-folder of this folder.
    pub fn child(&self, is_last: bool) -> Self {
        Self {
            indent: self.child_indent(),
            is_root: false,
            is_last,
        }
    }
}

fn branch(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { MIDDLE_BRANCH }
}

/// Result of a complete rendering run.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub output: String,
    pub counters: Counters,
}

/// Walks a folder depth-first, pre-order, writing one line per folder and file.
pub struct TreeWalker<'a> {
    config: &'a RenderConfig,
    lister: ContentLister<'a>,
    symbols: SymbolSet,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            lister: ContentLister::new(config),
            symbols: config.symbols(),
        }
    }

    /// Walk from the configured root, writing every line to `out`.
    ///
    /// Counters are updated as entries are visited and the max-items guard is
    /// checked after each increment, so on error `counters` holds the state at
    /// the point of failure.
    pub fn walk(
        &self,
        formatter: &dyn EntryFormatter,
        out: &mut dyn WriteColor,
        counters: &mut Counters,
    ) -> Result<()> {
        self.walk_folder(&self.config.root, &RenderContext::root(), formatter, out, counters)
    }

    fn walk_folder(
        &self,
        path: &Path,
        ctx: &RenderContext,
        formatter: &dyn EntryFormatter,
        out: &mut dyn WriteColor,
        counters: &mut Counters,
    ) -> Result<()> {
        let contents = self.lister.list(path, counters)?;

        let symbol = self.symbols.folder(contents.is_empty());
        let connector = if ctx.is_root {
            String::new()
        } else if self.symbols.has_folder_symbols() {
            branch(ctx.is_last).to_string()
        } else {
            format!("{} ", branch(ctx.is_last))
        };
        trace!("folder {}", path.display());
        formatter.write_entry(
            out,
            &Entry {
                indent: &ctx.indent,
                connector: &connector,
                symbol,
                path,
                kind: EntryKind::Directory,
            },
        )?;

        let child_indent = ctx.child_indent();
        let file_symbol = format!("{} ", self.symbols.file);
        let last_index = contents.len().saturating_sub(1);

        for (index, item) in contents.iter().enumerate() {
            let is_last = index == last_index;
            let item_path = item.path();
            match item.kind {
                EntryKind::Directory => {
                    self.walk_folder(&item_path, &ctx.child(is_last), formatter, out, counters)?;
                }
                EntryKind::File => {
                    counters.record_file();
                    counters.check_limit(self.config.max_items)?;
                    trace!("file {}", item_path.display());
                    formatter.write_entry(
                        out,
                        &Entry {
                            indent: &child_indent,
                            connector: branch(is_last),
                            symbol: &file_symbol,
                            path: &item_path,
                            kind: EntryKind::File,
                        },
                    )?;
                }
            }
        }

        counters.record_folder();
        counters.check_limit(self.config.max_items)?;
        Ok(())
    }
}

/// Render the configured root into a string.
///
/// The configuration is validated first. Output is buffered in full: on any
/// error nothing of the partial tree is returned.
pub fn render(config: &RenderConfig) -> Result<Rendering> {
    config.validate()?;

    let formatter = config.format.formatter(config.style);
    let mut buffer = if config.use_color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    let mut counters = Counters::new();

    TreeWalker::new(config).walk(formatter.as_ref(), &mut buffer, &mut counters)?;

    Ok(Rendering {
        output: String::from_utf8_lossy(buffer.as_slice()).into_owned(),
        counters,
    })
}
