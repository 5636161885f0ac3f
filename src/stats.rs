//! Run counters and their display
//!
//! This module tracks how many folders and files a run has visited and how
//! many entries were filtered out, enforces the max-items guard, and formats
//! the verbose, debug and limit-reached reports.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::{Result, TreeError};
use crate::tree::RenderConfig;

/// Counters accumulated during a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    /// Folders fully processed, root included
    pub folders: usize,
    /// Files visited
    pub files: usize,
    /// Entries removed by the ignore list
    pub ignored: usize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.folders + self.files
    }

    pub fn record_folder(&mut self) {
        self.folders += 1;
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }

    pub fn record_ignored(&mut self) {
        self.ignored += 1;
    }

    /// Max-items guard. A total equal to `max_items` is still accepted.
    pub fn check_limit(&self, max_items: usize) -> Result<()> {
        if self.total() > max_items {
            return Err(TreeError::LimitExceeded {
                counters: *self,
                max_items,
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct CountersReport<'a> {
    #[serde(flatten)]
    counters: &'a Counters,
    total: usize,
    max_items: usize,
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_number<W: WriteColor>(out: &mut W, n: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "{}", n)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_intense(true))
}

/// Write the verbose statistics lines.
pub fn write_stats<W: WriteColor>(
    out: &mut W,
    counters: &Counters,
    elapsed: Duration,
) -> io::Result<()> {
    // Millisecond precision is plenty for a summary line
    let elapsed = Duration::from_millis(elapsed.as_millis() as u64);

    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_intense(true))?;
    write!(out, "Scanned      : ")?;
    write_number(out, counters.folders)?;
    write!(out, " folders and ")?;
    write_number(out, counters.files)?;
    writeln!(out, " files in {}.", humantime::format_duration(elapsed))?;
    write!(out, "Filtered out : ")?;
    write_number(out, counters.ignored)?;
    writeln!(out, " folders or files.")?;
    out.reset()
}

/// Print the verbose statistics to stdout.
pub fn print_stats(counters: &Counters, elapsed: Duration, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    write_stats(&mut stdout, counters, elapsed)
}

/// Render the counters as pretty JSON.
pub fn counters_json(counters: &Counters, max_items: usize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CountersReport {
        counters,
        total: counters.total(),
        max_items,
    })
}

/// Print configuration and counters as JSON to stdout.
pub fn print_debug(config: &RenderConfig, counters: &Counters, use_color: bool) -> io::Result<()> {
    let to_io = |e: serde_json::Error| io::Error::new(io::ErrorKind::Other, e);
    let config_json = serde_json::to_string_pretty(config).map_err(to_io)?;
    let counters_json = counters_json(counters, config.max_items).map_err(to_io)?;

    let mut stdout = StandardStream::stdout(color_choice(use_color));
    let mut header = ColorSpec::new();
    header.set_fg(Some(Color::Blue)).set_intense(true);

    stdout.set_color(&header)?;
    writeln!(stdout, "Treefolder configuration:")?;
    stdout.reset()?;
    writeln!(stdout, "{}", config_json)?;
    stdout.set_color(&header)?;
    writeln!(stdout, "Processed items:")?;
    stdout.reset()?;
    writeln!(stdout, "{}", counters_json)?;
    Ok(())
}

/// Write the report shown when the max-items guard aborts a run.
pub fn write_limit_report<W: WriteColor>(
    out: &mut W,
    counters: &Counters,
    max_items: usize,
) -> io::Result<()> {
    let mut red = ColorSpec::new();
    red.set_fg(Some(Color::Red)).set_intense(true);

    out.set_color(&red)?;
    writeln!(
        out,
        "[LIMIT REACHED] The maximum number of processable items has been reached:"
    )?;
    out.reset()?;
    let json = counters_json(counters, max_items)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", json)?;
    out.set_color(&red)?;
    write!(out, "Please define a higher limit using the ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "'--max-items'")?;
    out.set_color(&red)?;
    writeln!(
        out,
        " command line argument if you want to output more items in the result."
    )?;
    out.reset()
}

/// Print the limit-reached report to stderr.
pub fn print_limit_report(counters: &Counters, max_items: usize, use_color: bool) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    write_limit_report(&mut stderr, counters, max_items)
}
