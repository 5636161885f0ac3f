//! CLI entry point for treefolder

use std::io::{self, IsTerminal, Write};
use std::path::{Component, Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use log::debug;
use treefolder::tree::{DEFAULT_MAX_ITEMS, MAX_MAX_ITEMS, MIN_MAX_ITEMS};
use treefolder::{
    RenderConfig, Rendering, Style, TreeError, print_debug, print_limit_report, print_stats,
    render,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Whether a colour-related environment variable is set to a non-empty value.
fn env_flag(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|value| !value.is_empty())
}

/// Decide on colour escapes for `mode`.
///
/// In auto mode `NO_COLOR` wins over `FORCE_COLOR`; otherwise colour needs
/// a terminal on stdout that is not `TERM=dumb`.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto if env_flag("NO_COLOR") => false,
        ColorMode::Auto if env_flag("FORCE_COLOR") => true,
        ColorMode::Auto => {
            let dumb = std::env::var_os("TERM").is_some_and(|term| term.as_os_str() == "dumb");
            !dumb && io::stdout().is_terminal()
        }
    }
}

fn parse_max_items(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (MIN_MAX_ITEMS..=MAX_MAX_ITEMS).contains(n))
        .ok_or_else(|| {
            format!(
                "[BAD LIMIT] the value of '--max-items' must be a number from {} to {}",
                MIN_MAX_ITEMS, MAX_MAX_ITEMS
            )
        })
}

#[derive(Parser, Debug)]
#[command(name = "treefolder")]
#[command(about = "Display a folder as a treeview or as a flat list of paths")]
#[command(version, disable_version_flag = true)]
struct Args {
    /// Root folder to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Symbol style
    #[arg(short, long, value_enum, default_value_t = Style::None)]
    style: Style,

    /// Keep the native order of the filesystem instead of folders first
    #[arg(short, long)]
    unsorted: bool,

    /// Display a flat list of full paths instead of a treeview
    #[arg(short, long)]
    list: bool,

    /// Maximum number of processable items (folders + files), 1 to 32768.
    /// When exceeded, nothing is displayed and the exit code is 1
    #[arg(
        short,
        long = "max-items",
        default_value_t = DEFAULT_MAX_ITEMS,
        value_parser = parse_max_items
    )]
    max_items: usize,

    /// Additionally ignore this name below the root (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Display scan statistics after the output
    #[arg(short = 'b', long)]
    verbose: bool,

    /// Display the configuration and item counters after the output
    #[arg(short, long)]
    debug: bool,

    /// Clear the screen before displaying the result
    #[arg(short, long)]
    clear: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Absolute form of `path` with `.` and `..` folded lexically.
///
/// Symlinks are not followed, so the root keeps the name it was given. A
/// missing root is reported by validation.
fn resolve_root(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Print the rendered tree, then the optional statistics and debug reports.
fn print_output(
    args: &Args,
    config: &RenderConfig,
    rendering: &Rendering,
    elapsed: Duration,
    use_color: bool,
) -> io::Result<()> {
    {
        let mut stdout = io::stdout().lock();
        if args.clear {
            write!(stdout, "\x1Bc")?;
        }
        write!(stdout, "{}", rendering.output)?;
        stdout.flush()?;
    }

    if args.verbose {
        println!();
        print_stats(&rendering.counters, elapsed, use_color)?;
    }
    if args.debug {
        println!();
        print_debug(config, &rendering.counters, use_color)?;
    }
    Ok(())
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        let code = match e.kind() {
            ErrorKind::ValueValidation => 1,
            _ => e.exit_code(),
        };
        let _ = e.print();
        process::exit(code);
    });
    init_logging(args.debug);

    let use_color = should_use_color(args.color);
    let root = resolve_root(&args.path);

    let config = args
        .ignore
        .iter()
        .fold(RenderConfig::new(root), |config, name| config.ignore(name))
        .with_style(args.style)
        .unsorted(args.unsorted)
        .as_list(args.list)
        .with_max_items(args.max_items)
        .with_color(use_color);
    debug!("configuration: {:?}", config);

    if let Err(e) = config.validate() {
        eprintln!("treefolder: {}", e);
        process::exit(1);
    }

    let started = Instant::now();
    let rendering = match render(&config) {
        Ok(r) => r,
        Err(TreeError::LimitExceeded {
            counters,
            max_items,
        }) => {
            if let Err(e) = print_limit_report(&counters, max_items, use_color) {
                eprintln!("treefolder: error writing output: {}", e);
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("treefolder: {}", e);
            process::exit(1);
        }
    };
    let elapsed = started.elapsed();

    let result = print_output(&args, &config, &rendering, elapsed, use_color);
    if let Err(e) = result {
        eprintln!("treefolder: error writing output: {}", e);
        process::exit(1);
    }
}
