//! CLI entry point for count

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use count::{ConsoleFormatter, CountConfig, Counter, JsonCollector, OutputConfig, ReportDepth};
use tracing_subscriber::EnvFilter;

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

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "count")]
#[command(about = "Counter of text file lines, grouped by extension")]
#[command(version)]
struct Args {
    /// List of paths to count (default: current directory)
    #[arg(short = 'p', long = "paths", value_delimiter = ',')]
    paths: Vec<PathBuf>,

    /// File extension for exclusive counting, including the dot (e.g. .go)
    #[arg(short = 'e', long = "ext", value_name = "EXTENSION")]
    ext: Option<String>,

    /// File names, extensions or glob patterns to exclude from counting
    #[arg(short = 'E', long = "excludes", value_delimiter = ',')]
    excludes: Vec<String>,

    /// Directory level to report at (0 = one report for everything, max 255)
    #[arg(
        short = 't',
        long = "tree",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    tree: i64,

    /// Output reports as a JSON array
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log skipped files and traversal details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = CountConfig::new()
        .paths(args.paths)
        .ext(args.ext.unwrap_or_default())
        .excludes(args.excludes)
        .depth(ReportDepth::from_level(args.tree));
    let counter = Counter::new(config);

    let result = if args.json {
        counter.run(&mut JsonCollector::new())
    } else {
        let output_config = OutputConfig::color(should_use_color(args.color));
        counter.run(&mut ConsoleFormatter::new(output_config))
    };

    if let Err(e) = result {
        eprintln!("count: {}", e);
        process::exit(1);
    }
}
