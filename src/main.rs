//! hilite - print a source file with marker-based syntax highlighting

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use hilite::config::Config;
use hilite::error::{HiliteError, Result};
use hilite::render;
use hilite::syntax::{highlight, DisplayMode, RuleRegistry, RuleSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    mode: Option<DisplayMode>,
    rules: Option<PathBuf>,
    dump_segments: bool,
    file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hilite=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Some(options) => options,
        None => return Ok(()),
    };

    let file = options
        .file
        .ok_or_else(|| HiliteError::Message("no input file (try --help)".to_string()))?;

    let config = Config::load();
    let mode = options.mode.unwrap_or(config.display_mode);

    let document = fs::read_to_string(&file).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => HiliteError::FileNotFound(file.display().to_string()),
        _ => HiliteError::Io(err),
    })?;

    let explicit_rules;
    let mut registry = RuleRegistry::new();
    let rules: &RuleSet = match &options.rules {
        Some(path) => {
            explicit_rules = RuleSet::load(path)?;
            &explicit_rules
        }
        None => {
            if let Some(dir) = &config.rules_dir {
                if let Err(err) = registry.load_dir(dir) {
                    tracing::warn!("could not read rules dir {}: {}", dir.display(), err);
                }
            }
            tracing::debug!(
                "{} -> {}",
                file.display(),
                registry.detect_language(&file).unwrap_or("default")
            );
            registry.rules_for_path(&file)
        }
    };

    let segments = highlight(&document, rules, mode);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.dump_segments {
        render::dump(&mut out, &segments)
    } else {
        render::render(&mut out, &segments)
    }
}

/// Returns `None` when the invocation was fully handled (help/version)
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("hilite {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--dark" => options.mode = Some(DisplayMode::Dark),
            "--light" => options.mode = Some(DisplayMode::Light),
            "--segments" => options.dump_segments = true,
            "--rules" => {
                let path = iter
                    .next()
                    .ok_or_else(|| HiliteError::Message("--rules needs a file".to_string()))?;
                options.rules = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => {
                return Err(HiliteError::Message(format!("unknown option: {}", other)));
            }
            other => options.file = Some(PathBuf::from(other)),
        }
    }

    Ok(Some(options))
}

fn print_usage() {
    println!("hilite {} - marker-based syntax highlighting", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: hilite [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  --dark           Use the dark palette");
    println!("  --light          Use the light palette");
    println!("  --rules FILE     Use rules from a TOML file instead of the extension");
    println!("  --segments       Print segments instead of colored text");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Rules are picked by extension: .kt/.kts Kotlin, .java Java,");
    println!(".py/.pyw/.pyi Python, anything else the default rules.");
    println!("Settings are read from ~/.hilite.conf (dark-mode, rules-dir).");
}
