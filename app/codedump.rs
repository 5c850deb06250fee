//! Command-line interface for codedump.
//!
//! Walks a directory and writes the tree listing plus every file's contents
//! into a single Markdown document. Run with no arguments to use every default.

use clap::{Parser, ValueEnum};
use codedump::{BinaryDetection, DEFAULT_OUTPUT_FILE, ExportBuilder, ExportOptions, export_codebase};
use std::path::PathBuf;
use std::process::exit;

/// codedump — snapshot a codebase into one Markdown document
#[derive(Parser)]
#[command(name = "codedump", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file name, written inside the root directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Binary detection strategy
    #[arg(long, value_enum, default_value_t = Detection::Utf8)]
    binary_detection: Detection,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Detection {
    Utf8,
    Accurate,
}

impl From<Detection> for BinaryDetection {
    fn from(d: Detection) -> Self {
        match d {
            Detection::Utf8 => BinaryDetection::Utf8,
            Detection::Accurate => BinaryDetection::Accurate,
        }
    }
}

impl Cli {
    fn into_options(self) -> (ExportOptions, bool) {
        let options = ExportBuilder::new(self.root)
            .output_file(self.output)
            .binary_detection(self.binary_detection.into())
            .follow_links(self.follow_links)
            .build();
        (options, self.verbose)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (options, _verbose) = cli.into_options();

    #[cfg(feature = "logging")]
    init_logging(_verbose);

    match export_codebase(options) {
        Ok(path) => println!("[OK] Codebase exported to: {}", path.display()),
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            exit(1);
        }
    }
}
