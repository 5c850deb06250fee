//! # Codedump
//!
//! `codedump` snapshots a directory tree into one portable Markdown document: an ASCII
//! tree listing of the filesystem followed by the full text of every file, each under a
//! heading naming its path and fenced with a language tag taken from its extension.
//!
//! Entries whose name is in the exclusion set (version control, caches, editor settings)
//! are skipped at every depth, in both the listing and the contents. Files that are not
//! text, or cannot be read, get a one-line placeholder instead of a fenced block. A
//! designated root-level file (`pyproject.toml` by default) is appended at the end.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codedump::{ExportBuilder, BinaryDetection, export_codebase};
//!
//! let options = ExportBuilder::new(".")
//!     .output_file("snapshot.md")
//!     .binary_detection(BinaryDetection::Accurate)
//!     .build();
//!
//! let written = export_codebase(options).expect("Failed to export codebase");
//! println!("Wrote {}", written.display());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{
    build_document, dump_contents, export_codebase, read_appendix, read_file, render_tree,
};
pub use error::ExportError;
pub use options::{
    Appendix, BinaryDetection, DEFAULT_APPENDIX_FILE, DEFAULT_APPENDIX_LANGUAGE, DEFAULT_EXCLUDED,
    DEFAULT_OUTPUT_FILE, ExportBuilder, ExportOptions,
};
pub use types::{Document, FileSection, ReadOutcome};
