use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What came of reading a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReadOutcome {
    /// The file decoded as text; holds the raw content.
    Text(String),
    /// The file is not text and its content is omitted.
    Binary,
    /// Reading failed for another reason; holds the error description.
    Failed(String),
}

/// One per-file section of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSection {
    /// Path relative to the root directory.
    pub path: PathBuf,
    /// Fence language tag, empty when the file has no extension.
    pub language: String,
    pub outcome: ReadOutcome,
}

/// The complete document produced by one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Tree listing lines, without the root label.
    pub tree: Vec<String>,
    /// Sections for every non-excluded file, in sorted path order.
    pub sections: Vec<FileSection>,
    /// Trailing section for the root-level appendix file, if it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appendix: Option<FileSection>,
}
