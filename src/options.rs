use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Names skipped at every depth of the walk, matched exactly against a single path component.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    ".git",
    "__pycache__",
    ".venv",
    ".idea",
    ".mypy_cache",
    ".vscode",
    ".github",
    "node_modules",
];
pub const DEFAULT_OUTPUT_FILE: &str = "full_codebase.md";
pub const DEFAULT_APPENDIX_FILE: &str = "pyproject.toml";
pub const DEFAULT_APPENDIX_LANGUAGE: &str = "toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Only content that is not valid UTF-8 is treated as non-text.
    #[default]
    Utf8,
    /// Also treat valid UTF-8 as non-text when `content_inspector` classifies it as binary.
    Accurate,
}

/// A root-level file appended after the main listing, regardless of exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appendix {
    pub file_name: String,
    pub language: String,
}
impl Default for Appendix {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_APPENDIX_FILE.to_string(),
            language: DEFAULT_APPENDIX_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub root: PathBuf,
    pub output_file: PathBuf,
    pub excluded: BTreeSet<String>,
    /// When false, a symlinked directory is listed as a leaf and not descended into.
    /// Symlinked files are dumped either way. Dangling links and link loops are
    /// listed as leaves without content.
    pub follow_links: bool,
    pub binary_detection: BinaryDetection,
    pub appendix: Option<Appendix>,
}
impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            follow_links: false,
            binary_detection: BinaryDetection::default(),
            appendix: Some(Appendix::default()),
        }
    }
}
#[derive(Debug, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}
impl ExportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ExportOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.options.output_file = file.into();
        self
    }
    pub fn excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.excluded = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn appendix(mut self, file_name: impl Into<String>, language: impl Into<String>) -> Self {
        self.options.appendix = Some(Appendix {
            file_name: file_name.into(),
            language: language.into(),
        });
        self
    }
    pub fn no_appendix(mut self) -> Self {
        self.options.appendix = None;
        self
    }
    pub fn build(self) -> ExportOptions {
        self.options
    }
}
