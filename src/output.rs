//! Output rendering for an exported [`Document`].
//!
//! The document is assembled as a list of lines joined with `\n`. File contents are
//! inserted verbatim between the fences, so the text between an opening fence line
//! and the following `\n```` is exactly the file's content.

use crate::{Document, ExportError, FileSection, ReadOutcome};
use std::fs;
use std::path::Path;

pub const STRUCTURE_HEADING: &str = "# Codebase Structure";
pub const CONTENTS_HEADING: &str = "# Codebase Contents";
pub const ROOT_LABEL: &str = "./";
pub const BINARY_PLACEHOLDER: &str = "_[Skipped: binary or non-UTF8 file]_";

const FENCE: &str = "```";

/// Renders the document as Markdown-like text.
pub fn render_document(document: &Document) -> String {
    let mut lines: Vec<String> =
        Vec::with_capacity(document.tree.len() + 4 * document.sections.len() + 8);

    lines.push(STRUCTURE_HEADING.to_string());
    lines.push(String::new());
    lines.push(FENCE.to_string());
    lines.push(ROOT_LABEL.to_string());
    lines.extend(document.tree.iter().cloned());
    lines.push(FENCE.to_string());
    lines.push(String::new());

    lines.push(CONTENTS_HEADING.to_string());
    lines.push(String::new());

    for section in &document.sections {
        push_section(&mut lines, section);
    }
    if let Some(appendix) = &document.appendix {
        push_section(&mut lines, appendix);
    }

    lines.join("\n")
}

/// Renders the document and writes it to `path` in a single write.
pub fn write_document(document: &Document, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let content = render_document(document);
    fs::write(&path, content).map_err(|e| ExportError::write(path.as_ref(), e))?;
    Ok(())
}

/// Formats a path relative to the root with `/` separators.
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn error_placeholder(message: &str) -> String {
    format!("_[Error reading file: {}]_", message)
}

fn push_section(lines: &mut Vec<String>, section: &FileSection) {
    lines.push(format!("## File: `{}`", display_path(&section.path)));
    match &section.outcome {
        ReadOutcome::Text(content) => {
            lines.push(format!("{}{}", FENCE, section.language));
            lines.push(content.clone());
            lines.push(FENCE.to_string());
            lines.push(String::new());
        }
        ReadOutcome::Binary => lines.push(BINARY_PLACEHOLDER.to_string()),
        ReadOutcome::Failed(message) => lines.push(error_placeholder(message)),
    }
}
