use crate::error::ExportError;
use crate::options::{BinaryDetection, ExportOptions};
use crate::tree::{TreeEntry, build_tree_lines};
use crate::types::{Document, FileSection, ReadOutcome};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

struct WalkedEntry {
    path: PathBuf,
    relative: PathBuf,
    depth: usize,
    is_dir: bool,
}

struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
    excluded: BTreeSet<String>,
    output_path: PathBuf,
}
impl Walker {
    /// Walks everything under `root` in pre-order with siblings sorted by name,
    /// pruning any entry whose name is excluded and the output file itself.
    fn new(root: &Path, options: &ExportOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let excluded = options.excluded.clone();
        let output_path = root.join(&options.output_file);
        let (filter_excluded, filter_output) = (excluded.clone(), output_path.clone());
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            if entry.path() == filter_output.as_path() {
                return false;
            }
            !entry
                .file_name()
                .to_str()
                .is_some_and(|name| filter_excluded.contains(name))
        });
        Self {
            inner: builder.build(),
            root: root.to_path_buf(),
            excluded,
            output_path,
        }
    }
    /// Walk errors tied to one entry (dangling links, loops, unreadable
    /// directories) are logged and the entry is kept as a leaf.
    fn collect_entries(self) -> Result<Vec<WalkedEntry>, ExportError> {
        let mut entries: Vec<WalkedEntry> = Vec::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Walk error, continuing: {}", err);
                    let Some(path) = error_path(&err) else {
                        continue;
                    };
                    if entries.last().is_some_and(|e| e.path.as_path() == path) {
                        continue;
                    }
                    if let Some(leaf) =
                        leaf_entry(&self.root, &self.excluded, &self.output_path, path)
                    {
                        entries.push(leaf);
                    }
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|_| {
                    ExportError::Walk(format!(
                        "{} is not under {}",
                        entry.path().display(),
                        self.root.display()
                    ))
                })?
                .to_path_buf();
            entries.push(WalkedEntry {
                path: entry.path().to_path_buf(),
                relative,
                depth: entry.depth(),
                is_dir: entry.file_type().is_some_and(|t| t.is_dir()),
            });
        }
        Ok(entries)
    }
}

/// Path of the entry a walk error refers to, if it refers to one.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } => error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

fn leaf_entry(
    root: &Path,
    excluded: &BTreeSet<String>,
    output_path: &Path,
    path: &Path,
) -> Option<WalkedEntry> {
    if path == output_path {
        return None;
    }
    let relative = path.strip_prefix(root).ok()?;
    let hidden = relative
        .components()
        .any(|c| c.as_os_str().to_str().is_some_and(|name| excluded.contains(name)));
    let depth = relative.components().count();
    if hidden || depth == 0 {
        return None;
    }
    Some(WalkedEntry {
        path: path.to_path_buf(),
        relative: relative.to_path_buf(),
        depth,
        is_dir: false,
    })
}

fn resolve_root(options: &ExportOptions) -> Result<PathBuf, ExportError> {
    if !options.root.is_dir() {
        return Err(ExportError::MissingRoot(options.root.clone()));
    }
    fs::canonicalize(&options.root).map_err(|e| ExportError::io(&options.root, e))
}

/// Reads a file as text, classifying non-text and unreadable files instead of failing.
pub fn read_file(path: &Path, binary_detection: BinaryDetection) -> ReadOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return ReadOutcome::Failed(e.to_string()),
    };
    if binary_detection == BinaryDetection::Accurate
        && content_inspector::inspect(&bytes).is_binary()
    {
        return ReadOutcome::Binary;
    }
    match String::from_utf8(bytes) {
        Ok(text) => ReadOutcome::Text(text),
        Err(_) => ReadOutcome::Binary,
    }
}

fn language_tag(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(feature = "logging")]
fn log_outcome(path: &Path, outcome: &ReadOutcome) {
    match outcome {
        ReadOutcome::Text(_) => tracing::debug!("Read {}", path.display()),
        ReadOutcome::Binary => tracing::debug!("Non-text file skipped: {}", path.display()),
        ReadOutcome::Failed(e) => tracing::warn!("Failed to read {}: {}", path.display(), e),
    }
}

fn read_section(
    path: &Path,
    relative: PathBuf,
    language: String,
    options: &ExportOptions,
) -> FileSection {
    let outcome = read_file(path, options.binary_detection);
    #[cfg(feature = "logging")]
    log_outcome(path, &outcome);
    FileSection {
        path: relative,
        language,
        outcome,
    }
}

fn tree_at(root: &Path, options: &ExportOptions) -> Result<Vec<String>, ExportError> {
    let entries: Vec<TreeEntry> = Walker::new(root, options)
        .collect_entries()?
        .into_iter()
        .map(|e| TreeEntry {
            depth: e.depth,
            name: e
                .relative
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            is_dir: e.is_dir,
        })
        .collect();
    Ok(build_tree_lines(&entries))
}

fn contents_at(root: &Path, options: &ExportOptions) -> Result<Vec<FileSection>, ExportError> {
    let sections = Walker::new(root, options)
        .collect_entries()?
        .into_iter()
        .filter(|e| e.path.is_file())
        .map(|e| {
            let language = language_tag(&e.relative);
            read_section(&e.path, e.relative, language, options)
        })
        .collect();
    Ok(sections)
}

fn appendix_at(root: &Path, options: &ExportOptions) -> Option<FileSection> {
    let appendix = options.appendix.as_ref()?;
    let path = root.join(&appendix.file_name);
    if !path.exists() {
        return None;
    }
    Some(read_section(
        &path,
        PathBuf::from(&appendix.file_name),
        appendix.language.clone(),
        options,
    ))
}

/// Renders the tree listing of the root directory, one string per line.
pub fn render_tree(options: &ExportOptions) -> Result<Vec<String>, ExportError> {
    let root = resolve_root(options)?;
    tree_at(&root, options)
}

/// Reads every non-excluded file under the root, in sorted path order.
pub fn dump_contents(options: &ExportOptions) -> Result<Vec<FileSection>, ExportError> {
    let root = resolve_root(options)?;
    contents_at(&root, options)
}

/// Reads the configured appendix file if it sits directly in the root.
///
/// Exclusions do not apply here, so the file may also appear among the regular sections.
pub fn read_appendix(options: &ExportOptions) -> Result<Option<FileSection>, ExportError> {
    let root = resolve_root(options)?;
    Ok(appendix_at(&root, options))
}

pub fn build_document(options: &ExportOptions) -> Result<Document, ExportError> {
    let root = resolve_root(options)?;
    build_at(&root, options)
}

fn build_at(root: &Path, options: &ExportOptions) -> Result<Document, ExportError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Building document for root: {}", root.display());
    let tree = tree_at(root, options)?;
    let sections = contents_at(root, options)?;
    let appendix = appendix_at(root, options);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Collected {} tree lines and {} file sections",
        tree.len(),
        sections.len()
    );
    Ok(Document {
        tree,
        sections,
        appendix,
    })
}

/// Builds the document and writes it once to `root/output_file`.
pub fn export_codebase(options: ExportOptions) -> Result<PathBuf, ExportError> {
    let root = resolve_root(&options)?;
    let document = build_at(&root, &options)?;
    let output_path = root.join(&options.output_file);
    crate::output::write_document(&document, &output_path)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {}", output_path.display());
    Ok(output_path)
}
