//! Internal module for building a tree listing from walked entries.

const MID: &str = "├── ";
const LAST: &str = "└── ";
const BAR: &str = "│   ";
const BLANK: &str = "    ";

/// A walked entry as seen by the tree builder.
#[derive(Debug, Clone)]
pub(crate) struct TreeEntry {
    /// Number of components below the root; immediate children have depth 1.
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}

/// Builds tree lines from entries in pre-order with siblings sorted by name.
///
/// The last sibling at each level gets the corner connector, every other sibling
/// the tee. Children are indented with a bar filler below a mid sibling and with
/// blanks below a last one.
pub(crate) fn build_tree_lines(entries: &[TreeEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len());
    render_level(entries, 1, "", &mut lines);
    lines
}

fn render_level(entries: &[TreeEntry], depth: usize, prefix: &str, lines: &mut Vec<String>) {
    let siblings: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.depth == depth)
        .map(|(i, _)| i)
        .collect();

    for (n, &index) in siblings.iter().enumerate() {
        let entry = &entries[index];
        let is_last = n + 1 == siblings.len();
        let connector = if is_last { LAST } else { MID };
        lines.push(format!("{}{}{}", prefix, connector, entry.name));

        if entry.is_dir {
            let end = siblings.get(n + 1).copied().unwrap_or(entries.len());
            let filler = if is_last { BLANK } else { BAR };
            let child_prefix = format!("{}{}", prefix, filler);
            render_level(&entries[index + 1..end], depth + 1, &child_prefix, lines);
        }
    }
}
