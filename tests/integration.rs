use codedump::output::{BINARY_PLACEHOLDER, render_document};
use codedump::{ExportBuilder, ExportError, build_document, export_codebase};
use std::fs;
use tempfile::tempdir;
/// Returns the text between the fence opened right after `heading` and its closing fence.
fn fenced_after(doc: &str, heading: &str, lang: &str) -> String {
    let open = format!("{}\n```{}\n", heading, lang);
    let start = doc.find(&open).expect("section heading not found") + open.len();
    let end = start + doc[start..].find("\n```").expect("closing fence not found");
    doc[start..end].to_string()
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/c.py"), "print(1)").unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/x"), "secret").unwrap();
    let written = export_codebase(ExportBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        written,
        fs::canonicalize(dir.path()).unwrap().join("full_codebase.md")
    );
    let doc = fs::read_to_string(&written).unwrap();
    let expected = [
        "# Codebase Structure",
        "",
        "```",
        "./",
        "├── a.txt",
        "└── b",
        "    └── c.py",
        "```",
        "",
        "# Codebase Contents",
        "",
        "## File: `a.txt`",
        "```txt",
        "hello",
        "```",
        "",
        "## File: `b/c.py`",
        "```py",
        "print(1)",
        "```",
        "",
    ]
    .join("\n");
    assert_eq!(doc, expected);
    assert!(!doc.contains("secret"));
}
#[test]
fn integration_fenced_content_round_trips() {
    let dir = tempdir().unwrap();
    let sources = [
        ("crlf.txt", "one\r\ntwo\r\n"),
        ("empty.cfg", ""),
        ("src/lib.rs", "pub fn f() -> u8 {\n    1\n}\n\n"),
    ];
    fs::create_dir(dir.path().join("src")).unwrap();
    for (name, content) in sources {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let doc = render_document(&build_document(&ExportBuilder::new(dir.path()).build()).unwrap());
    assert_eq!(
        fenced_after(&doc, "## File: `crlf.txt`", "txt"),
        "one\r\ntwo\r\n"
    );
    assert_eq!(fenced_after(&doc, "## File: `empty.cfg`", "cfg"), "");
    assert_eq!(
        fenced_after(&doc, "## File: `src/lib.rs`", "rs"),
        "pub fn f() -> u8 {\n    1\n}\n\n"
    );
}
#[test]
fn integration_binary_file_gets_placeholder_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.bin"), [0xc3u8, 0x28, 0xa0, 0xa1]).unwrap();
    fs::write(dir.path().join("readme.txt"), "still here").unwrap();
    let path = export_codebase(ExportBuilder::new(dir.path()).build()).unwrap();
    let doc = fs::read_to_string(path).unwrap();
    assert!(doc.contains(&format!("## File: `blob.bin`\n{}\n", BINARY_PLACEHOLDER)));
    assert!(!doc.contains("```bin"));
    assert_eq!(fenced_after(&doc, "## File: `readme.txt`", "txt"), "still here");
}
#[test]
fn integration_repeated_runs_are_identical() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pkg/sub")).unwrap();
    fs::write(dir.path().join("pkg/sub/a.py"), "a = 1\n").unwrap();
    fs::write(dir.path().join("pkg/b.py"), "b = 2\n").unwrap();
    fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"x\"\n").unwrap();
    let options = ExportBuilder::new(dir.path()).build();
    let first = fs::read_to_string(export_codebase(options.clone()).unwrap()).unwrap();
    let second = fs::read_to_string(export_codebase(options).unwrap()).unwrap();
    assert_eq!(first, second);
    assert!(!first.contains("full_codebase.md"));
}
#[test]
fn integration_appendix_may_repeat() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pyproject.toml"), "[project]").unwrap();
    let doc = render_document(&build_document(&ExportBuilder::new(dir.path()).build()).unwrap());
    assert_eq!(doc.matches("## File: `pyproject.toml`").count(), 2);
    assert!(doc.ends_with("## File: `pyproject.toml`\n```toml\n[project]\n```\n"));
}
#[test]
fn integration_appendix_ignores_exclusions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pyproject.toml"), "[project]").unwrap();
    let options = ExportBuilder::new(dir.path())
        .excluded(["pyproject.toml"])
        .build();
    let document = build_document(&options).unwrap();
    assert!(document.tree.is_empty());
    assert!(document.sections.is_empty());
    assert!(document.appendix.is_some());
}
#[test]
fn integration_unreadable_appendix_gets_error_placeholder() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("pyproject.toml")).unwrap();
    let doc = render_document(&build_document(&ExportBuilder::new(dir.path()).build()).unwrap());
    assert!(doc.contains("## File: `pyproject.toml`\n_[Error reading file: "));
    assert!(!doc.contains("```toml"));
}
#[test]
fn integration_custom_output_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("snapshot.md"), "stale").unwrap();
    let options = ExportBuilder::new(dir.path())
        .output_file("snapshot.md")
        .build();
    let path = export_codebase(options).unwrap();
    assert!(path.ends_with("snapshot.md"));
    let doc = fs::read_to_string(path).unwrap();
    assert!(!doc.contains("stale"));
    assert!(doc.contains("## File: `main.rs`"));
}
#[test]
fn integration_missing_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = export_codebase(ExportBuilder::new(&missing).build()).unwrap_err();
    assert!(matches!(err, ExportError::MissingRoot(ref p) if *p == missing));
    assert!(!missing.join("full_codebase.md").exists());
}
#[test]
fn integration_root_is_a_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let err = build_document(&ExportBuilder::new(&file).build()).unwrap_err();
    assert!(matches!(err, ExportError::MissingRoot(_)));
}
#[test]
fn integration_write_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let options = ExportBuilder::new(dir.path())
        .output_file("no-such-dir/out.md")
        .build();
    let err = export_codebase(options).unwrap_err();
    assert!(matches!(err, ExportError::Write { .. }));
}
#[cfg(unix)]
#[test]
fn integration_dangling_link_with_follow_links() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();
    let options = ExportBuilder::new(dir.path()).follow_links(true).build();
    let document = build_document(&options).unwrap();
    assert_eq!(document.tree, vec!["├── a.txt", "└── dangling"]);
    assert_eq!(document.sections.len(), 1);
    let path = export_codebase(options).unwrap();
    assert!(!fs::read_to_string(path).unwrap().contains("## File: `dangling`"));
}
