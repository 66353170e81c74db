use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use emitpath::input::{collect_input_files, directory};
use emitpath::{PathKind, ResolverConfig};

fn code_tree() -> TempDir {
    let td = TempDir::new().unwrap();
    fs::create_dir_all(td.path().join("sub.dir")).unwrap();
    fs::create_dir_all(td.path().join("node_modules").join("dep")).unwrap();

    fs::write(td.path().join("b.js"), "").unwrap();
    fs::write(td.path().join("a.mjs"), "").unwrap();
    fs::write(td.path().join("notes.txt"), "").unwrap();
    fs::write(td.path().join("sub.dir").join("c.cjs"), "").unwrap();
    fs::write(td.path().join("node_modules").join("dep").join("index.js"), "").unwrap();
    td
}

#[test]
fn test_find_input_files_nonrecursive() {
    let td = code_tree();
    let files = directory::find_input_files(td.path(), &ResolverConfig::default(), false).unwrap();
    assert_eq!(files, vec![td.path().join("a.mjs"), td.path().join("b.js")]);
}

#[test]
fn test_find_input_files_recursive() {
    let td = code_tree();
    let files = directory::find_input_files(td.path(), &ResolverConfig::default(), true).unwrap();
    assert_eq!(files.len(), 4);
    assert!(files.contains(&td.path().join("sub.dir").join("c.cjs")));
}

#[test]
fn test_find_input_files_honors_exclude() {
    let td = code_tree();
    let config = ResolverConfig::default().with_exclude("node_modules");
    let files = directory::find_input_files(td.path(), &config, true).unwrap();

    assert_eq!(
        files,
        vec![
            td.path().join("a.mjs"),
            td.path().join("b.js"),
            td.path().join("sub.dir").join("c.cjs"),
        ]
    );
}

#[test]
fn test_find_input_files_custom_extensions() {
    let td = code_tree();
    let config = ResolverConfig::default().with_extensions(["txt"]);
    let files = directory::find_input_files(td.path(), &config, true).unwrap();
    assert_eq!(files, vec![td.path().join("notes.txt")]);
}

#[test]
fn test_collect_single_file_input() {
    let td = code_tree();
    let file = td.path().join("notes.txt");
    let files = collect_input_files(&file, PathKind::File, &ResolverConfig::default(), true).unwrap();
    assert_eq!(files, vec![file]);
}
