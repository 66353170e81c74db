use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::ResolverConfig;
use crate::error::{ResolveError, ResolveResult};
use crate::input::filter::{is_code_file, is_excluded};

/// Find code files in a directory. If recursive is true, use walkdir; otherwise list one level.
///
/// Results are sorted so every run plans outputs in the same order.
pub fn find_input_files(dir: &Path, config: &ResolverConfig, recursive: bool) -> ResolveResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    if recursive {
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !entry_excluded(entry, config));

        for entry in walker {
            let entry = entry?;
            if is_code_file(entry.path(), config) {
                files.push(entry.into_path());
            }
        }
    } else {
        let entries = fs::read_dir(dir).map_err(|e| ResolveError::io(e.to_string(), Some(dir.to_path_buf())))?;
        for entry in entries {
            let entry = entry.map_err(|e| ResolveError::io(e.to_string(), Some(dir.to_path_buf())))?;
            let excluded = entry.file_name().to_str().is_some_and(|name| is_excluded(name, config));
            let path = entry.path();
            if !excluded && is_code_file(&path, config) {
                files.push(path);
            }
        }
        files.sort();
    }

    debug!("found {} input files under {}", files.len(), dir.display());
    Ok(files)
}

fn entry_excluded(entry: &DirEntry, config: &ResolverConfig) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| is_excluded(name, config))
}
