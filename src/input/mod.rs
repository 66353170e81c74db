//! Input discovery: the files a raw input path stands for

pub mod directory;
pub mod filter;

use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;
use crate::error::ResolveResult;
use crate::resolver::PathKind;

/// Expand a classified raw input path into the files to process.
///
/// A file input yields itself regardless of its extension; a directory
/// input is walked for code files.
pub fn collect_input_files(
    raw_input: &Path,
    kind: PathKind,
    config: &ResolverConfig,
    recursive: bool,
) -> ResolveResult<Vec<PathBuf>> {
    match kind {
        PathKind::File => Ok(vec![raw_input.to_path_buf()]),
        PathKind::Directory => directory::find_input_files(raw_input, config, recursive),
        PathKind::Absent => Ok(Vec::new()),
    }
}
