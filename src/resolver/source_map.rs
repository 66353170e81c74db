//! Source map file naming

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{ResolveError, ResolveResult};

const JS_SUFFIX: &str = ".js";
const MAP_SUFFIX: &str = ".map";
const JS_MAP_SUFFIX: &str = ".js.map";

/// Suffix found at the end of a user supplied source map file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapNameSuffix {
    /// `foo`, `foo.txt`
    NoExtension,
    /// `foo.js`
    JsOnly,
    /// `foo.js.map`
    JsMapAlready,
}

impl MapNameSuffix {
    pub fn classify(file_name: &str) -> Self {
        if file_name.ends_with(JS_MAP_SUFFIX) {
            MapNameSuffix::JsMapAlready
        } else if file_name.ends_with(JS_SUFFIX) {
            MapNameSuffix::JsOnly
        } else {
            MapNameSuffix::NoExtension
        }
    }

    /// What must be appended to reach a `.js.map` name
    pub fn missing_suffix(self) -> &'static str {
        match self {
            MapNameSuffix::NoExtension => JS_MAP_SUFFIX,
            MapNameSuffix::JsOnly => MAP_SUFFIX,
            MapNameSuffix::JsMapAlready => "",
        }
    }
}

/// Normalize a map file name so it ends in `.js.map`
pub fn normalize_map_file_name(file_name: &str) -> String {
    let suffix = MapNameSuffix::classify(file_name).missing_suffix();
    format!("{}{}", file_name, suffix)
}

/// Compute the source map path for `code_output_path`.
///
/// Without a name the map sits next to the code as `<code>.map`. A name may
/// carry sub-directories, which are kept below the code file's directory.
pub fn source_map_path(code_output_path: &Path, map_name_or_path: Option<&str>) -> ResolveResult<PathBuf> {
    if code_output_path.as_os_str().is_empty() {
        return Err(ResolveError::invalid_argument(
            "Output code path must not be empty",
        ));
    }

    let name = match map_name_or_path {
        Some(name) if !name.is_empty() => name,
        _ => {
            let mut path: OsString = code_output_path.as_os_str().to_owned();
            path.push(MAP_SUFFIX);
            return Ok(PathBuf::from(path));
        }
    };

    let name_path = Path::new(name);
    if name_path.has_root() {
        return Err(ResolveError::invalid_argument(format!(
            "Source map file name '{}' must be relative to the output code directory",
            name
        )));
    }

    // `name` is UTF-8, so the lossy conversion always borrows
    let file_name = name_path
        .file_name()
        .ok_or_else(|| {
            ResolveError::invalid_argument(format!(
                "Source map file name '{}' has no file name component",
                name
            ))
        })?
        .to_string_lossy();

    let mut path = code_output_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    if let Some(sub_dir) = name_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        path.push(sub_dir);
    }
    path.push(normalize_map_file_name(&file_name));

    Ok(path)
}
