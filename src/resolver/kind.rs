//! Filesystem kind probing and raw path classification

use std::path::{is_separator, Component, Path, PathBuf};

use crate::config::ResolverConfig;

/// What a raw path currently denotes on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Absent,
}

/// Source of filesystem metadata for raw path classification
pub trait FsProbe {
    fn kind(&self, path: &Path) -> PathKind;
}

/// Probe backed by `std::fs::metadata`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFsProbe;

impl FsProbe for StdFsProbe {
    fn kind(&self, path: &Path) -> PathKind {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            Ok(_) => PathKind::File,
            Err(_) => PathKind::Absent,
        }
    }
}

/// Classified raw output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// An explicit output file
    File(PathBuf),
    /// A directory receiving one file per input
    Directory(PathBuf),
    /// No output given; outputs are derived from the input
    Absent,
}

impl OutputTarget {
    /// Classify the raw output path.
    ///
    /// A trailing separator always means a directory and an existing entry
    /// keeps its real kind. A path that does not exist yet is a file only
    /// when its last segment carries one of the configured code extensions,
    /// so `out/foo.bar` stays a directory.
    pub fn classify(raw: Option<&Path>, config: &ResolverConfig, probe: &dyn FsProbe) -> Self {
        let Some(raw) = raw else {
            return OutputTarget::Absent;
        };

        let path = raw.to_path_buf();
        if has_trailing_separator(raw) {
            return OutputTarget::Directory(path);
        }

        match probe.kind(raw) {
            PathKind::Directory => OutputTarget::Directory(path),
            PathKind::File => OutputTarget::File(path),
            PathKind::Absent => {
                let names_code_file = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| config.is_code_extension(ext));
                if names_code_file {
                    OutputTarget::File(path)
                } else {
                    OutputTarget::Directory(path)
                }
            }
        }
    }
}

/// True when the path text ends with a separator or a final `.` segment,
/// e.g. `out/` or `out/.`
pub fn has_trailing_separator(path: &Path) -> bool {
    let text = path.as_os_str().to_string_lossy();
    let mut chars = text.chars().rev();
    match chars.next() {
        Some(c) if is_separator(c) => true,
        Some('.') => chars.next().map_or(true, is_separator),
        _ => false,
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding normal segment where there is one. No filesystem access.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
