//! Output path resolution for code and source map files
//!
//! An [`OutputPathResolver`] is built once per run from the raw input path
//! and the configured raw output path. Both are classified on construction
//! and never probed again, so the resolver can be shared across threads.

pub mod kind;
pub mod source_map;

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::config::ResolverConfig;
use crate::error::{ResolveError, ResolveResult};

pub use kind::{FsProbe, OutputTarget, PathKind, StdFsProbe};
pub use source_map::MapNameSuffix;

/// Classified raw input path. Construction rejects absent inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputRoot {
    File(PathBuf),
    Directory(PathBuf),
}

/// Maps input files to their code and source map output paths
#[derive(Debug, Clone)]
pub struct OutputPathResolver {
    input: InputRoot,
    output: OutputTarget,
    output_suffix: Option<String>,
}

impl OutputPathResolver {
    /// Create a resolver, probing the real filesystem
    pub fn new(raw_input: impl AsRef<Path>, config: &ResolverConfig) -> ResolveResult<Self> {
        Self::with_probe(raw_input, config, &StdFsProbe)
    }

    /// Create a resolver with a custom filesystem probe
    pub fn with_probe(
        raw_input: impl AsRef<Path>,
        config: &ResolverConfig,
        probe: &dyn FsProbe,
    ) -> ResolveResult<Self> {
        let raw_input = raw_input.as_ref();

        if raw_input.as_os_str().is_empty() {
            return Err(ResolveError::invalid_argument("Input path must not be empty"));
        }

        config
            .validate()
            .map_err(|message| ResolveError::configuration(message, None))?;

        let input = match probe.kind(raw_input) {
            PathKind::File => InputRoot::File(raw_input.to_path_buf()),
            PathKind::Directory => InputRoot::Directory(raw_input.to_path_buf()),
            PathKind::Absent => {
                return Err(ResolveError::configuration(
                    "Input path does not exist",
                    Some(raw_input.to_path_buf()),
                ))
            }
        };

        let output = OutputTarget::classify(config.output.as_deref(), config, probe);

        Ok(Self {
            input,
            output,
            output_suffix: config.output_suffix.clone(),
        })
    }

    /// Kind of the raw input path
    pub fn input_kind(&self) -> PathKind {
        match self.input {
            InputRoot::File(_) => PathKind::File,
            InputRoot::Directory(_) => PathKind::Directory,
        }
    }

    /// The raw input path as given
    pub fn input_path(&self) -> &Path {
        match &self.input {
            InputRoot::File(path) | InputRoot::Directory(path) => path,
        }
    }

    /// Resolve the code output path for one input file
    pub fn resolve_code_output_path(&self, actual_input_file_path: impl AsRef<Path>) -> ResolveResult<PathBuf> {
        let actual = actual_input_file_path.as_ref();
        if actual.as_os_str().is_empty() {
            return Err(ResolveError::invalid_argument(
                "Input file path must not be empty",
            ));
        }

        match (&self.input, &self.output) {
            (InputRoot::File(_), OutputTarget::File(output)) => Ok(output.clone()),
            (InputRoot::File(_), OutputTarget::Directory(dir)) => {
                Ok(dir.join(base_name(actual)?))
            }
            (InputRoot::File(_), OutputTarget::Absent) => {
                let name = self.suffixed(base_name(actual)?);
                Ok(actual.with_file_name(name))
            }
            (InputRoot::Directory(input), OutputTarget::File(output)) => Err(
                ResolveError::invalid_output_path(input.clone(), output.clone()),
            ),
            (InputRoot::Directory(input), OutputTarget::Directory(dir)) => {
                Ok(dir.join(relative_to(input, actual)?))
            }
            (InputRoot::Directory(input), OutputTarget::Absent) => {
                let relative = relative_to(input, actual)?;
                let name = self.suffixed(base_name(&relative)?);
                Ok(input.join(relative.with_file_name(name)))
            }
        }
    }

    /// Resolve the source map path belonging to `code_output_path`
    pub fn resolve_source_map_output_path(
        &self,
        code_output_path: impl AsRef<Path>,
        map_name_or_path: Option<&str>,
    ) -> ResolveResult<PathBuf> {
        source_map::source_map_path(code_output_path.as_ref(), map_name_or_path)
    }

    /// Insert the configured suffix before the last extension
    fn suffixed(&self, name: &Path) -> OsString {
        let Some(suffix) = &self.output_suffix else {
            return name.as_os_str().to_owned();
        };

        let mut out = name
            .file_stem()
            .map(|stem| stem.to_owned())
            .unwrap_or_default();
        out.push(suffix);
        if let Some(ext) = name.extension() {
            out.push(".");
            out.push(ext);
        }
        out
    }
}

fn base_name(path: &Path) -> ResolveResult<&Path> {
    path.file_name().map(Path::new).ok_or_else(|| {
        ResolveError::invalid_argument(format!(
            "Input file path '{}' does not name a file",
            path.display()
        ))
    })
}

/// Sub-path of `file` below `root`, compared after lexical normalization
fn relative_to(root: &Path, file: &Path) -> ResolveResult<PathBuf> {
    let root = kind::normalize(root);
    let file = kind::normalize(file);

    let relative = if root == Path::new(".") {
        let escapes = file.has_root()
            || matches!(file.components().next(), Some(Component::ParentDir) | Some(Component::Prefix(_)));
        (!escapes).then_some(file.clone())
    } else {
        file.strip_prefix(&root).ok().map(Path::to_path_buf)
    };

    match relative {
        Some(relative) if relative.file_name().is_some() => Ok(relative),
        _ => Err(ResolveError::invalid_argument(format!(
            "Input file '{}' is not inside input directory '{}'",
            file.display(),
            root.display()
        ))),
    }
}
