//! Output path resolution for code-transformation CLIs
//!
//! Given the raw input path (a file or a directory tree), the file currently
//! being processed, and an optional raw output path (a file or a directory),
//! computes where the transformed code and its source map should be written.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod plan;
pub mod resolver;

// Re-export commonly used types
pub use config::{ResolverConfig, SourceMapMode};
pub use error::{ResolveError, ResolveResult};
pub use plan::{build_plan, OutputPlan, PlannedOutput};
pub use resolver::{FsProbe, MapNameSuffix, OutputPathResolver, OutputTarget, PathKind, StdFsProbe};

/// Resolve the code output path for a single file with a one-off resolver
pub fn resolve_code_output_path(
    raw_input: impl AsRef<std::path::Path>,
    actual_input_file_path: impl AsRef<std::path::Path>,
    config: &ResolverConfig,
) -> ResolveResult<std::path::PathBuf> {
    let resolver = OutputPathResolver::new(raw_input, config)?;
    resolver.resolve_code_output_path(actual_input_file_path)
}
