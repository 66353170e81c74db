//! Configuration options for output path resolution

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ResolveError, ResolveResult};

/// Default code file extensions, without the leading dot
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// Where the source map of a transformed file ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapMode {
    /// Written to its own `.map` file next to the code
    #[default]
    Separate,
    /// Embedded in the code file; no map path is needed
    Inline,
}

/// Options that drive output path resolution.
///
/// Deserializes from the camelCase keys of a JSON config file, with every
/// key optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Raw output path: a target file or a target directory
    pub output: Option<PathBuf>,
    /// Produce a source map for every code file
    pub source_map: bool,
    /// Separate file or inline source map
    pub source_map_mode: SourceMapMode,
    /// Explicit source map file name or relative path
    pub source_map_file_name: Option<String>,
    /// Code file extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Suffix inserted before the extension when no output path is given
    pub output_suffix: Option<String>,
    /// Directory or file names skipped while walking a directory input
    pub exclude: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            output: None,
            source_map: false,
            source_map_mode: SourceMapMode::Separate,
            source_map_file_name: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            output_suffix: None,
            exclude: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> ResolveResult<Self> {
        debug!("loading config from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| ResolveError::io(e.to_string(), Some(path.to_path_buf())))?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ResolveError::configuration(
                format!("Invalid config file: {}", e),
                Some(path.to_path_buf()),
            )
        })?;

        config
            .validate()
            .map_err(|message| ResolveError::configuration(message, Some(path.to_path_buf())))?;

        Ok(config)
    }

    /// Set the raw output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Enable/disable source maps
    pub fn with_source_map(mut self, enabled: bool) -> Self {
        self.source_map = enabled;
        self
    }

    /// Set source map mode
    pub fn with_source_map_mode(mut self, mode: SourceMapMode) -> Self {
        self.source_map_mode = mode;
        self
    }

    /// Set source map file name
    pub fn with_source_map_file_name(mut self, name: impl Into<String>) -> Self {
        self.source_map_file_name = Some(name.into());
        self
    }

    /// Replace the recognized code file extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the suffix used for in-place outputs
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = Some(suffix.into());
        self
    }

    /// Skip entries with this name while walking
    pub fn with_exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.push(name.into());
        self
    }

    /// Whether a separate source map file should be planned for each output
    pub fn wants_source_map_file(&self) -> bool {
        self.source_map && self.source_map_mode == SourceMapMode::Separate
    }

    /// Whether `ext` (without dot) is one of the recognized code extensions
    pub fn is_code_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("At least one code file extension is required".to_string());
        }

        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.contains('.'))
        {
            return Err(format!(
                "Invalid extension '{}': use a bare extension such as 'js'",
                bad
            ));
        }

        if matches!(self.output_suffix.as_deref(), Some("")) {
            return Err("Output suffix must not be empty".to_string());
        }

        if self.output.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err("Output path must not be empty".to_string());
        }

        Ok(())
    }
}
