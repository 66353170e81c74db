//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ResolverConfig, SourceMapMode};
use crate::error::{ResolveError, ResolveResult};
use crate::plan::OutputPlan;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "emitpath")]
#[command(about = "Plan output code and source map paths for a file or directory input")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input path (file or directory)
    #[arg()]
    pub input: PathBuf,

    /// Output file or directory (default: next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Plan a source map for every output file
    #[arg(long)]
    pub source_map: bool,

    /// Source map mode: separate or inline
    #[arg(long)]
    pub source_map_mode: Option<MapMode>,

    /// Source map file name or relative path
    #[arg(long)]
    pub source_map_file_name: Option<String>,

    /// Suffix inserted before the extension when no output is given
    #[arg(long)]
    pub output_suffix: Option<String>,

    /// Skip files and directories with this name (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Only look at the top level of a directory input
    #[arg(long)]
    pub no_recursive: bool,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Source map modes for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MapMode {
    #[value(name = "separate")]
    Separate,
    #[value(name = "inline")]
    Inline,
}

impl From<MapMode> for SourceMapMode {
    fn from(mode: MapMode) -> Self {
        match mode {
            MapMode::Separate => SourceMapMode::Separate,
            MapMode::Inline => SourceMapMode::Inline,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub resolver_config: ResolverConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments, loading `--config` if given
    pub fn from_args(args: Args) -> ResolveResult<Self> {
        let base = match &args.config {
            Some(path) => ResolverConfig::from_json_file(path)?,
            None => ResolverConfig::default(),
        };
        let resolver_config = Self::merge_args(base, &args);

        resolver_config
            .validate()
            .map_err(|message| ResolveError::configuration(message, None))?;

        Ok(Self {
            args,
            resolver_config,
        })
    }

    /// Apply command-line flags on top of a file or default configuration
    fn merge_args(mut config: ResolverConfig, args: &Args) -> ResolverConfig {
        if let Some(output) = &args.output {
            config.output = Some(output.clone());
        }
        if args.source_map {
            config.source_map = true;
        }
        if let Some(mode) = args.source_map_mode {
            config.source_map_mode = mode.into();
        }
        if let Some(name) = &args.source_map_file_name {
            config.source_map_file_name = Some(name.clone());
        }
        if let Some(suffix) = &args.output_suffix {
            config.output_suffix = Some(suffix.clone());
        }
        config.exclude.extend(args.exclude.iter().cloned());
        config
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn is_recursive(&self) -> bool {
        !self.args.no_recursive
    }

    pub fn wants_json(&self) -> bool {
        self.args.json
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        match &self.resolver_config.output {
            Some(output) => format!("'{}'", output.display()),
            None => "the input location".to_string(),
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }
}

/// Render one plan line per input: `input -> code [map]`
pub fn format_plan_lines(plan: &OutputPlan) -> Vec<String> {
    plan.iter()
        .map(|entry| match &entry.source_map {
            Some(map) => format!(
                "{} -> {} [{}]",
                entry.input.display(),
                entry.code.display(),
                map.display()
            ),
            None => format!("{} -> {}", entry.input.display(), entry.code.display()),
        })
        .collect()
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ResolveError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ResolveError::InvalidOutputPath { .. } => {
            eprintln!("\nTip: end the output path with '/' to name a directory");
        }
        ResolveError::Configuration { .. } => {
            eprintln!("\nTip: check the input path and the --config file");
        }
        _ => {}
    }

    eprintln!("\nTry 'emitpath --help' for usage information.");
}
