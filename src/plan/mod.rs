//! Output planning: resolve every input file of a run up front

use log::debug;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::ResolverConfig;
use crate::error::ResolveResult;
use crate::input::collect_input_files;
use crate::resolver::OutputPathResolver;

/// Output locations for one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedOutput {
    pub input: PathBuf,
    pub code: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map: Option<PathBuf>,
}

/// All planned outputs of a run, in walk order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputPlan {
    pub outputs: Vec<PlannedOutput>,
}

impl OutputPlan {
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedOutput> {
        self.outputs.iter()
    }
}

/// Resolve code and source map paths for every input file.
///
/// Stops at the first input that cannot be resolved.
pub fn build_plan(
    resolver: &OutputPathResolver,
    config: &ResolverConfig,
    recursive: bool,
) -> ResolveResult<OutputPlan> {
    let inputs = collect_input_files(resolver.input_path(), resolver.input_kind(), config, recursive)?;
    let map_name = config.source_map_file_name.as_deref();

    let mut outputs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let code = resolver.resolve_code_output_path(&input)?;
        let source_map = if config.wants_source_map_file() {
            Some(resolver.resolve_source_map_output_path(&code, map_name)?)
        } else {
            None
        };

        debug!("planned {} -> {}", input.display(), code.display());
        outputs.push(PlannedOutput {
            input,
            code,
            source_map,
        });
    }

    Ok(OutputPlan { outputs })
}
