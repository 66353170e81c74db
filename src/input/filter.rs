use std::path::Path;

use crate::config::ResolverConfig;

/// Return true if the path is an existing file with one of the configured code extensions
pub fn is_code_file(path: &Path, config: &ResolverConfig) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.is_code_extension(ext))
}

/// Return true if the entry name is listed in the config's exclude list
pub fn is_excluded(name: &str, config: &ResolverConfig) -> bool {
    config.exclude.iter().any(|excluded| excluded == name)
}
