use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use emitpath::cli::{self, Args, CliConfig, CliUtils};
use emitpath::{build_plan, OutputPathResolver, ResolveError};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        match err.downcast_ref::<ResolveError>() {
            Some(resolve_err) => cli::handle_error(resolve_err),
            None => CliUtils::show_error(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    debug!(
        "resolving outputs for '{}' into {}",
        config.args.input.display(),
        config.output_description()
    );

    let resolver = OutputPathResolver::new(&config.args.input, &config.resolver_config)?;
    let plan = build_plan(&resolver, &config.resolver_config, config.is_recursive())?;

    if config.wants_json() {
        let json = serde_json::to_string_pretty(&plan).context("failed to serialize output plan")?;
        println!("{}", json);
        return Ok(());
    }

    if plan.is_empty() {
        CliUtils::show_warning(
            &format!("No input files found in {}", config.args.input.display()),
            config.is_quiet(),
        );
        return Ok(());
    }

    for line in cli::format_plan_lines(&plan) {
        CliUtils::show_success(&line, config.is_quiet());
    }

    Ok(())
}
