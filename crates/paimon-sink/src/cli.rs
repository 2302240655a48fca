//! Command line interface for resolving and checking sink configuration.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;
use paimon_common::config::{ConfigPath, ReadonlyConfig, load_from_paths};
use snafu::ResultExt;
use tracing::{info, warn};

use crate::config::{SinkConfig, SinkOptions};
use crate::error::{CliError, RenderSnafu};

#[derive(Parser, Debug)]
#[command(version, about = "Resolve and validate Paimon sink configuration")]
pub struct CliArgs {
    /// Path to configuration file (can be specified multiple times)
    #[arg(short, long)]
    pub config: Vec<PathBuf>,

    /// Path to configuration directory (can be specified multiple times)
    #[arg(short = 'C', long = "config-dir")]
    pub config_dirs: Vec<PathBuf>,

    /// List every recognized option and exit
    #[arg(long)]
    pub describe: bool,

    /// Report every missing required option instead of only the first
    #[arg(long)]
    pub check: bool,
}

impl CliArgs {
    /// Convert CLI arguments to configuration paths.
    pub fn config_paths(&self) -> Vec<ConfigPath> {
        ConfigPath::from_cli_args(&self.config, &self.config_dirs)
    }
}

/// Run the command selected by `args`, returning what to print on stdout.
pub fn run(args: &CliArgs) -> Result<String, CliError> {
    let options = SinkOptions::global();
    if args.describe {
        return Ok(describe_options(options));
    }

    let paths = args.config_paths();
    if paths.is_empty() {
        return Err(CliError::NoConfigSources);
    }

    info!("Loading config from {} source(s)", paths.len());
    let source = load_from_paths(&paths)?;
    resolve_and_render(options, &source, args.check)
}

/// Resolve `source` and render the result as pretty JSON.
pub fn resolve_and_render(
    options: &SinkOptions,
    source: &ReadonlyConfig,
    check: bool,
) -> Result<String, CliError> {
    for key in options.registry().unknown_keys(source) {
        warn!(key, "ignoring unrecognized option");
    }

    if check {
        options.rule().validate(source)?;
    }

    let config = SinkConfig::resolve_with(options, source)?;
    info!(
        "Resolved sink for {} in catalog {}",
        config.identity().identifier(),
        config.catalog_name()
    );
    serde_json::to_string_pretty(&config).context(RenderSnafu)
}

/// One line per registered option: key, type, default, required, description.
pub fn describe_options(options: &SinkOptions) -> String {
    let rule = options.rule();
    let mut out = String::new();
    for descriptor in options.registry().descriptors() {
        let _ = writeln!(
            out,
            "{:<30} {:<22} {:<30} {:<9} {}",
            descriptor.key,
            descriptor.type_name,
            descriptor.default.as_deref().unwrap_or("-"),
            if rule.is_required(descriptor.key) { "required" } else { "optional" },
            descriptor.description,
        );
    }
    out
}
