//! cxl CLI Binary
//!
//! Command-line entry point for the CXL device management tool.

use cxl::cli::{map_error, Cli, RunContext};
use cxl::config::{global_config_path, ConfigLoader};
use cxl::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse_command_line(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging before anything is dispatched
    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = logging_config.validate() {
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(
        global_config = ?global_config_path().filter(|path| path.exists()),
        explicit_config = ?cli.config,
        "Configuration loaded"
    );
    debug!(args = cli.args.len(), "cxl starting");

    let context = RunContext::new(config);
    let status = context.execute(&cli);
    debug!(status, "cxl exiting");
    process::exit(status);
}

/// Build logging configuration from CLI args over the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        config.output = "file".to_string();
    }

    config
}
