//! CLI parse: global flags for cxl. No behavior; definitions only.
//!
//! Everything from the first token that is not a global flag onward is handed
//! to the dispatcher untouched, including `--help` and `-h`, which resolve to the
//! `help` command. A leading `--version` or `-v` is answered before dispatch.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Marker clap treats as end of options.
const END_OF_OPTIONS: &str = "--";

/// cxl - manage CXL devices
#[derive(Parser, Debug)]
#[command(name = "cxl")]
#[command(about = "Manage CXL memory devices, ports, buses and regions")]
#[command(override_usage = "cxl [--version] [--help] COMMAND [ARGS]")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Print every available command and exit
    #[arg(long)]
    pub list_cmds: bool,

    /// Configuration file path (merged over the global config file)
    #[arg(long, env = "CXL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log file path; switches log output to the file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Command followed by its own arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse a full command line, program name first.
    ///
    /// clap consumes the `--` that ends the global flags; cxl keeps it as the
    /// command token so that it resolves like any other candidate.
    pub fn parse_command_line<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(&raw)?;
        let consumed = raw.len().saturating_sub(cli.args.len());
        if consumed > 1 && raw[consumed - 1] == END_OF_OPTIONS {
            cli.args.insert(0, END_OF_OPTIONS.to_string());
        }
        Ok(cli)
    }

    /// True when the command position holds the version flag.
    pub fn version_requested(&self) -> bool {
        matches!(
            self.args.first().map(String::as_str),
            Some("--version") | Some("-v")
        )
    }
}
