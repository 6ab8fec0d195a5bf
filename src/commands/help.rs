//! `cxl help [topic]`: top-level usage, or a manual page shown by an external viewer.

use crate::cli::{map_error, usage_text};
use crate::config::HelpConfig;
use crate::context::Context;
use crate::error::CxlError;
use clap::Parser;
use std::process::Command;
use tracing::{debug, warn};

/// Topics `help` dispatches over.
pub const HELP_TOPICS: &[&str] = &["list"];

/// Prefix of every manual page in the tool's namespace.
const PAGE_PREFIX: &str = "cxl";

#[derive(Parser, Debug)]
#[command(name = "help", override_usage = "cxl help [command]", disable_version_flag = true)]
struct HelpArgs {
    /// Print the recognized help topics and exit
    #[arg(long, hide = true)]
    list_cmds: bool,

    /// Command to show the manual page for
    topic: Option<String>,

    /// Anything after the topic is ignored
    #[arg(hide = true, trailing_var_arg = true)]
    rest: Vec<String>,
}

pub fn cmd_help(args: &[String], ctx: &mut Context) -> i32 {
    let argv = std::iter::once("help".to_string()).chain(args.iter().cloned());
    let parsed = match HelpArgs::try_parse_from(argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            let _ = e.print();
            return e.exit_code();
        }
    };

    if parsed.list_cmds {
        for topic in HELP_TOPICS {
            println!("{}", topic);
        }
        return 0;
    }

    let Some(topic) = parsed.topic else {
        print!("{}", usage_text());
        return 0;
    };
    if !parsed.rest.is_empty() {
        debug!(ignored = parsed.rest.len(), "Extra help arguments ignored");
    }

    let env_viewer = std::env::var(&ctx.help_settings().viewer_env).ok();
    match show_man_page(&topic, ctx.help_settings(), env_viewer) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            1
        }
    }
}

/// Manual page name for a topic: `list` becomes `cxl-list`. Topics already in
/// the tool's namespace (`cxl`, `cxl-list`) are used as given.
pub fn page_name(topic: &str) -> String {
    if topic.starts_with(PAGE_PREFIX) {
        topic.to_string()
    } else {
        format!("{}-{}", PAGE_PREFIX, topic)
    }
}

/// Viewers to try, in order: the one named by the environment, then the configured default.
pub fn resolve_viewers(settings: &HelpConfig, env_viewer: Option<String>) -> Vec<String> {
    let mut viewers = Vec::new();
    if let Some(viewer) = env_viewer.filter(|v| !v.trim().is_empty()) {
        viewers.push(viewer);
    }
    if !viewers.contains(&settings.man_viewer) {
        viewers.push(settings.man_viewer.clone());
    }
    viewers
}

/// Run the first viewer that can be launched on the topic's page and return its status.
pub fn show_man_page(
    topic: &str,
    settings: &HelpConfig,
    env_viewer: Option<String>,
) -> Result<i32, CxlError> {
    let page = page_name(topic);
    if !HELP_TOPICS.contains(&topic) {
        debug!(topic, "Topic outside the help topic list; asking the viewer anyway");
    }

    for viewer in resolve_viewers(settings, env_viewer) {
        let mut command = Command::new(&viewer);
        command.arg(&page);
        if let Some(ref man_path) = settings.man_path {
            command.env("MANPATH", man_path_value(man_path, std::env::var("MANPATH").ok()));
        }

        match command.status() {
            Ok(status) => {
                let code = status.code().unwrap_or(1);
                if !status.success() {
                    eprintln!(
                        "No manual entry shown for '{}': viewer '{}' exited with status {}",
                        page, viewer, code
                    );
                }
                return Ok(code);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(viewer = %viewer, "Man viewer not found");
            }
            Err(source) => return Err(CxlError::ViewerLaunch { viewer, source }),
        }
    }

    Err(CxlError::NoViewer { page })
}

/// Prepend the tool's manual directory, keeping the system search path via the trailing colon.
fn man_path_value(man_path: &std::path::Path, existing: Option<String>) -> String {
    match existing.filter(|p| !p.is_empty()) {
        Some(existing) => format!("{}:{}", man_path.display(), existing),
        None => format!("{}:", man_path.display()),
    }
}
