//! CLI help: the top-level usage block shared by `cxl`, `cxl help` and `cxl --help`.

pub const USAGE_STRING: &str = "cxl [--version] [--help] COMMAND [ARGS]";

pub const MORE_INFO_STRING: &str = "See 'cxl help COMMAND' for more information on a specific command.\n \
cxl --list-cmds to see all available commands";

/// Usage block printed when no command is given and by `cxl help`.
pub fn usage_text() -> String {
    format!("\n usage: {}\n\n\n {}\n\n", USAGE_STRING, MORE_INFO_STRING)
}
