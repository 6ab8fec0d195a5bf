//! CLI domain: parse, route, help text and output only.
//! Command resolution itself lives in the dispatcher.

mod help;
mod output;
mod parse;
mod route;

pub use help::{usage_text, MORE_INFO_STRING, USAGE_STRING};
pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
