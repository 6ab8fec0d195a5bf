//! `cxl version`

use crate::context::Context;

/// Version string reported by `cxl version` and `cxl --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cmd_version(_args: &[String], _ctx: &mut Context) -> i32 {
    println!("{}", VERSION);
    0
}
