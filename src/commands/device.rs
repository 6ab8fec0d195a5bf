//! Device-backend boundary.
//!
//! Listing, label, firmware, port, region, alert and monitor commands operate on
//! devices through a backend that is not linked into this build. Their registry
//! entries route here so the command surface and dispatch stay complete.

use crate::context::Context;
use tracing::debug;

/// Status reported when a device operation cannot be carried out.
pub const EXIT_UNSUPPORTED: i32 = 1;

pub fn cmd_backend(args: &[String], ctx: &mut Context) -> i32 {
    let command = ctx.command().unwrap_or("<unbound>");
    debug!(
        command,
        args = args.len(),
        sysfs_root = %ctx.sysfs_root().display(),
        bus_present = ctx.bus_present(),
        "Device backend not linked"
    );
    eprintln!("{}", unsupported_message(command));
    EXIT_UNSUPPORTED
}

fn unsupported_message(command: &str) -> String {
    format!(
        "cxl {}: device operations are not available in this build",
        command
    )
}
