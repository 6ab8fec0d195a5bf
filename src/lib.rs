//! cxl: command dispatch for the CXL device management tool
//!
//! Parses process-wide flags, resolves the leading argument against a fixed
//! command table, opens the execution context and runs the matched handler.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod registry;
