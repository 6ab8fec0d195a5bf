//! Built-in command handlers. Each handler follows [`crate::registry::CommandFn`].

pub mod device;
pub mod help;
pub mod version;
