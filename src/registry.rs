//! Command registry: fixed, ordered table of command names and their handlers.

use crate::commands::{device, help, version};
use crate::context::Context;

/// Handler signature shared by every command: remaining arguments and the
/// execution context in, process exit status out.
pub type CommandFn = fn(args: &[String], ctx: &mut Context) -> i32;

/// One registered command.
#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub handler: CommandFn,
}

impl CommandEntry {
    pub const fn new(name: &'static str, handler: CommandFn) -> Self {
        Self { name, handler }
    }
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry").field("name", &self.name).finish()
    }
}

/// Built-in command table, in declaration order.
static BUILTIN_COMMANDS: &[CommandEntry] = &[
    CommandEntry::new("version", version::cmd_version),
    CommandEntry::new("list", device::cmd_backend),
    CommandEntry::new("help", help::cmd_help),
    CommandEntry::new("zero-labels", device::cmd_backend),
    CommandEntry::new("read-labels", device::cmd_backend),
    CommandEntry::new("write-labels", device::cmd_backend),
    CommandEntry::new("disable-memdev", device::cmd_backend),
    CommandEntry::new("enable-memdev", device::cmd_backend),
    CommandEntry::new("reserve-dpa", device::cmd_backend),
    CommandEntry::new("free-dpa", device::cmd_backend),
    CommandEntry::new("update-firmware", device::cmd_backend),
    CommandEntry::new("set-alert-config", device::cmd_backend),
    CommandEntry::new("disable-port", device::cmd_backend),
    CommandEntry::new("enable-port", device::cmd_backend),
    CommandEntry::new("set-partition", device::cmd_backend),
    CommandEntry::new("disable-bus", device::cmd_backend),
    CommandEntry::new("create-region", device::cmd_backend),
    CommandEntry::new("enable-region", device::cmd_backend),
    CommandEntry::new("disable-region", device::cmd_backend),
    CommandEntry::new("destroy-region", device::cmd_backend),
    CommandEntry::new("monitor", device::cmd_backend),
];

/// Read-only view over a command table. Lookup is exact and case-sensitive.
#[derive(Debug, Clone, Copy)]
pub struct CommandRegistry<'a> {
    entries: &'a [CommandEntry],
}

impl CommandRegistry<'static> {
    /// The tool's built-in commands.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_COMMANDS)
    }
}

impl<'a> CommandRegistry<'a> {
    pub fn new(entries: &'a [CommandEntry]) -> Self {
        Self { entries }
    }

    /// Find the entry registered under exactly `name`.
    pub fn lookup(&self, name: &str) -> Option<&'a CommandEntry> {
        let entries = self.entries;
        entries.iter().find(|entry| entry.name == name)
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + 'a {
        let entries = self.entries;
        entries.iter().map(|entry| entry.name)
    }

    pub fn entries(&self) -> &'a [CommandEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
