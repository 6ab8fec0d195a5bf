//! Context manager: opens and releases the execution context handed to command handlers.
//!
//! A context is a session on the CXL bus as exposed through sysfs. At most one
//! context is live per manager; `release` consumes it so it cannot be touched
//! afterwards.

use crate::config::{ContextConfig, HelpConfig};
use crate::error::ContextError;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execution context lent to exactly one command handler.
#[derive(Debug)]
pub struct Context {
    sysfs_root: PathBuf,
    bus_present: bool,
    help: HelpConfig,
    command: Option<&'static str>,
}

impl Context {
    /// Root of the CXL bus in sysfs.
    pub fn sysfs_root(&self) -> &Path {
        &self.sysfs_root
    }

    /// Whether the bus root existed when the context was opened.
    pub fn bus_present(&self) -> bool {
        self.bus_present
    }

    /// Help settings the session was opened with.
    pub fn help_settings(&self) -> &HelpConfig {
        &self.help
    }

    /// Name of the command currently holding the context, once bound.
    pub fn command(&self) -> Option<&'static str> {
        self.command
    }

    pub(crate) fn bind(&mut self, command: &'static str) {
        self.command = Some(command);
    }
}

/// Creates and releases contexts, enforcing a single live context.
pub struct ContextManager {
    config: ContextConfig,
    help: HelpConfig,
    live: Cell<bool>,
    opened: Cell<u32>,
}

impl ContextManager {
    pub fn new(config: ContextConfig, help: HelpConfig) -> Self {
        Self {
            config,
            help,
            live: Cell::new(false),
            opened: Cell::new(0),
        }
    }

    /// Open a context. Either a fully initialized context is returned or nothing is.
    pub fn create(&self) -> Result<Context, ContextError> {
        if self.live.get() {
            return Err(ContextError::AlreadyOpen);
        }

        let root = &self.config.sysfs_root;
        if !root.is_absolute() {
            return Err(ContextError::RelativeRoot(root.clone()));
        }

        let bus_present = match std::fs::metadata(root) {
            Ok(meta) if meta.is_dir() => true,
            Ok(_) => return Err(ContextError::NotADirectory(root.clone())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(source) => {
                return Err(ContextError::Inspect {
                    path: root.clone(),
                    source,
                })
            }
        };

        if !bus_present {
            debug!(sysfs_root = %root.display(), "CXL bus not present; opening empty context");
        }

        self.live.set(true);
        self.opened.set(self.opened.get() + 1);
        debug!(sysfs_root = %root.display(), bus_present, "Context created");

        Ok(Context {
            sysfs_root: root.clone(),
            bus_present,
            help: self.help.clone(),
            command: None,
        })
    }

    /// Release a context previously returned by `create`.
    pub fn release(&self, context: Context) {
        debug!(command = ?context.command, "Context released");
        drop(context);
        self.live.set(false);
    }

    /// Whether a context is currently open.
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Number of contexts created over the manager's lifetime.
    pub fn opened(&self) -> u32 {
        self.opened.get()
    }
}
