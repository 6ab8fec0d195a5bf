//! CLI route: run context built from configuration. Handles the global flags that
//! end the run early and hands everything else to the dispatcher.

use crate::cli::parse::Cli;
use crate::commands::version::VERSION;
use crate::config::CxlConfig;
use crate::context::ContextManager;
use crate::dispatch::Dispatcher;
use crate::registry::CommandRegistry;
use std::io::Write;

/// Runtime context for CLI execution: loaded configuration and the command table.
pub struct RunContext {
    config: CxlConfig,
    registry: CommandRegistry<'static>,
}

impl RunContext {
    /// Create a run context over the built-in commands.
    pub fn new(config: CxlConfig) -> Self {
        Self::with_registry(config, CommandRegistry::builtin())
    }

    pub fn with_registry(config: CxlConfig, registry: CommandRegistry<'static>) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &CxlConfig {
        &self.config
    }

    pub fn registry(&self) -> CommandRegistry<'static> {
        self.registry
    }

    /// Fresh dispatcher with its own context manager.
    pub fn dispatcher(&self) -> Dispatcher<'static> {
        Dispatcher::new(
            self.registry,
            ContextManager::new(self.config.context.clone(), self.config.help.clone()),
        )
    }

    /// Execute the parsed command line and return the process exit status.
    pub fn execute(&self, cli: &Cli) -> i32 {
        if cli.list_cmds {
            let mut out = std::io::stdout().lock();
            return match self.write_command_list(&mut out) {
                Ok(()) => 0,
                Err(_) => 1,
            };
        }
        if cli.version_requested() {
            let mut out = std::io::stdout().lock();
            return match write_version(&mut out) {
                Ok(()) => 0,
                Err(_) => 1,
            };
        }
        self.dispatcher().run(&cli.args)
    }

    /// Write every registered command name, one per line, in declaration order.
    pub fn write_command_list<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for name in self.registry.names() {
            writeln!(out, "{}", name)?;
        }
        out.flush()
    }
}

/// Answer `--version` without opening a context.
fn write_version<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", VERSION)?;
    out.flush()
}
