//! Dispatcher: resolves the leading argument to a registered command and runs it.

use crate::cli::usage_text;
use crate::context::ContextManager;
use crate::error::CxlError;
use crate::registry::CommandRegistry;
use std::io::Write;
use tracing::debug;

/// Status for dispatch failures owned by the dispatcher itself.
pub const EXIT_FAILURE: i32 = 1;

/// Normalize a raw command token: `-h` and `-v` are shorthands for `help` and
/// `version`, and one leading `--` is dropped so `--list` names `list`.
pub fn normalize_token(raw: &str) -> String {
    match raw {
        "-h" => "help".to_string(),
        "-v" => "version".to_string(),
        _ => raw.strip_prefix("--").unwrap_or(raw).to_string(),
    }
}

/// A command token together with the arguments that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub token: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Split residual arguments into a normalized token and the handler's arguments.
    /// Returns `None` when no command was given.
    pub fn parse(args: &[String]) -> Option<Self> {
        let (first, rest) = args.split_first()?;
        Some(Self {
            token: normalize_token(first),
            args: rest.to_vec(),
        })
    }
}

/// Terminal state of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No command given.
    Usage,
    /// A handler ran and reported `status`.
    Handled { command: &'static str, status: i32 },
    /// Nothing is registered under `token`.
    Unknown { token: String },
}

impl Outcome {
    pub fn exit_status(&self) -> i32 {
        match self {
            Outcome::Usage | Outcome::Unknown { .. } => EXIT_FAILURE,
            Outcome::Handled { status, .. } => *status,
        }
    }
}

pub struct Dispatcher<'a> {
    registry: CommandRegistry<'a>,
    contexts: ContextManager,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: CommandRegistry<'a>, contexts: ContextManager) -> Self {
        Self { registry, contexts }
    }

    pub fn registry(&self) -> CommandRegistry<'a> {
        self.registry
    }

    pub fn contexts(&self) -> &ContextManager {
        &self.contexts
    }

    /// Resolve and run one command. Prints nothing itself; see [`Dispatcher::run`].
    ///
    /// The context is created only once a command token is present, lent to the
    /// matched handler, and released before returning on every path.
    pub fn dispatch(&self, args: &[String]) -> Result<Outcome, CxlError> {
        let Some(invocation) = Invocation::parse(args) else {
            debug!("No command given");
            return Ok(Outcome::Usage);
        };

        let mut ctx = self.contexts.create()?;

        if let Some(entry) = self.registry.lookup(&invocation.token) {
            debug!(command = entry.name, args = invocation.args.len(), "Dispatching");
            ctx.bind(entry.name);
            let status = (entry.handler)(&invocation.args, &mut ctx);
            self.contexts.release(ctx);
            debug!(command = entry.name, status, "Command finished");
            return Ok(Outcome::Handled {
                command: entry.name,
                status,
            });
        }

        self.contexts.release(ctx);
        debug!(token = %invocation.token, "Unknown command");
        Ok(Outcome::Unknown {
            token: invocation.token,
        })
    }

    /// Dispatch and report to the given streams, returning the process exit status.
    pub fn run_with<O: Write, E: Write>(&self, args: &[String], out: &mut O, err: &mut E) -> i32 {
        match self.dispatch(args) {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Usage => {
                        let _ = write!(out, "{}", usage_text());
                    }
                    Outcome::Unknown { token } => {
                        let _ = writeln!(err, "Unknown command: '{}'", token);
                    }
                    Outcome::Handled { .. } => {}
                }
                outcome.exit_status()
            }
            Err(e) => {
                debug!(error = %e, "Dispatch aborted");
                let _ = writeln!(err, "{}", crate::cli::map_error(&e));
                EXIT_FAILURE
            }
        }
    }

    /// Dispatch against the process's stdout and stderr.
    pub fn run(&self, args: &[String]) -> i32 {
        let status = self.run_with(args, &mut std::io::stdout(), &mut std::io::stderr());
        let _ = std::io::stdout().flush();
        status
    }
}
