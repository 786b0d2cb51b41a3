/// Command dispatch: the contract every command implements, and routing of
/// parsed CLI arguments to it.
pub mod errors;
pub mod plan_create;
pub mod plan_remove;
pub mod router_list;

use std::io::Write;

use tracing::{debug, warn};

use crate::api::{ApiClient, ApiRequest};
use crate::cli::args;

pub use errors::CommandError;
pub use plan_create::PlanCreate;
pub use plan_remove::PlanRemove;
pub use router_list::RouterList;

/// Static description of a command's invocation shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info {
    pub name: &'static str,
    pub usage: &'static str,
    pub desc: &'static str,
    /// Positional arguments that must be present before `run`.
    pub min_args: usize,
}

/// Per-invocation state handed to a command.
pub struct Context<'a> {
    /// Positional arguments, without the command name.
    pub args: Vec<String>,
    pub stdout: &'a mut dyn Write,
}

impl Context<'_> {
    /// Fail with `MissingArgs` unless `info.min_args` positionals are present.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::MissingArgs` when too few arguments were supplied.
    pub fn require_args(&self, info: &'static Info) -> Result<(), CommandError> {
        if self.args.len() < info.min_args {
            return Err(CommandError::MissingArgs {
                command: info.name,
                usage: info.usage,
                expected: info.min_args,
                got: self.args.len(),
            });
        }
        Ok(())
    }
}

/// A user-facing operation against the platform API.
pub trait Command {
    /// Invocation contract of this command.
    fn info(&self) -> &'static Info;

    /// Run the command, writing human-readable output to `ctx.stdout`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` on any failure; create/remove print their own
    /// failure line before returning.
    fn run(&self, ctx: &mut Context<'_>, client: &dyn ApiClient) -> Result<(), CommandError>;
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CommandError` on any command failure.
pub fn dispatch(
    command: &args::Command,
    stdout: &mut dyn Write,
    client: &dyn ApiClient,
) -> Result<(), CommandError> {
    let (handler, positional): (Box<dyn Command>, Vec<String>) = match command {
        args::Command::PlanCreate(a) => (
            Box::new(PlanCreate::new(a.flags.clone())),
            vec![a.name.clone()],
        ),
        args::Command::PlanRemove(a) => (Box::new(PlanRemove), vec![a.name.clone()]),
        args::Command::RouterList => (Box::new(RouterList), Vec::new()),
    };

    let mut ctx = Context {
        args: positional,
        stdout,
    };
    execute(handler.as_ref(), &mut ctx, client)
}

/// Enforce the command's argument minimum, then run it.
///
/// # Errors
///
/// Returns `CommandError::MissingArgs` or whatever the command returns.
pub fn execute(
    command: &dyn Command,
    ctx: &mut Context<'_>,
    client: &dyn ApiClient,
) -> Result<(), CommandError> {
    let info = command.info();
    ctx.require_args(info)?;
    debug!(command = info.name, args = ?ctx.args, "running command");
    command.run(ctx, client)
}

/// Send a request whose only outcome is a success or failure line.
///
/// Transport errors and non-2xx statuses print the same `failure` line.
fn submit(
    ctx: &mut Context<'_>,
    client: &dyn ApiClient,
    request: ApiRequest,
    success: &str,
    failure: &str,
) -> Result<(), CommandError> {
    let (method, path) = (request.method.clone(), request.path.clone());
    match client.send(request) {
        Ok(response) if response.is_success() => {
            debug!(%method, %path, status = response.status.as_u16(), "request succeeded");
            writeln!(ctx.stdout, "{success}")?;
            Ok(())
        }
        Ok(response) => {
            warn!(%method, %path, status = response.status.as_u16(), "request rejected");
            writeln!(ctx.stdout, "{failure}")?;
            Err(CommandError::Status(response.status))
        }
        Err(err) => {
            warn!(%method, %path, error = %err, "request failed");
            writeln!(ctx.stdout, "{failure}")?;
            Err(CommandError::Transport(err))
        }
    }
}
