/// `plan-remove` command: delete a plan by name.
use super::{Command, CommandError, Context, Info, submit};
use crate::api::{ApiClient, ApiRequest};

/// Removes the plan named by the first positional argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanRemove;

impl PlanRemove {
    pub const INFO: Info = Info {
        name: "plan-remove",
        usage: "plan-remove <name>",
        desc: "Removes a plan from the database.",
        min_args: 1,
    };
}

impl Command for PlanRemove {
    fn info(&self) -> &'static Info {
        &Self::INFO
    }

    fn run(&self, ctx: &mut Context<'_>, client: &dyn ApiClient) -> Result<(), CommandError> {
        // Also checked by `execute`; `run` may be called on its own.
        ctx.require_args(&Self::INFO)?;
        // The name goes into the path as typed.
        let request = ApiRequest::delete(format!("/plans/{}", ctx.args[0]));
        submit(
            ctx,
            client,
            request,
            "Plan successfully removed!",
            "Failed to remove plan!",
        )
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::commands::testing::{FakeClient, run};

    #[test]
    fn test_info() {
        assert_eq!(
            *PlanRemove.info(),
            Info {
                name: "plan-remove",
                usage: "plan-remove <name>",
                desc: "Removes a plan from the database.",
                min_args: 1,
            }
        );
    }

    #[test]
    fn test_remove() {
        let client = FakeClient::new(200, "");
        let (result, out) = run(&PlanRemove, &["myplan"], &client);
        assert!(result.is_ok());
        assert_eq!(out, "Plan successfully removed!\n");
        assert_eq!(client.requests(), vec![ApiRequest::delete("/plans/myplan")]);
        assert_eq!(client.requests()[0].method, Method::DELETE);
    }

    #[test]
    fn test_remove_error() {
        let client = FakeClient::new(500, "");
        let (result, out) = run(&PlanRemove, &["myplan"], &client);
        assert!(matches!(result, Err(CommandError::Status(s)) if s.as_u16() == 500));
        assert_eq!(out, "Failed to remove plan!\n");
    }

    #[test]
    fn test_run_without_name_sends_nothing() {
        let client = FakeClient::new(200, "");
        let mut stdout = Vec::new();
        let mut ctx = Context {
            args: Vec::new(),
            stdout: &mut stdout,
        };
        let result = PlanRemove.run(&mut ctx, &client);
        assert!(matches!(result, Err(CommandError::MissingArgs { expected: 1, got: 0, .. })));
        assert!(client.requests().is_empty());
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_remove_unreachable() {
        let client = FakeClient::unreachable();
        let (result, out) = run(&PlanRemove, &["myplan"], &client);
        assert!(matches!(result, Err(CommandError::Transport(_))));
        assert_eq!(out, "Failed to remove plan!\n");
    }
}
