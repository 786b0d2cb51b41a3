/// `plan-create` command: validate a plan locally and submit it.
use tracing::warn;

use super::{Command, CommandError, Context, Info, submit};
use crate::api::{ApiClient, ApiRequest};
use crate::cli::args::PlanCreateFlags;
use crate::plan::{encode_plan, validate};
use crate::types::Plan;

const SUCCESS: &str = "Plan successfully created!";
const FAILURE: &str = "Failed to create plan!";

/// Creates a plan from a name and `plan-create` flags.
#[derive(Debug, Clone, Default)]
pub struct PlanCreate {
    flags: PlanCreateFlags,
}

impl PlanCreate {
    pub const INFO: Info = Info {
        name: "plan-create",
        usage: "plan-create <name> -c cpushare [-m memory] [-s swap] [-r router] [--default]",
        desc: "Creates a new plan for being used when creating apps.",
        min_args: 1,
    };

    #[must_use]
    pub fn new(flags: PlanCreateFlags) -> Self {
        Self { flags }
    }

    /// Build the request payload for a plan called `name`.
    #[must_use]
    pub fn plan(&self, name: &str) -> Plan {
        Plan {
            name: name.to_owned(),
            memory: self.flags.memory,
            swap: self.flags.swap,
            cpu_share: self.flags.cpushare,
            default: self.flags.default,
            router: self.flags.router.clone().unwrap_or_default(),
        }
    }
}

impl Command for PlanCreate {
    fn info(&self) -> &'static Info {
        &Self::INFO
    }

    fn run(&self, ctx: &mut Context<'_>, client: &dyn ApiClient) -> Result<(), CommandError> {
        // Also checked by `execute`; `run` may be called on its own.
        ctx.require_args(&Self::INFO)?;
        let plan = self.plan(&ctx.args[0]);

        let violations = validate(&plan);
        if !violations.is_empty() {
            for violation in &violations {
                warn!(plan = %plan.name, %violation, "plan rejected locally");
                writeln!(ctx.stdout, "{violation}")?;
            }
            writeln!(ctx.stdout, "{FAILURE}")?;
            return Err(CommandError::Validation(violations));
        }

        let body = match encode_plan(&plan) {
            Ok(body) => body,
            Err(err) => {
                writeln!(ctx.stdout, "{FAILURE}")?;
                return Err(CommandError::Encode(err));
            }
        };
        submit(ctx, client, ApiRequest::post_json("/plans", body), SUCCESS, FAILURE)
    }
}
