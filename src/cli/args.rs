/// CLI argument definitions via clap derive.
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};

use crate::commands::{PlanCreate, PlanRemove, RouterList};

/// planctl — administer platform resource plans.
#[derive(Debug, Parser)]
#[command(
    name = "planctl",
    about = "Create, remove, and inspect platform resource plans from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Base URL of the platform API.
    #[arg(
        long,
        global = true,
        env = "PLANCTL_TARGET",
        value_name = "URL",
        default_value = "http://localhost:8080"
    )]
    pub target: String,

    /// Bearer token sent with every request.
    #[arg(long, global = true, env = "PLANCTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        global = true,
        env = "PLANCTL_TIMEOUT",
        value_name = "SECS",
        default_value_t = 30
    )]
    pub timeout: u64,

    /// Print request/response logging to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a plan.
    #[command(about = PlanCreate::INFO.desc)]
    PlanCreate(PlanCreateArgs),
    /// Remove a plan.
    #[command(about = PlanRemove::INFO.desc)]
    PlanRemove(PlanRemoveArgs),
    /// List plan routers.
    #[command(about = RouterList::INFO.desc)]
    RouterList,
}

/// Arguments for `planctl plan-create`.
#[derive(Debug, Parser)]
pub struct PlanCreateArgs {
    /// Name of the new plan.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    #[command(flatten)]
    pub flags: PlanCreateFlags,
}

/// Options accepted by `plan-create`. Omitted options keep their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct PlanCreateFlags {
    /// Relative CPU weight (minimum 2).
    #[arg(
        short = 'c',
        long = "cpushare",
        value_name = "CPUSHARE",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub cpushare: i64,

    /// Memory limit in bytes (minimum 4194304 when set).
    #[arg(
        short = 'm',
        long,
        value_name = "BYTES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub memory: i64,

    /// Swap limit in bytes.
    #[arg(
        short = 's',
        long,
        value_name = "BYTES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub swap: i64,

    /// Use this plan when none is specified.
    #[arg(short = 'd', long)]
    pub default: bool,

    /// Router to associate with the plan.
    #[arg(short = 'r', long, value_name = "ROUTER")]
    pub router: Option<String>,
}

/// Arguments for `planctl plan-remove`.
#[derive(Debug, Parser)]
pub struct PlanRemoveArgs {
    /// Name of the plan to remove.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}
