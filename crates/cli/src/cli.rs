use chainstatus_core::{ExecutionState, StatusState};
use clap::{Args, Parser, Subcommand};

use crate::logging::{LogLevel, TracingFormat};

#[derive(Parser, Debug)]
#[command(name = "chainstatus")]
#[command(about = "Report build chain results as GitHub commit statuses")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub host: HostArgs,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "info",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,
}

#[derive(Args, Debug)]
pub struct HostArgs {
    #[arg(
        long,
        global = true,
        env = "CHAINSTATUS_BASE_URL",
        help = "Base URL of the build server"
    )]
    pub base_url: Option<String>,

    #[arg(long, global = true, env = "bamboo_planKey", help = "Plan key of the chain")]
    pub plan_key: Option<String>,

    #[arg(
        long,
        global = true,
        env = "bamboo_planResultKey",
        help = "Result key of this chain run"
    )]
    pub result_key: Option<String>,

    #[arg(
        long,
        global = true,
        env = "CHAINSTATUS_API_URL",
        help = "GitHub API root, for GitHub Enterprise"
    )]
    pub api_url: Option<String>,

    #[arg(
        long,
        global = true,
        env = "CHAINSTATUS_CONTEXT",
        help = "Status context label"
    )]
    pub context: Option<String>,

    #[arg(
        long,
        global = true,
        env = "CHAINSTATUS_TIMEOUT",
        help = "Request timeout in seconds"
    )]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Mark the commit pending at the start of a chain")]
    PreChain,
    #[command(about = "Report the final result at the end of a chain")]
    PostChain {
        #[arg(
            long,
            env = "CHAINSTATUS_OUTCOME",
            help = "Final state: successful, failed, stopped or not-built"
        )]
        outcome: ExecutionState,
    },
    #[command(about = "Report an explicit status")]
    Status {
        #[arg(help = "pending, success, failure or error")]
        state: StatusState,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
