//! `chainstatus`: run the commit status hooks from a build script step.

mod cli;
mod host;
mod logging;

use chainstatus_core::PlaintextEncryption;
use chainstatus_github::OctocrabStatusClient;
use chainstatus_hooks::{ChainAction, PostChainStatus, PreChainStatus, StatusUpdater};
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

use crate::cli::{Cli, Commands, HostArgs};
use crate::host::{EnvVariables, StaticApplication};
use crate::logging::TracingConfig;

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error:?}");
        std::process::exit(1);
    }
}

async fn run() -> miette::Result<()> {
    let cli = cli::parse();

    logging::init_tracing(TracingConfig {
        format: cli.log_format,
        level: cli.level.into(),
        ..Default::default()
    })?;

    let span = tracing::info_span!(
        "chainstatus",
        correlation_id = %logging::correlation_id(),
    );
    dispatch(cli).instrument(span).await
}

async fn dispatch(cli: Cli) -> miette::Result<()> {
    let (chain, execution) = read_context(&cli.host)?;
    let updater = Arc::new(build_updater(&cli.host)?);

    match cli.command {
        Commands::PreChain => {
            PreChainStatus::new(updater).execute(&chain, &execution).await;
        }
        Commands::PostChain { outcome } => {
            let execution = execution.with_state(outcome);
            PostChainStatus::new(updater).execute(&chain, &execution).await;
        }
        Commands::Status { state } => {
            let outcome = updater.update_status(state, &chain, &execution).await;
            tracing::debug!(%outcome, "Status command finished");
        }
    }

    Ok(())
}

fn required<'a>(value: Option<&'a str>, flag: &str, env: &str) -> miette::Result<&'a str> {
    value.filter(|v| !v.trim().is_empty()).ok_or_else(|| {
        miette::miette!(
            help = format!("Pass --{flag} or set {env}"),
            "Missing {flag}"
        )
    })
}

fn read_context(
    args: &HostArgs,
) -> miette::Result<(chainstatus_core::Chain, chainstatus_core::ChainExecution)> {
    let plan_key = args.plan_key.as_deref().unwrap_or_default();
    let result_key = required(args.result_key.as_deref(), "result-key", "bamboo_planResultKey")?;
    Ok(host::read_env_context(plan_key, result_key)?)
}

fn build_updater(args: &HostArgs) -> miette::Result<StatusUpdater> {
    let base_url = required(args.base_url.as_deref(), "base-url", "CHAINSTATUS_BASE_URL")?;

    let mut client = OctocrabStatusClient::new();
    if let Some(api_url) = &args.api_url {
        client = client.with_api_base(api_url.clone());
    }
    if let Some(seconds) = args.timeout {
        client = client.with_timeout(Duration::from_secs(seconds));
    }

    let mut updater = StatusUpdater::new(
        Arc::new(EnvVariables),
        Arc::new(StaticApplication::new(base_url)),
        Arc::new(PlaintextEncryption),
        Arc::new(client),
    );
    if let Some(context) = &args.context {
        updater = updater.with_context(context.clone());
    }
    Ok(updater)
}
