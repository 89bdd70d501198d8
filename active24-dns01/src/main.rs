//! Active24 ACME DNS-01 solver entry point
//!
//! Invoked once per challenge by the dispatcher:
//!
//! ```text
//! GROUP_NAME=acme.example.com active24-dns01 present < challenge.json
//! GROUP_NAME=acme.example.com active24-dns01 cleanup < challenge.json
//! ```
//!
//! The challenge request is read as JSON from stdin. Logs go to stderr,
//! filtered by `RUST_LOG`. Credentials are read from the directory named by
//! `ACTIVE24_SECRETS_DIR`.

mod adapters;

use std::io::Read;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use active24_solver::{Active24Solver, ChallengeRequest, ChallengeSolver, SolverContext};
use adapters::FileSecretStore;
use anyhow::{Context, bail};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SECRETS_DIR: &str = "/var/run/secrets/active24";

/// Solver callback to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Present,
    CleanUp,
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "present" => Ok(Self::Present),
            "cleanup" | "clean-up" => Ok(Self::CleanUp),
            other => bail!("unknown operation '{other}', expected 'present' or 'cleanup'"),
        }
    }
}

/// API group the solver is registered under; required.
fn group_name(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => bail!("GROUP_NAME must be specified"),
    }
}

fn parse_request(input: &str) -> anyhow::Result<ChallengeRequest> {
    serde_json::from_str(input).context("invalid challenge request on stdin")
}

async fn run(operation: Operation) -> anyhow::Result<()> {
    let group = group_name(std::env::var("GROUP_NAME").ok())?;
    let secrets_dir = std::env::var("ACTIVE24_SECRETS_DIR")
        .ok()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_SECRETS_DIR.to_string());

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read challenge request from stdin")?;
    let request = parse_request(&input)?;

    let ctx = Arc::new(SolverContext::with_defaults(Arc::new(FileSecretStore::new(
        secrets_dir,
    ))));
    let solver = Active24Solver::new(ctx);
    tracing::info!("Solver '{}' serving group {group}", solver.name());

    match operation {
        Operation::Present => solver.present(&request).await?,
        Operation::CleanUp => solver.clean_up(&request).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // stdout is left to the dispatcher
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(arg) = std::env::args().nth(1) else {
        tracing::error!("Usage: active24-dns01 <present|cleanup> < challenge.json");
        return ExitCode::FAILURE;
    };
    let operation = match arg.parse::<Operation>() {
        Ok(op) => op,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(operation).await {
        tracing::error!("{operation:?} failed: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
