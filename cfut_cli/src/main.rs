//! `cfut` — re-applies the team tag set to matching CloudFormation stacks.
//!
//! Uses `UsePreviousTemplate` and `UsePreviousValue` for each parameter,
//! so a run only touches tags, never stack resources. Stacks already
//! carrying the desired tags come back as a "no updates" validation
//! result, which is expected and ignored.
//!
//! Only root stacks whose name starts with `inventory` are processed;
//! function and environment are derived from the stack name convention
//! `<prefix>--<function>--<environment>`, with base stacks falling back
//! to `base` / `n/a`.

use anyhow::{Context, Result};
use clap::Parser;

use cfut_core::{CloudFormationProvider, Retagger};

#[derive(Parser)]
#[command(name = "cfut", version, about = "Updates tags for CloudFormation stacks")]
struct Cli {
    /// Increase verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    if config.region().is_none() {
        log::error!("No AWS region resolved, cannot construct the CloudFormation client");
        std::process::exit(255);
    }

    let client = aws_sdk_cloudformation::Client::new(&config);
    let provider = CloudFormationProvider::new(client);
    let retagger = Retagger::new().context("Failed to build the stack name classifier")?;

    let summary = retagger.run(&provider).await.context("Retag run aborted")?;

    log::info!(
        "Run complete: {} updated, {} unchanged, {} failed",
        summary.updated,
        summary.unchanged,
        summary.failed
    );

    if summary.has_failures() {
        anyhow::bail!("{} stack update(s) failed", summary.failed);
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
