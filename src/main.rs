//! tfrc-setup - Main entry point

use clap::Parser;
use log::debug;
use std::process::ExitCode;

use tfrc_setup::{init_logger, run_setup, set_failed, Cli, GitHubWorkflow, Result, WorkflowCommands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let workflow = GitHubWorkflow::from_env();

    match run(&cli, &workflow).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            set_failed(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, workflow: &GitHubWorkflow) -> Result<()> {
    let inputs = cli.resolve_inputs()?;

    // Mask before anything else can print
    workflow.set_secret(&inputs.token);

    init_logger(inputs.log_level);
    debug!("Starting tfrc-setup v{}", env!("CARGO_PKG_VERSION"));

    run_setup(&inputs, workflow).await?;
    Ok(())
}
