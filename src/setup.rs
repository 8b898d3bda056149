//! Setup flow: write the rc file, validate the token, export its path

use log::{debug, info};
use std::path::PathBuf;

use crate::actions::WorkflowCommands;
use crate::cli::SetupInputs;
use crate::config::rc;
use crate::error::Result;
use crate::hcp::TfeClient;
use crate::rc::RcWriter;

/// Run the whole setup and return the absolute path of the written rc file.
///
/// The first failing step aborts the run. `TF_CLI_CONFIG_FILE` is exported
/// only once the token has been validated.
pub async fn run_setup(inputs: &SetupInputs, workflow: &dyn WorkflowCommands) -> Result<PathBuf> {
    debug!("Resolved inputs: {:?}", inputs);

    let writer = match &inputs.config_dir {
        Some(dir) => RcWriter::new(std::path::absolute(dir)?, inputs.format, inputs.append),
        None => RcWriter::in_home_dir(inputs.format, inputs.append)?,
    };
    let path = writer.path();
    info!("Config file: {}", path.display());

    writer.write(&inputs.token)?;

    let client = match &inputs.api_url {
        Some(url) => TfeClient::with_base_url(inputs.token.clone(), url.clone(), inputs.timeout)?,
        None => TfeClient::new(inputs.token.clone(), inputs.timeout)?,
    };

    info!("Validating token for org: {}", inputs.organization);
    client.validate_organization(&inputs.organization).await?;
    info!("Token validated for org: {}", inputs.organization);

    workflow.export_variable(rc::EXPORT_VAR, &path.to_string_lossy())?;
    Ok(path)
}
