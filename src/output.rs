//! Rendering of conversion results for the command line

use crate::conninfo::url_to_params;
use crate::core::{AppConfig, ConnInfoResult, OutputFormat};
use tracing::info;

/// Convert the configured URL and render it in the requested format
pub fn render(config: &AppConfig) -> ConnInfoResult<String> {
    let mut params = url_to_params(&config.url)?;
    info!("Decoded {} connection parameters", params.len());

    if config.redact {
        params.redact_password();
    }

    match config.format {
        OutputFormat::Conninfo => Ok(params.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&params)?),
    }
}
