use anyhow::Context;
use vigia_config::VigiaConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vigia status`.
pub async fn handle(config: &VigiaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = bootstrap::client(&config.api)?;

    let spinner = Progress::spinner("Consultando estado del servicio...");
    let status = client.status().await;
    spinner.finish_clear();

    let status = status
        .with_context(|| format!("scoring service at {} is not available", client.origin()))?;
    if !status.is_operational() {
        tracing::warn!(status = %status.status, "scoring service reports a non-operational status");
    }
    output(&status, flags.format)
}
