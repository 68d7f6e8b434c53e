use vigia_config::VigiaConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::output::dashboard::render_dashboard;
use crate::progress::Progress;

/// Handle `vigia ask`: session start with one query, then print every panel.
pub async fn handle(args: &AskArgs, config: &VigiaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = bootstrap::session(config)?;
    let query = args.query();

    let spinner = Progress::spinner("Consultando el servicio de riesgo...");
    session.start(Some(&query)).await;
    spinner.finish_clear();

    println!("{}", render_dashboard(session.state(), flags.format)?);

    if let Some(error) = &session.state().prediction.error {
        anyhow::bail!("{error}");
    }
    Ok(())
}
