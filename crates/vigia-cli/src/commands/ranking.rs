use vigia_config::VigiaConfig;
use vigia_session::Completion;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::dashboard::render_ranking;
use crate::progress::Progress;

/// Handle `vigia ranking`.
pub async fn handle(config: &VigiaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = bootstrap::session(config)?;

    let spinner = Progress::spinner("Obteniendo ranking de comunas...");
    let completion = session.refresh_ranking().await;

    match (completion, &session.state().ranking_call.error) {
        (Completion::Failed, Some(error)) => {
            spinner.finish_err(error);
            anyhow::bail!("{error}")
        }
        _ => {
            spinner.finish_clear();
            println!("{}", render_ranking(session.state(), flags.format)?);
            Ok(())
        }
    }
}
