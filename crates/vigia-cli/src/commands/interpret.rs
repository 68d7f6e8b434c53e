use chrono::Utc;
use vigia_config::VigiaConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::InterpretArgs;
use crate::output::output;

/// Handle `vigia interpret`. Uses the configured tables; no network.
pub fn handle(args: &InterpretArgs, config: &VigiaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interpreter = bootstrap::interpreter(&config.query)?;
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let request = interpreter.interpret_on(&args.query(), today);
    output(&request, flags.format)
}
