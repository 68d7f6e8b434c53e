use vigia_config::VigiaConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod ask;
pub mod interpret;
pub mod ranking;
pub mod schema;
pub mod session;
pub mod status;

pub async fn dispatch(
    command: Commands,
    config: &VigiaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ask(args) => ask::handle(&args, config, flags).await,
        Commands::Interpret(args) => interpret::handle(&args, config, flags),
        Commands::Ranking => ranking::handle(config, flags).await,
        Commands::Status => status::handle(config, flags).await,
        Commands::Session(args) => session::handle(&args, config, flags).await,
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
