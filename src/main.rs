mod cli;
mod commands;
mod config;
mod constants;
mod ocm;
mod profile;
mod ui;
mod validation;

use clap::Parser;
use cli::{Cli, Commands, CreateResource};

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create { resource } => match resource {
            CreateResource::Cluster(args) => commands::create::create_cluster(args).await,
        },
        Commands::Versions(args) => commands::versions::list_versions(args).await,
    };

    if let Err(e) = result {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
