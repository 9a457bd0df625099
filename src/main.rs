use std::sync::PoisonError;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use parody_finder::core::api::parody_lookup::ParodyLookup;
use parody_finder::core::cli::{cli_data::Cli, handle_cli::handle_cli};
use parody_finder::core::paths::PATHS;
use parody_finder::core::settings_config::Settings;
use parody_finder::gui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parody_finder=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(config_dir) = cli.config_dir {
        PATHS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_config_dir_path(config_dir);
    }

    let settings = Settings::load().context("failed to load settings")?;

    // the endpoint override only lasts for this session, it never gets saved
    let mut lookup_settings = settings.lookup.clone();
    if let Some(endpoint) = cli.endpoint {
        lookup_settings.endpoint = endpoint;
    }
    let lookup =
        ParodyLookup::from_settings(&lookup_settings).context("failed to set up the http client")?;

    tracing::info!("using movie lookup service at {}", lookup.endpoint());

    if let Some(command) = cli.command {
        let runtime = tokio::runtime::Runtime::new().context("failed to start the async runtime")?;
        return runtime.block_on(handle_cli(command, &settings, &lookup));
    }

    gui::run(settings, lookup).context("failed to run the gui")
}
