mod app;
mod command;
mod config;
mod form;
mod logging;
mod table;
mod terminal;

use anyhow::Context;
use clap::Parser;
use clientes_core::{ClientesApi, ClientesClient, UreqTransport};

use crate::config::Config;
use crate::terminal::Terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init_logger(config.verbose);
    config.validate().context("invalid configuration")?;

    tracing::info!(api = %config.api_base, "starting clientes console");
    if config.verbose {
        tracing::debug!("config: {:?}", config);
    }

    let api = ClientesApi::new(
        ClientesClient::new(&config.api_base),
        UreqTransport::new(config.timeout()),
    );
    let mut terminal = Terminal::new(std::io::stdin().lock(), std::io::stdout());
    app::run(&api, config.frontend_base(), &mut terminal).await
}
