//! Arena Server Binary
//!
//! Serves the landing page, the game page, and the `/play` endpoint.

use clap::Parser;
use rps_arena::config::Config;
use rps_arena::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    rps_arena::log(&config.logs)?;
    Server::run(config).await?;
    Ok(())
}
