use profile_domain::{ProfileStore, SystemClock};
use profile_service::config::Config;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    profile_service::serve(&config, ProfileStore::new(SystemClock)).await?;

    Ok(())
}
