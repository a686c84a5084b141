mod config;
mod data;
mod network;
mod protocol;
mod view;

use std::sync::Arc;

use tracing::{error, info, warn};

use config::Settings;
use protocol::LoadStatus;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Arc::new(Settings::from_env());
    info!("Loading benchmark data...");
    let dataset = data::load(&settings).await;
    if let LoadStatus::Unavailable { message } = dataset.status() {
        warn!("{} Clients can retry with a reload.", message);
    }

    let shared = network::session::SharedDataset::new(dataset);

    tokio::spawn(network::http_api::start(
        settings.http_addr.clone(),
        shared.clone(),
    ));

    if let Err(e) = network::server::run(&settings.ws_addr, shared, settings.clone()).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
