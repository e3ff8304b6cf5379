mod bot;
mod config;
mod data;
mod engine;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use tracing::info;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, &config);

    info!("Starting tacklebox");

    bot::start::start_bot(&config, state).await
}
