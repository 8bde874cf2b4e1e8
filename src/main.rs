use std::sync::Arc;

use log::info;
use postdesk::config::Config;
use postdesk::database::setup_database;
use postdesk::logging::init_logging;
use postdesk::{setup_router, AppState, SqlitePostStore};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    let _logger = init_logging(&config.log_level)?;

    let pool = setup_database(&config.database_url).await?;
    let state = AppState::new(Arc::new(SqlitePostStore::new(pool)));
    let app = setup_router(state);

    let addr = config.server_addr();
    info!("event=server_listen status=ok addr={addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
