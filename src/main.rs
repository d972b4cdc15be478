mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    router, startup,
    state::{AppState, UploadSettings},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let store = config.storage_backend.connect(db.clone());

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState::new(
        store,
        UploadSettings {
            dir: config.upload_dir.clone(),
            public_url: config.public_url.clone(),
        },
    );

    let app = router::app(state).layer(startup::cors_layer(&config.cors_origins)?);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!(
        "Starting server on {} with {:?} storage",
        config.bind_address,
        config.storage_backend
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}
