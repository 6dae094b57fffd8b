use std::{net::SocketAddr, sync::Arc};

use smartmap::server::{
    config::Config, data::user::DbUserRepository, error::AppError, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    if config.debug {
        tracing::warn!("Debug mode enabled, /fakeAuth and /docs are exposed");
    }

    let state = AppState::new(Arc::new(DbUserRepository::new(db)), config.debug);
    let app = router::app(state, session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
