use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use adopt_dont_shop::server::{
    config::Config, error::AppError, router, scheduler::maintenance,
    service::admin::code::SetupCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let setup_codes = SetupCodeService::new();
    startup::check_for_admin(&db, &setup_codes).await?;

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = maintenance::start_scheduler(scheduler_db).await {
            error!("Maintenance scheduler error: {}", e);
        }
    });

    let state = AppState::new(db, config.jwt_secret.clone(), setup_codes);
    let app = router::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind listener: {}", e)))?;

    info!("Listening on port {}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
