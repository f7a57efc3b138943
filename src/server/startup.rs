use tracing::info;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::admin::code::SetupCodeService,
};

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date before the
/// application accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the platform has an administrator path on first boot.
///
/// When no admin account exists yet, generates a one-time setup code and logs it.
/// An operator reads the code from the logs and redeems it via `POST /api/v1/admin/setup`
/// to promote their account. When an admin already exists this does nothing.
///
/// # Arguments
/// - `db` - Database connection
/// - `setup_codes` - In-memory setup code store shared with the admin endpoints
///
/// # Returns
/// - `Ok(())` - Admin present, or a setup code was issued
/// - `Err(AppError::DbErr)` - Database error while checking for admins
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    setup_codes: &SetupCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = setup_codes.generate().await;
    info!("No admin account found. One-time setup code: {}", code);
    info!("Redeem it with POST /api/v1/admin/setup to promote an account.");

    Ok(())
}
