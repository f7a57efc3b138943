//! Registration and password login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParam, User},
    service::auth::throttle::LoginThrottleService,
};

pub mod throttle;
pub mod token;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Service providing registration and login.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    jwt_secret: &'a str,
    throttle: &'a LoginThrottleService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(
        db: &'a DatabaseConnection,
        jwt_secret: &'a str,
        throttle: &'a LoginThrottleService,
    ) -> Self {
        Self {
            db,
            jwt_secret,
            throttle,
        }
    }

    /// Registers a new account and signs them in.
    ///
    /// The password is hashed with bcrypt before it reaches the database.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Bearer token and the created account
    /// - `Err(AppError::BadRequest)` - Invalid email, name, or password shape
    /// - `Err(AppError::AuthErr)` - Email already registered
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();
        if !email.contains('@') || email.len() < 3 {
            return Err(AppError::BadRequest("invalid email address".to_string()));
        }
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(InternalError::PasswordHash)?;

        let user = user_repo
            .create(CreateUserParam {
                email,
                password_hash,
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            })
            .await?;

        let token = token::issue_token(self.jwt_secret, user.id)?;
        Ok((token, user))
    }

    /// Authenticates by email and password.
    ///
    /// Failed attempts count toward the per-email throttle; a success clears
    /// the email's failure history. Unknown emails and wrong passwords both
    /// yield the same error.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Bearer token and the account
    /// - `Err(AppError::AuthErr)` - Bad credentials or throttled
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();
        self.throttle.check(&email).await?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(&email).await? else {
            self.throttle.record_failure(&email).await;
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches =
            bcrypt::verify(password, &user.password_hash).map_err(InternalError::PasswordHash)?;
        if !matches {
            self.throttle.record_failure(&email).await;
            return Err(AuthError::InvalidCredentials.into());
        }

        self.throttle.clear(&email).await;
        let token = token::issue_token(self.jwt_secret, user.id)?;
        Ok((token, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn register_then_login() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let throttle = LoginThrottleService::new();

        let service = AuthService::new(db, "secret", &throttle);
        let (_, user) = service
            .register("Adopter@Example.com", "hunter2hunter2", "Sam", "Reyes")
            .await?;
        assert_eq!(user.email, "adopter@example.com");

        let (token, logged_in) = service
            .login("adopter@example.com", "hunter2hunter2")
            .await?;
        assert_eq!(logged_in.id, user.id);
        assert!(!token.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let throttle = LoginThrottleService::new();

        let service = AuthService::new(db, "secret", &throttle);
        let result = service
            .register("short@example.com", "short", "Sam", "Reyes")
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn register_rejects_taken_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let throttle = LoginThrottleService::new();

        let service = AuthService::new(db, "secret", &throttle);
        service
            .register("dup@example.com", "hunter2hunter2", "Sam", "Reyes")
            .await?;
        let result = service
            .register("dup@example.com", "otherpassword", "Other", "Person")
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::EmailTaken))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let throttle = LoginThrottleService::new();

        let service = AuthService::new(db, "secret", &throttle);
        service
            .register("sam@example.com", "hunter2hunter2", "Sam", "Reyes")
            .await?;

        let result = service.login("sam@example.com", "wrong-password").await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_unknown_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let throttle = LoginThrottleService::new();

        let service = AuthService::new(db, "secret", &throttle);
        let result = service.login("ghost@example.com", "whatever-this-is").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn repeated_failures_trigger_throttle() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let throttle = LoginThrottleService::new();

        let service = AuthService::new(db, "secret", &throttle);
        for _ in 0..5 {
            let _ = service.login("ghost@example.com", "bad-password").await;
        }

        let result = service.login("ghost@example.com", "bad-password").await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::Throttled { .. }))
        ));
    }

    #[tokio::test]
    async fn factory_user_hash_does_not_panic_verify() {
        // The factory's placeholder hash is not a valid bcrypt string, so a
        // login against it must surface an error rather than panic.
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let throttle = LoginThrottleService::new();

        let user = factory::create_user(db).await.unwrap();
        let service = AuthService::new(db, "secret", &throttle);

        let result = service.login(&user.email, "any-password").await;
        assert!(result.is_err());
    }
}
