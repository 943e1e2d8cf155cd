use anyhow::Context;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::modules::users::model::{CreateUserDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    /// Look up a user by email address, exact and case-sensitive.
    ///
    /// Absence is a regular outcome here, not an error: the auth gate folds
    /// it into its own rejection.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email_address, password, created_at, updated_at
             FROM users
             WHERE email_address = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")?;

        Ok(user)
    }

    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        // ValidatedJson has already enforced presence of every field.
        let (Some(first_name), Some(last_name), Some(email_address), Some(password)) =
            (dto.first_name, dto.last_name, dto.email_address, dto.password)
        else {
            return Err(AppError::validation(vec![
                "Invalid request body".to_string(),
            ]));
        };

        let hashed = hash_password(&password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email_address, password)
             VALUES ($1, $2, $3, $4)
             RETURNING id, first_name, last_name, email_address, password, created_at, updated_at",
        )
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email_address)
        .bind(&hashed)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(email = %email_address, "Attempted to register an email that already exists");
                return AppError::validation(vec![
                    "The email address you entered already exists".to_string(),
                ]);
            }
            error!(error = %e, "Database error creating user");
            AppError::from(e)
        })?;

        info!(user.id = %user.id, email = %user.email_address, "User created");

        Ok(user)
    }
}
