use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;
use taskpad_auth::{TokenCodec, hash_password, verify_password};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{LoginRequest, LoginResponse, SignupRequest, UserResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn signup(db: &PgPool, dto: SignupRequest) -> Result<UserResponse, AppError> {
        let taken = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = $1")
            .bind(&dto.username)
            .fetch_optional(db)
            .await
            .context("failed to look up username")?;

        if taken.is_some() {
            return Err(AppError::BadRequest("username already taken".to_string()));
        }

        let hashed = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, UserResponse>(
            "INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id, username",
        )
        .bind(&dto.username)
        .bind(&hashed)
        .fetch_one(db)
        .await
        .context("failed to insert user")?;

        Ok(user)
    }

    #[instrument(skip(db, dto, tokens))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        tokens: &TokenCodec,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i64,
            password: String,
        }

        // An unknown username and a wrong password produce the same outcome;
        // the response never reveals which one it was.
        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, password FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .context("failed to look up user")?
        .ok_or(AppError::InvalidCredentials)?;

        verify_password(&user.password, &dto.password)?;

        let token = tokens.issue(user.id, Utc::now())?;

        Ok(LoginResponse { token })
    }
}
