use sqlx::PgPool;
use taskpad_auth::TokenCodec;

use crate::config::auth::AuthConfig;
use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;

/// Shared application state, cloned into every request.
///
/// Everything in here is immutable after [`init_app_state`] returns; the
/// pool and codec are internally shareable without locks.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: TokenCodec,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let auth_config = AuthConfig::from_env();

    AppState {
        db: init_db_pool().await,
        tokens: TokenCodec::new(auth_config.secret.as_bytes(), auth_config.token_ttl),
        cors_config: CorsConfig::from_env(),
    }
}
