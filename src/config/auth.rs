use std::env;

use chrono::Duration;

/// Signing configuration for identity tokens.
///
/// Loaded once at startup and handed to the token codec at construction; the
/// secret and TTL never change for the life of the process.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-this-secret-before-deploying".to_string()),
            token_ttl: Duration::seconds(
                env::var("JWT_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(86400), // 24 hours
            ),
        }
    }
}
