use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use taskpad_auth::AuthError;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// The authenticated identity the gate attaches to a request.
///
/// Owned by the request's extensions; dropped when the request completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    /// Database id of the authenticated user. Always positive.
    pub id: i64,
}

/// Splits an `Authorization` header value into its bearer token.
///
/// The match is strict: exactly two space-separated parts, the first being
/// the literal lowercase `bearer`. `Bearer` with RFC capitalisation is
/// rejected; existing clients of this API send the lowercase scheme.
fn parse_bearer_header(value: Option<&str>) -> Result<&str, AuthError> {
    let value = value.ok_or(AuthError::MissingAuth)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::BadHeaderFormat),
    }
}

/// Request gate for protected routes.
///
/// Layer with `axum::middleware::from_fn_with_state`. Verifies the bearer
/// token, attaches [`CurrentUser`] to the request and runs the inner
/// handler; any failure short-circuits into a 401 before the handler is
/// reached. Rejected requests are never retried here.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|v| v.to_str().map_err(|_| AuthError::BadHeaderFormat))
        .transpose()?;

    let token = parse_bearer_header(value)?;
    let claims = state.tokens.parse(token, Utc::now())?;

    req.extensions_mut().insert(CurrentUser { id: claims.sub });
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent means the route was not layered with `require_auth`; treat
        // the caller as unauthenticated rather than guessing an identity.
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AppError::Auth(AuthError::MissingAuth))
    }
}

/// Infallible variant of [`CurrentUser`] for handlers that only want to know
/// whether a caller is authenticated. `None` means unauthenticated; there is
/// no sentinel id to collide with a real one.
#[derive(Debug, Clone, Copy)]
pub struct MaybeCurrentUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for MaybeCurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeCurrentUser(
            parts.extensions.get::<CurrentUser>().copied(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer_header_accepts_lowercase_scheme() {
        assert_eq!(parse_bearer_header(Some("bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_parse_bearer_header_missing() {
        assert_eq!(parse_bearer_header(None), Err(AuthError::MissingAuth));
    }

    #[test]
    fn test_parse_bearer_header_rejects_capitalised_scheme() {
        assert_eq!(
            parse_bearer_header(Some("Bearer abc.def.ghi")),
            Err(AuthError::BadHeaderFormat)
        );
        assert_eq!(
            parse_bearer_header(Some("BEARER abc.def.ghi")),
            Err(AuthError::BadHeaderFormat)
        );
    }

    #[test]
    fn test_parse_bearer_header_rejects_wrong_shape() {
        assert_eq!(parse_bearer_header(Some("")), Err(AuthError::BadHeaderFormat));
        assert_eq!(
            parse_bearer_header(Some("bearer")),
            Err(AuthError::BadHeaderFormat)
        );
        assert_eq!(
            parse_bearer_header(Some("bearer a b")),
            Err(AuthError::BadHeaderFormat)
        );
        assert_eq!(
            parse_bearer_header(Some("basic dXNlcjpwYXNz")),
            Err(AuthError::BadHeaderFormat)
        );
    }

    #[test]
    fn test_parse_bearer_header_empty_token_passes_through() {
        // The codec turns this into EmptyToken; the header shape itself is fine.
        assert_eq!(parse_bearer_header(Some("bearer ")), Ok(""));
    }
}
